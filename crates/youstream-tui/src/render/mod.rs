//! Main render/view function (View in TEA pattern)


use chrono::Utc;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use youstream_app::{AppState, Screen};

use crate::theme::palette;
use crate::widgets::{Dashboard, LoaderOverlay, LoginForm, RegisterForm};

/// Render the one screen the router picks for `state`.
///
/// Pure: reads state, never changes it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    match state.screen() {
        Screen::CredentialForm => frame.render_widget(LoginForm::new(&state.login), area),
        Screen::RegistrationForm => {
            if let Some(form) = &state.register {
                frame.render_widget(RegisterForm::new(form), area);
            }
        }
        Screen::LoadingOverlay => frame.render_widget(
            LoaderOverlay::new(state.loader).signing_in(state.is_authenticating()),
            area,
        ),
        Screen::Dashboard => {
            if let (Some(username), Some(feed)) = (state.session.username(), &state.feed) {
                frame.render_widget(
                    Dashboard::new(username, feed, Utc::now())
                        .show_descriptions(state.settings.ui.show_descriptions),
                    area,
                );
            }
        }
    }
}

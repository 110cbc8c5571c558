//! Credential form screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use youstream_app::login_form::{LoginField, LoginFormState};

use super::modal_overlay::centered_rect;
use super::TextInput;
use crate::theme::styles;

const FORM_WIDTH: u16 = 56;
const FORM_HEIGHT: u16 = 13;
const LABEL_WIDTH: usize = 10;

pub struct LoginForm<'a> {
    state: &'a LoginFormState,
}

impl<'a> LoginForm<'a> {
    pub fn new(state: &'a LoginFormState) -> Self {
        Self { state }
    }
}

impl Widget for LoginForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        Clear.render(rect, buf);

        let block = styles::modal_block(" YouStream ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // heading
            Constraint::Length(1), // tagline
            Constraint::Length(1),
            Constraint::Length(1), // username
            Constraint::Length(1), // password
            Constraint::Length(1),
            Constraint::Length(1), // button
            Constraint::Length(1), // message
            Constraint::Length(1),
            Constraint::Length(1), // hints
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(Line::styled("Sign in", styles::title()))
            .alignment(Alignment::Center)
            .render(rows[0], buf);
        Paragraph::new(Line::styled(
            "Discover videos that match your interests",
            styles::text_muted(),
        ))
        .alignment(Alignment::Center)
        .render(rows[1], buf);

        let focus = self.state.focus;
        TextInput::new("Username", &self.state.username)
            .label_width(LABEL_WIDTH)
            .focused(focus == LoginField::Username)
            .render(rows[3], buf);
        TextInput::new("Password", &self.state.password)
            .label_width(LABEL_WIDTH)
            .focused(focus == LoginField::Password)
            .render(rows[4], buf);

        let button_style = if self.state.is_complete() {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        Paragraph::new(Line::styled(" Log in ", button_style))
            .alignment(Alignment::Center)
            .render(rows[6], buf);

        if let Some(message) = &self.state.message {
            Paragraph::new(Line::styled(
                message.text.as_str(),
                styles::form_message(message),
            ))
            .alignment(Alignment::Center)
            .render(rows[7], buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" log in  ", styles::text_muted()),
            Span::styled("Ctrl+R", styles::keybinding()),
            Span::styled(" register  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" quit", styles::text_muted()),
        ]))
        .alignment(Alignment::Center)
        .render(rows[9], buf);
    }
}

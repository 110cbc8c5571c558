//! Registration form screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};
use youstream_app::register_form::{RegisterField, RegisterFormState};
use youstream_core::UsernameAvailability;

use super::modal_overlay::centered_rect;
use super::TextInput;
use crate::theme::styles;

const FORM_WIDTH: u16 = 64;
const FORM_HEIGHT: u16 = 20;
const LABEL_WIDTH: usize = 24;

pub const AVAILABLE_LABEL: &str = "✓ Username available";
pub const UNAVAILABLE_LABEL: &str = "✗ Username unavailable";
pub const SUBMITTING_LABEL: &str = "Registering...";

pub struct RegisterForm<'a> {
    state: &'a RegisterFormState,
}

impl<'a> RegisterForm<'a> {
    pub fn new(state: &'a RegisterFormState) -> Self {
        Self { state }
    }

    /// Line under a field: its validation error, or the availability result
    /// for the username.
    fn note(&self, field: RegisterField) -> Option<Line<'a>> {
        if let Some(error) = self.state.field_errors.get(&field) {
            return Some(Line::styled(format!("    {error}"), styles::status_red()));
        }
        if field != RegisterField::Username {
            return None;
        }
        match self.state.availability {
            UsernameAvailability::Available => {
                Some(Line::styled(format!("    {AVAILABLE_LABEL}"), styles::status_green()))
            }
            UsernameAvailability::Unavailable => {
                Some(Line::styled(format!("    {UNAVAILABLE_LABEL}"), styles::status_red()))
            }
            UsernameAvailability::Unknown => None,
        }
    }

    fn interest_selector(&self) -> Line<'a> {
        let focused = self.state.focus == RegisterField::InterestTag;
        let (marker, label_style) = if focused {
            ("› ", styles::accent_bold())
        } else {
            ("  ", styles::text_secondary())
        };

        let choice = if self.state.interest_tags.is_empty() {
            Span::styled("No interests available", styles::text_muted())
        } else {
            match self.state.selected_tag() {
                Some(tag) => Span::styled(tag.to_string(), styles::text_primary()),
                None => Span::styled("Select one", styles::text_muted()),
            }
        };
        let arrow_style = if focused {
            styles::keybinding()
        } else {
            styles::text_muted()
        };

        Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(
                format!("{:<LABEL_WIDTH$}", RegisterField::InterestTag.label()),
                label_style,
            ),
            Span::styled("◀ ", arrow_style),
            choice,
            Span::styled(" ▶", arrow_style),
        ])
    }
}

impl Widget for RegisterForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
        Clear.render(rect, buf);

        let block = styles::modal_block(" YouStream ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
        constraints.extend((0..RegisterField::ALL.len() * 2).map(|_| Constraint::Length(1)));
        constraints.extend([
            Constraint::Length(1), // button
            Constraint::Length(1), // message
            Constraint::Length(1), // hints
            Constraint::Min(0),
        ]);
        let rows = Layout::vertical(constraints).split(inner);

        Paragraph::new(Line::styled("Create account", styles::title()))
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        for (i, field) in RegisterField::ALL.into_iter().enumerate() {
            let input_row = rows[2 + i * 2];
            let note_row = rows[3 + i * 2];

            match self.state.field(field) {
                Some(text) => TextInput::new(field.label(), text)
                    .label_width(LABEL_WIDTH)
                    .focused(self.state.focus == field)
                    .render(input_row, buf),
                None => Paragraph::new(self.interest_selector()).render(input_row, buf),
            }

            if let Some(note) = self.note(field) {
                Paragraph::new(note).render(note_row, buf);
            }
        }

        let base = 2 + RegisterField::ALL.len() * 2;
        let button = if self.state.submitting {
            Line::styled(SUBMITTING_LABEL, styles::status_yellow())
        } else {
            Line::styled(" Register ", styles::focused_selected())
        };
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .render(rows[base], buf);

        if let Some(message) = &self.state.message {
            Paragraph::new(Line::styled(
                message.text.as_str(),
                styles::form_message(message),
            ))
            .alignment(Alignment::Center)
            .render(rows[base + 1], buf);
        }

        let hint = |key: &'static str, what: &'static str| {
            [
                Span::styled(key, styles::keybinding()),
                Span::styled(what, styles::text_muted()),
            ]
        };
        let hints: Vec<Span> = [
            hint("Tab", " next  "),
            hint("←/→", " interest  "),
            hint("Enter", " register  "),
            hint("Esc", " back to login"),
        ]
        .into_iter()
        .flatten()
        .collect();
        Paragraph::new(Line::from(hints))
            .alignment(Alignment::Center)
            .render(rows[base + 2], buf);
    }
}

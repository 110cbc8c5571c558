//! Single-line labelled text input

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use youstream_app::text_field::TextField;

use crate::theme::{palette, styles};

/// Renders `label  value` on one row, with a block cursor when focused.
///
/// Masked fields are shown as bullets.
pub struct TextInput<'a> {
    label: &'a str,
    field: &'a TextField,
    focused: bool,
    label_width: usize,
    placeholder: Option<&'a str>,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, field: &'a TextField) -> Self {
        Self {
            label,
            field,
            focused: false,
            label_width: label.chars().count() + 1,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Pad the label so several inputs line up
    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }

    /// Muted text shown while the field is empty and unfocused
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    fn value_spans(&self) -> Vec<Span<'static>> {
        let display = self.field.display();

        if !self.focused {
            return match (display.is_empty(), self.placeholder) {
                (true, Some(placeholder)) => {
                    vec![Span::styled(placeholder.to_string(), styles::text_muted())]
                }
                _ => vec![Span::styled(display, styles::text_primary())],
            };
        }

        let chars: Vec<char> = display.chars().collect();
        let cursor = self.field.cursor().min(chars.len());
        let before: String = chars[..cursor].iter().collect();
        let at = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars.get(cursor + 1..).unwrap_or_default().iter().collect();

        vec![
            Span::styled(before, styles::text_primary()),
            Span::styled(
                at.to_string(),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::REVERSED),
            ),
            Span::styled(after, styles::text_primary()),
        ]
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (marker, label_style) = if self.focused {
            ("› ", styles::accent_bold())
        } else {
            ("  ", styles::text_secondary())
        };

        let mut spans = vec![
            Span::styled(marker, label_style),
            Span::styled(
                format!("{:<width$}", self.label, width = self.label_width),
                label_style,
            ),
        ];
        spans.extend(self.value_spans());

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

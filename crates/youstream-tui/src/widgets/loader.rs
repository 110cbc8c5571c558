//! Loading overlay shown while signing in and until the first feed result

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Clear, Paragraph, Widget},
};
use youstream_app::LoaderState;

use super::modal_overlay::{centered_rect, dim_area, dim_background};
use crate::theme::styles;

pub const SIGNING_IN_LABEL: &str = "Signing in...";
pub const LOADING_FEED_LABEL: &str = "Loading your videos...";

const LOGO: [&str; 3] = ["╭─────╮", "│  ▶  │", "╰─────╯"];

pub struct LoaderOverlay {
    loader: LoaderState,
    signing_in: bool,
}

impl LoaderOverlay {
    pub fn new(loader: LoaderState) -> Self {
        Self {
            loader,
            signing_in: false,
        }
    }

    /// The login request is still in flight
    pub fn signing_in(mut self, signing_in: bool) -> Self {
        self.signing_in = signing_in;
        self
    }
}

impl Widget for LoaderOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let rect = centered_rect(36, 9, area);
        Clear.render(rect, buf);
        let block = styles::modal_block(" YouStream ");
        let inner = block.inner(rect);
        block.render(rect, buf);

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        let logo: Vec<Line> = LOGO
            .iter()
            .map(|row| Line::styled(*row, styles::accent_bold()))
            .collect();
        Paragraph::new(logo)
            .alignment(Alignment::Center)
            .render(rows[0], buf);

        Paragraph::new(Line::styled("YouStream", styles::title()))
            .alignment(Alignment::Center)
            .render(rows[1], buf);

        let label = if self.signing_in {
            SIGNING_IN_LABEL
        } else {
            LOADING_FEED_LABEL
        };
        Paragraph::new(Line::styled(label, styles::text_secondary()))
            .alignment(Alignment::Center)
            .render(rows[3], buf);

        if self.loader == LoaderState::FadingOut {
            dim_area(buf, rect, styles::text_muted());
        }
    }
}

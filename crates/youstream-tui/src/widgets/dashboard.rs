//! Authenticated dashboard: header, search bar, and the video feed

use chrono::{DateTime, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use youstream_app::feed::{FeedState, API_KEY_HINT};
use youstream_core::{FeedQuery, Video};

use super::TextInput;
use crate::theme::styles;

pub const LOADING_VIDEOS_LABEL: &str = "Loading videos...";

pub struct Dashboard<'a> {
    username: &'a str,
    feed: &'a FeedState,
    show_descriptions: bool,
    now: DateTime<Utc>,
}

impl<'a> Dashboard<'a> {
    pub fn new(username: &'a str, feed: &'a FeedState, now: DateTime<Utc>) -> Self {
        Self {
            username,
            feed,
            show_descriptions: true,
            now,
        }
    }

    pub fn show_descriptions(mut self, show: bool) -> Self {
        self.show_descriptions = show;
        self
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let hints = Line::from(vec![
            Span::styled("Ctrl+L", styles::keybinding()),
            Span::styled(" log out  ", styles::text_muted()),
            Span::styled("Ctrl+C", styles::keybinding()),
            Span::styled(" quit", styles::text_muted()),
        ]);
        let [title_area, hints_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(hints.width() as u16),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled("▶ YouStream", styles::accent_bold()),
            Span::raw("  "),
            Span::styled(format!("Welcome {}", self.username), styles::title()),
        ]))
        .render(title_area, buf);

        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .render(hints_area, buf);
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.feed.search_focused).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        TextInput::new("/", &self.feed.search_input)
            .focused(self.feed.search_focused)
            .placeholder("press / to search, Enter to run")
            .render(inner, buf);
    }

    fn query_line(&self) -> Line<'a> {
        match &self.feed.query {
            FeedQuery::Search(text) if !text.trim().is_empty() => Line::from(vec![
                Span::styled("Search results for: ", styles::text_muted()),
                Span::styled(text.clone(), styles::text_primary()),
            ]),
            FeedQuery::Interest(tag) if !tag.trim().is_empty() => Line::from(vec![
                Span::styled("Showing videos for: ", styles::text_muted()),
                Span::styled(tag.clone(), styles::text_primary()),
            ]),
            _ => Line::styled("Popular videos", styles::text_muted()),
        }
    }

    fn render_videos(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let item_height: u16 = if self.show_descriptions { 4 } else { 3 };
        let visible = usize::from((area.height / item_height).max(1));
        let offset = (self.feed.selected + 1).saturating_sub(visible);
        let width = usize::from(area.width);

        let mut lines = Vec::new();
        for (index, video) in self.feed.videos.iter().enumerate().skip(offset).take(visible) {
            lines.extend(self.video_lines(video, index == self.feed.selected, width));
        }
        Paragraph::new(lines).render(area, buf);
    }

    fn video_lines(&self, video: &Video, selected: bool, width: usize) -> Vec<Line<'static>> {
        let (marker, title_style) = if selected {
            ("▶ ", styles::focused_selected())
        } else {
            ("  ", styles::title())
        };

        let views = format_views(&video.views);
        let age = video.age_label(self.now);
        let meta = [
            video.channel.as_str(),
            video.duration.as_str(),
            views.as_str(),
            age.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");

        let mut lines = vec![
            Line::from(vec![
                Span::styled(marker, styles::accent_bold()),
                Span::styled(truncate(&video.title, width.saturating_sub(2)), title_style),
            ]),
            Line::styled(
                format!("  {}", truncate(&meta, width.saturating_sub(2))),
                styles::text_secondary(),
            ),
        ];
        if self.show_descriptions {
            let description = video.description.lines().next().unwrap_or_default();
            lines.push(Line::styled(
                format!("  {}", truncate(description, width.saturating_sub(2))),
                styles::text_muted(),
            ));
        }
        lines.push(Line::default());
        lines
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let banner_height = if self.feed.error.is_some() { 2 } else { 0 };
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(banner_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

        self.render_header(rows[0], buf);
        self.render_search(rows[1], buf);
        Paragraph::new(self.query_line()).render(rows[2], buf);

        if let Some(error) = &self.feed.error {
            Paragraph::new(vec![
                Line::styled(error.as_str(), styles::status_red()),
                Line::styled(API_KEY_HINT, styles::text_muted()),
            ])
            .render(rows[3], buf);
        }

        let body = rows[5];
        if self.feed.loading {
            Paragraph::new(Line::styled(LOADING_VIDEOS_LABEL, styles::status_yellow()))
                .alignment(Alignment::Center)
                .render(body, buf);
        } else if let Some(message) = self.feed.empty_message() {
            Paragraph::new(Line::styled(message, styles::text_muted()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(body, buf);
        } else {
            self.render_videos(body, buf);
        }
    }
}

/// Append "views" to bare counts ("12K" -> "12K views")
fn format_views(views: &str) -> String {
    if views.is_empty() || views.contains("view") {
        views.to_string()
    } else {
        format!("{views} views")
    }
}

/// Cut `text` to at most `max` columns, ending with an ellipsis when cut
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

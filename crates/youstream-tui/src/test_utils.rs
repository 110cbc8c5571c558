//! Test utilities for TUI rendering verification
//!
//! Widgets and whole frames are rendered into ratatui's `TestBackend` and
//! asserted on as plain text.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};
use youstream_app::feed::FeedState;
use youstream_app::{AppState, AuthPhase, LoaderState};
use youstream_core::{Session, Video};

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a whole frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string on any single row
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        line_content(self.buffer(), line).contains(text)
    }

    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        (x < buffer.area.width && y < buffer.area.height).then(|| buffer[(x, y)].symbol())
    }

    /// Whole screen as text, one row per line (handy in assertion messages)
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| line_content(buffer, y) + "\n")
            .collect()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn line_content(buffer: &Buffer, line: u16) -> String {
    if line >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|x| buffer[(x, line)].symbol())
        .collect()
}

/// An authenticated state showing the dashboard with the given videos
pub fn dashboard_state(username: &str, interest: Option<&str>, videos: Vec<Video>) -> AppState {
    let mut state = AppState::new();
    state.session = Session::authenticated(username, interest.map(str::to_string))
        .expect("test username is not blank");
    state.auth = AuthPhase::Authenticated;
    state.loader = LoaderState::Hidden;

    let mut feed = FeedState::new(interest, 20);
    let (token, _) = feed.start_fetch();
    feed.apply_loaded(token, videos, None);
    state.feed = Some(feed);
    state
}

pub fn test_video(id: &str, title: &str) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        channel: "Test Channel".to_string(),
        duration: "3:21".to_string(),
        views: "1.5K".to_string(),
        published_at: "2026-01-01T00:00:00Z".to_string(),
        ..Default::default()
    }
}

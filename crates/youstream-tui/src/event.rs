//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use youstream_app::{InputKey, Message};
use youstream_core::prelude::*;

/// How long one poll waits for input before emitting a tick (20 FPS)
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert a crossterm key event into the app's key vocabulary
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let input = match key.code {
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Tab if shift => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::PageUp => InputKey::PageUp,
        KeyCode::PageDown => InputKey::PageDown,
        _ => return None,
    };
    Some(input)
}

/// Translate a raw terminal event into an app message.
///
/// Only key presses matter; releases, repeats, mouse and resize events are
/// dropped (the next frame picks up a new terminal size on its own).
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        _ => None,
    }
}

/// Poll for terminal events, producing a `Tick` when nothing arrives in time
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }
    Ok(event_to_message(event::read()?))
}

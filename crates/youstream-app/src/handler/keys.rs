//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::register_form::RegisterField;
use crate::state::{AppState, Screen};
use crate::text_field::TextEdit;

/// Convert key events to messages based on the current screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.screen() {
        Screen::CredentialForm => handle_key_login(key),
        Screen::RegistrationForm => handle_key_register(state, key),
        Screen::LoadingOverlay => None,
        Screen::Dashboard => handle_key_dashboard(state, key),
    }
}

/// Keys that edit a single-line text input
fn text_edit(key: &InputKey) -> Option<TextEdit> {
    match key {
        InputKey::Char(c) => Some(TextEdit::Insert(*c)),
        InputKey::Backspace => Some(TextEdit::Backspace),
        InputKey::Delete => Some(TextEdit::Delete),
        InputKey::Left => Some(TextEdit::Left),
        InputKey::Right => Some(TextEdit::Right),
        InputKey::Home => Some(TextEdit::Home),
        InputKey::End => Some(TextEdit::End),
        _ => None,
    }
}

fn handle_key_login(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::Quit),
        InputKey::Enter => Some(Message::Submit),
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),
        InputKey::CharCtrl('r') => Some(Message::ShowRegistration),
        other => text_edit(&other).map(Message::Edit),
    }
}

fn handle_key_register(state: &AppState, key: InputKey) -> Option<Message> {
    let on_selector = state
        .register
        .as_ref()
        .is_some_and(|form| form.focus == RegisterField::InterestTag);

    match key {
        InputKey::Esc => Some(Message::ShowLogin),
        InputKey::Enter => Some(Message::Submit),
        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrev),
        InputKey::Right | InputKey::Char(' ') if on_selector => Some(Message::NextInterestTag),
        InputKey::Left if on_selector => Some(Message::PrevInterestTag),
        _ if on_selector => None,
        other => text_edit(&other).map(Message::Edit),
    }
}

fn handle_key_dashboard(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('l') {
        return Some(Message::Logout);
    }

    let search_focused = state.feed.as_ref().is_some_and(|feed| feed.search_focused);
    if search_focused {
        return match key {
            InputKey::Esc => Some(Message::BlurSearch),
            InputKey::Enter => Some(Message::Submit),
            other => text_edit(&other).map(Message::Edit),
        };
    }

    match key {
        InputKey::Char('/') | InputKey::Tab => Some(Message::FocusSearch),
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        _ => None,
    }
}

//! Main update function - handles state transitions (TEA pattern)

use youstream_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState, Screen};

use super::{feed, keys, register, session, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message and the actions to perform.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            info!("Quit requested");
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Form input, routed by screen
        // ─────────────────────────────────────────────────────────
        Message::Edit(edit) => match state.screen() {
            Screen::CredentialForm => {
                state.login.edit(edit);
                UpdateResult::none()
            }
            Screen::RegistrationForm => register::handle_edit(state, edit),
            Screen::Dashboard => feed::handle_edit(state, edit),
            Screen::LoadingOverlay => UpdateResult::none(),
        },

        Message::FocusNext => handle_focus(state, true),
        Message::FocusPrev => handle_focus(state, false),

        Message::NextInterestTag => {
            if let Some(form) = state.register.as_mut() {
                form.select_next_tag();
            }
            UpdateResult::none()
        }

        Message::PrevInterestTag => {
            if let Some(form) = state.register.as_mut() {
                form.select_prev_tag();
            }
            UpdateResult::none()
        }

        Message::Submit => match state.screen() {
            Screen::CredentialForm => session::handle_login_submit(state),
            Screen::RegistrationForm => register::handle_submit(state),
            Screen::Dashboard => feed::handle_search_submit(state),
            Screen::LoadingOverlay => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowRegistration => register::handle_show_registration(state),
        Message::ShowLogin => register::handle_show_login(state),
        Message::Logout => session::handle_logout(state),

        // ─────────────────────────────────────────────────────────
        // Auth Service
        // ─────────────────────────────────────────────────────────
        Message::LoginSucceeded { user, interest_tag } => {
            session::handle_login_succeeded(state, user, interest_tag)
        }
        Message::LoginFailed { message } => session::handle_login_failed(state, message),
        Message::RegistrationSucceeded { token, message } => {
            register::handle_registration_succeeded(state, token, message)
        }
        Message::RegistrationFailed { token, message } => {
            register::handle_registration_failed(state, token, message)
        }
        Message::RegistrationReturnDue => register::handle_registration_return(state),

        // ─────────────────────────────────────────────────────────
        // Catalog Service
        // ─────────────────────────────────────────────────────────
        Message::InterestTagsLoaded { tags } => register::handle_interest_tags_loaded(state, tags),
        Message::InterestTagsFailed { error } => {
            warn!("Could not load interest tags: {}", error);
            UpdateResult::none()
        }
        Message::UsernameCheckDue { token } => register::handle_username_check_due(state, token),
        Message::UsernameChecked {
            token,
            availability,
        } => register::handle_username_checked(state, token, availability),

        // ─────────────────────────────────────────────────────────
        // Feed
        // ─────────────────────────────────────────────────────────
        Message::FeedLoaded {
            token,
            videos,
            message,
        } => feed::handle_feed_loaded(state, token, videos, message),
        Message::FeedFailed { token, error } => feed::handle_feed_failed(state, token, error),
        Message::FocusSearch => {
            if let Some(feed) = state.feed.as_mut() {
                feed.search_focused = true;
            }
            UpdateResult::none()
        }
        Message::BlurSearch => {
            if let Some(feed) = state.feed.as_mut() {
                feed.search_focused = false;
            }
            UpdateResult::none()
        }
        Message::ScrollUp => {
            if let Some(feed) = state.feed.as_mut() {
                feed.select_prev();
            }
            UpdateResult::none()
        }
        Message::ScrollDown => {
            if let Some(feed) = state.feed.as_mut() {
                feed.select_next();
            }
            UpdateResult::none()
        }
        Message::LoaderFadeDone => session::handle_loader_fade_done(state),
    }
}

fn handle_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    match state.screen() {
        Screen::CredentialForm => state.login.focus_next(),
        Screen::RegistrationForm => {
            if let Some(form) = state.register.as_mut() {
                if forward {
                    form.focus_next();
                } else {
                    form.focus_prev();
                }
            }
        }
        Screen::LoadingOverlay | Screen::Dashboard => {}
    }
    UpdateResult::none()
}

//! Registration form handlers

use youstream_core::prelude::*;
use youstream_core::{RequestToken, UsernameAvailability};

use crate::login_form::FormMessage;
use crate::message::Message;
use crate::register_form::RegisterFormState;
use crate::state::{AppState, AuthPhase};
use crate::text_field::TextEdit;

use super::{TimerKind, UpdateAction, UpdateResult};

/// Shown on the registration form right after the server accepts it
pub const REGISTERED_MESSAGE: &str = "Registration successful! You can log in now.";

/// Shown on the credential form after returning from a registration
pub const LOG_IN_NOW_MESSAGE: &str = "Registration successful. You can log in now.";

/// Open the registration form with an empty draft
pub fn handle_show_registration(state: &mut AppState) -> UpdateResult {
    if state.auth != AuthPhase::LoggingIn || state.show_registration {
        return UpdateResult::none();
    }

    debug!("Showing registration form");
    state.login.reset();
    state.show_registration = true;
    state.register = Some(RegisterFormState::new());
    UpdateResult::action(UpdateAction::LoadInterestTags)
}

/// Leave the registration form, discarding the draft and its timers
pub fn handle_show_login(state: &mut AppState) -> UpdateResult {
    if !state.show_registration {
        return UpdateResult::none();
    }

    debug!("Leaving registration form");
    state.show_registration = false;
    state.register = None;
    state.login.message = None;
    UpdateResult::actions(vec![
        UpdateAction::CancelTimer(TimerKind::UsernameDebounce),
        UpdateAction::CancelTimer(TimerKind::RegistrationReturn),
    ])
}

pub fn handle_interest_tags_loaded(state: &mut AppState, tags: Vec<String>) -> UpdateResult {
    match state.register.as_mut() {
        Some(form) => {
            debug!("Loaded {} interest tags", tags.len());
            form.set_interest_tags(tags);
        }
        None => debug!("Interest tags arrived after the registration form closed"),
    }
    UpdateResult::none()
}

/// Edit a registration input; username edits restart the availability check
pub fn handle_edit(state: &mut AppState, edit: TextEdit) -> UpdateResult {
    let debounce = state.settings.timing.username_debounce();
    let Some(form) = state.register.as_mut() else {
        return UpdateResult::none();
    };

    if form.completed || !form.edit(edit) {
        return UpdateResult::none();
    }

    form.availability = UsernameAvailability::Unknown;

    if form.username_checkable() {
        let token = form.availability_seq.issue();
        UpdateResult::action(UpdateAction::ScheduleTimer {
            timer: TimerKind::UsernameDebounce,
            delay: debounce,
            message: Message::UsernameCheckDue { token },
        })
    } else {
        form.availability_seq.invalidate();
        UpdateResult::action(UpdateAction::CancelTimer(TimerKind::UsernameDebounce))
    }
}

/// Debounce elapsed: check the username if no newer edit happened
pub fn handle_username_check_due(state: &mut AppState, token: RequestToken) -> UpdateResult {
    let Some(form) = state.register.as_ref() else {
        return UpdateResult::none();
    };

    if !form.availability_seq.is_current(token) || !form.username_checkable() {
        debug!("Skipping superseded username check {}", token);
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::CheckUsername {
        token,
        username: form.username.value().to_string(),
    })
}

/// Apply an availability result if it belongs to the latest check
pub fn handle_username_checked(
    state: &mut AppState,
    token: RequestToken,
    availability: UsernameAvailability,
) -> UpdateResult {
    let Some(form) = state.register.as_mut() else {
        return UpdateResult::none();
    };

    if !form.availability_seq.is_current(token) {
        debug!("Dropping stale username check {}", token);
        return UpdateResult::none();
    }

    debug!("Username check {}: {:?}", token, availability);
    form.availability = availability;
    UpdateResult::none()
}

/// Enter on the registration form: validate locally, then register
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.register.as_mut() else {
        return UpdateResult::none();
    };

    if form.submitting || form.completed {
        return UpdateResult::none();
    }

    form.message = None;
    if !form.validate() {
        debug!(
            "Registration blocked by {} field error(s)",
            form.field_errors.len()
        );
        return UpdateResult::none();
    }

    let request = form.draft().to_request();
    let token = form.register_seq.issue();
    info!("Registering {} ({})", request.username, token);
    form.submitting = true;
    UpdateResult::action(UpdateAction::Register { token, request })
}

/// The open form, if `token` is the submission it is waiting for
fn submitting_form(state: &mut AppState, token: RequestToken) -> Option<&mut RegisterFormState> {
    match state.register.as_mut() {
        Some(form) if form.register_seq.is_current(token) => Some(form),
        _ => {
            debug!("Dropping registration result {} for a closed form", token);
            None
        }
    }
}

/// Server accepted: clear the draft and return to login after a pause
pub fn handle_registration_succeeded(
    state: &mut AppState,
    token: RequestToken,
    message: String,
) -> UpdateResult {
    let delay = state.settings.timing.registration_return();
    let Some(form) = submitting_form(state, token) else {
        return UpdateResult::none();
    };

    info!("Registration accepted: {}", message);
    form.submitting = false;
    form.clear_draft();
    form.completed = true;
    form.message = Some(FormMessage::success(REGISTERED_MESSAGE));

    UpdateResult::actions(vec![
        UpdateAction::CancelTimer(TimerKind::UsernameDebounce),
        UpdateAction::ScheduleTimer {
            timer: TimerKind::RegistrationReturn,
            delay,
            message: Message::RegistrationReturnDue,
        },
    ])
}

pub fn handle_registration_failed(
    state: &mut AppState,
    token: RequestToken,
    message: String,
) -> UpdateResult {
    let Some(form) = submitting_form(state, token) else {
        return UpdateResult::none();
    };

    warn!("Registration failed: {}", message);
    form.submitting = false;
    form.message = Some(FormMessage::error(message));
    UpdateResult::none()
}

/// Return to the credential form with a "log in now" message
pub fn handle_registration_return(state: &mut AppState) -> UpdateResult {
    if !state.show_registration {
        return UpdateResult::none();
    }

    state.show_registration = false;
    state.register = None;
    state.login.reset();
    state.login.message = Some(FormMessage::success(LOG_IN_NOW_MESSAGE));
    UpdateResult::none()
}

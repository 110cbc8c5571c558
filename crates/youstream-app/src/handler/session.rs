//! Login, logout and loading-overlay handlers

use youstream_api::LoginRequest;
use youstream_core::prelude::*;
use youstream_core::Session;

use crate::feed::FeedState;
use crate::login_form::FormMessage;
use crate::message::Message;
use crate::state::{AppState, AuthPhase, LoaderState};

use super::{TimerKind, UpdateAction, UpdateResult};

/// Shown when either credential field is empty
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";

/// Handle Enter on the credential form
pub fn handle_login_submit(state: &mut AppState) -> UpdateResult {
    if state.is_authenticating() {
        return UpdateResult::none();
    }

    if !state.login.is_complete() {
        state.login.message = Some(FormMessage::error(CREDENTIALS_REQUIRED));
        return UpdateResult::none();
    }

    let request = LoginRequest {
        username: state.login.username.value().to_string(),
        password: state.login.password.value().to_string(),
    };

    info!("Signing in as {}", request.username);
    state.login.message = None;
    state.auth = AuthPhase::Authenticating {
        username: request.username.clone(),
    };

    UpdateResult::action(UpdateAction::Login(request))
}

/// Login accepted: establish the session, mount the feed, show the loader
pub fn handle_login_succeeded(
    state: &mut AppState,
    user: Option<String>,
    interest_tag: Option<String>,
) -> UpdateResult {
    let submitted = match &state.auth {
        AuthPhase::Authenticating { username } => username.clone(),
        other => {
            debug!("Ignoring login result while {:?}", other);
            return UpdateResult::none();
        }
    };

    let username = user
        .filter(|u| !u.trim().is_empty())
        .unwrap_or(submitted);

    let Some(session) = Session::authenticated(username, interest_tag) else {
        warn!("Login succeeded without a usable username");
        state.auth = AuthPhase::LoggingIn;
        state.login.message = Some(FormMessage::error("Unknown error"));
        return UpdateResult::none();
    };

    info!(
        "Authenticated as {} (interest: {:?})",
        session.username().unwrap_or_default(),
        session.interest_tag()
    );

    state.login.message = Some(FormMessage::success(format!(
        "Login successful. Welcome {}!",
        session.username().unwrap_or_default()
    )));
    state.session = session;
    state.auth = AuthPhase::Authenticated;
    state.show_registration = false;
    state.register = None;
    state.loader = LoaderState::Visible;

    let mut feed = FeedState::new(state.session.interest_tag(), state.settings.feed.page_size);
    let (token, request) = feed.start_fetch();
    state.feed = Some(feed);

    UpdateResult::action(UpdateAction::FetchFeed { token, request })
}

/// Login rejected or unreachable: back to the form with a message
pub fn handle_login_failed(state: &mut AppState, message: String) -> UpdateResult {
    if !state.is_authenticating() {
        debug!("Ignoring login failure while {:?}", state.auth);
        return UpdateResult::none();
    }

    warn!("Login failed: {}", message);
    state.auth = AuthPhase::LoggingIn;
    state.login.message = Some(FormMessage::error(message));
    UpdateResult::none()
}

/// End the session and return to an empty credential form
pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    if state.auth != AuthPhase::Authenticated {
        return UpdateResult::none();
    }

    info!("Logging out {}", state.session.username().unwrap_or_default());
    state.session.clear();
    state.auth = AuthPhase::LoggingIn;
    state.feed = None;
    state.loader = LoaderState::Hidden;
    state.show_registration = false;
    state.login.reset();

    UpdateResult::action(UpdateAction::CancelTimer(TimerKind::LoaderFade))
}

/// The feed reported its first result: start fading the loader out
pub fn begin_loader_fade(state: &mut AppState) -> UpdateResult {
    if state.loader != LoaderState::Visible {
        return UpdateResult::none();
    }

    debug!("First feed result in, fading out loader");
    state.loader = LoaderState::FadingOut;
    UpdateResult::action(UpdateAction::ScheduleTimer {
        timer: TimerKind::LoaderFade,
        delay: state.settings.timing.loader_fade(),
        message: Message::LoaderFadeDone,
    })
}

pub fn handle_loader_fade_done(state: &mut AppState) -> UpdateResult {
    if state.loader == LoaderState::FadingOut {
        state.loader = LoaderState::Hidden;
    }
    UpdateResult::none()
}

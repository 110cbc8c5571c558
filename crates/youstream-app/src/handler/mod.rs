//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen
//! - `session`: Login, logout and loader handlers
//! - `register`: Registration form handlers
//! - `feed`: Dashboard feed handlers

pub(crate) mod feed;
pub(crate) mod keys;
pub(crate) mod register;
pub(crate) mod session;
pub(crate) mod update;


use std::time::Duration;

use youstream_api::{LoginRequest, RegisterRequest};
use youstream_core::{FeedRequest, RequestToken};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// User-facing form messages
pub use register::{LOG_IN_NOW_MESSAGE, REGISTERED_MESSAGE};
pub use session::CREDENTIALS_REQUIRED;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// The cancellable delayed callbacks the app uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Quiet period before checking username availability
    UsernameDebounce,
    /// Loader fade-out before unmount
    LoaderFade,
    /// Pause on the registration success message
    RegistrationReturn,
}

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// `POST /login`
    Login(LoginRequest),

    /// `POST /register`, answered with `RegistrationSucceeded`/`RegistrationFailed { token }`
    Register {
        token: RequestToken,
        request: RegisterRequest,
    },

    /// `GET /entertainment-types`
    LoadInterestTags,

    /// `POST /check-username`, answered with `UsernameChecked { token }`
    CheckUsername {
        token: RequestToken,
        username: String,
    },

    /// Popular or search fetch, answered with `FeedLoaded`/`FeedFailed`
    FetchFeed {
        token: RequestToken,
        request: FeedRequest,
    },

    /// Deliver `message` after `delay`, replacing any pending timer of the same kind
    ScheduleTimer {
        timer: TimerKind,
        delay: Duration,
        message: Message,
    },

    /// Drop a pending timer without delivering its message
    CancelTimer(TimerKind),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the event loop to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }

    pub fn has_action(&self, pred: impl Fn(&UpdateAction) -> bool) -> bool {
        self.actions.iter().any(pred)
    }
}

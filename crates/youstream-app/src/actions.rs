//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every service call runs in its own tokio task and reports back with a
//! [`Message`]. Responses with `success: false` are lifted into
//! [`Error::Service`] first, then service-reported and transport failures are
//! turned into user-facing text here so the update function never sees raw
//! errors.

use tokio::sync::{mpsc, watch};
use youstream_api::{
    Backend, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VideosResponse,
};
use youstream_core::prelude::*;
use youstream_core::{FeedRequest, RequestToken, UsernameAvailability};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::timers::TimerRegistry;

/// Login failed before reaching the Auth Service
pub const CONNECTION_ERROR: &str = "Connection error";

/// Login rejected without a message
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Registration failed without a usable server message
pub const REGISTRATION_ERROR: &str = "Error registering user";

/// Execute an action, spawning a background task where it needs I/O
pub fn handle_action<B: Backend>(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    backend: &B,
    timers: &mut TimerRegistry,
    shutdown_rx: &watch::Receiver<bool>,
) {
    match action {
        UpdateAction::Login(request) => {
            spawn_call(msg_tx, shutdown_rx, login(backend.clone(), request));
        }

        UpdateAction::Register { token, request } => {
            spawn_call(msg_tx, shutdown_rx, register(backend.clone(), token, request));
        }

        UpdateAction::LoadInterestTags => {
            spawn_call(msg_tx, shutdown_rx, interest_tags(backend.clone()));
        }

        UpdateAction::CheckUsername { token, username } => {
            spawn_call(
                msg_tx,
                shutdown_rx,
                check_username(backend.clone(), token, username),
            );
        }

        UpdateAction::FetchFeed { token, request } => {
            spawn_call(msg_tx, shutdown_rx, fetch_feed(backend.clone(), token, request));
        }

        UpdateAction::ScheduleTimer {
            timer,
            delay,
            message,
        } => {
            timers.schedule(timer, delay, message, msg_tx.clone());
        }

        UpdateAction::CancelTimer(timer) => {
            timers.cancel(timer);
        }
    }
}

/// Run `call` in the background and send its message, unless shutdown wins
fn spawn_call<F>(msg_tx: &mpsc::Sender<Message>, shutdown_rx: &watch::Receiver<bool>, call: F)
where
    F: std::future::Future<Output = Message> + Send + 'static,
{
    let msg_tx = msg_tx.clone();
    let mut shutdown_rx = shutdown_rx.clone();
    tokio::spawn(async move {
        tokio::select! {
            message = call => {
                if msg_tx.send(message).await.is_err() {
                    debug!("Service result dropped: message channel closed");
                }
            }
            _ = shutdown_rx.changed() => {
                debug!("Service call abandoned on shutdown");
            }
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Service calls
// ─────────────────────────────────────────────────────────────────────────────

async fn login<B: Backend>(backend: B, request: LoginRequest) -> Message {
    let result = backend
        .login(&request)
        .await
        .and_then(LoginResponse::into_result);
    match result {
        Ok(response) => Message::LoginSucceeded {
            user: response.user,
            interest_tag: response.entertainment_type,
        },
        Err(Error::Service { message }) => Message::LoginFailed {
            message: non_empty_or(message, UNKNOWN_ERROR),
        },
        Err(e) => {
            warn!("Login request failed: {}", e);
            Message::LoginFailed {
                message: CONNECTION_ERROR.to_string(),
            }
        }
    }
}

async fn register<B: Backend>(
    backend: B,
    token: RequestToken,
    request: RegisterRequest,
) -> Message {
    let result = backend
        .register(&request)
        .await
        .and_then(RegisterResponse::into_result);
    match result {
        Ok(response) => Message::RegistrationSucceeded {
            token,
            message: response.message,
        },
        Err(Error::Service { message }) => Message::RegistrationFailed {
            token,
            message: non_empty_or(message, REGISTRATION_ERROR),
        },
        Err(e) => {
            warn!("Register request {} failed: {}", token, e);
            Message::RegistrationFailed {
                token,
                message: REGISTRATION_ERROR.to_string(),
            }
        }
    }
}

async fn interest_tags<B: Backend>(backend: B) -> Message {
    match backend.interest_tags().await {
        Ok(response) => Message::InterestTagsLoaded {
            tags: response.types,
        },
        Err(e) => Message::InterestTagsFailed {
            error: e.to_string(),
        },
    }
}

/// A check that cannot reach the Catalog Service counts as unavailable
async fn check_username<B: Backend>(backend: B, token: RequestToken, username: String) -> Message {
    let availability = match backend.check_username(&username).await {
        Ok(response) => UsernameAvailability::from_available(response.available),
        Err(e) => {
            warn!("Username check {} failed: {}", token, e);
            UsernameAvailability::Unavailable
        }
    };
    Message::UsernameChecked {
        token,
        availability,
    }
}

async fn fetch_feed<B: Backend>(backend: B, token: RequestToken, request: FeedRequest) -> Message {
    let result = match &request {
        FeedRequest::Popular { max_results } => backend.popular(*max_results).await,
        FeedRequest::Search { query, max_results } => backend.search(query, *max_results).await,
    };
    feed_message(token, result)
}

fn feed_message(token: RequestToken, result: Result<VideosResponse>) -> Message {
    match result.and_then(VideosResponse::into_result) {
        Ok(response) => Message::FeedLoaded {
            token,
            videos: response.videos,
            message: response.message,
        },
        Err(e) => {
            debug!("Feed request {} failed: {}", token, e);
            Message::FeedFailed {
                token,
                error: e.user_message(),
            }
        }
    }
}

fn non_empty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

//! youstream-app - Application state and orchestration for YouStream
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: session and screen routing, the credential and registration
//! forms, the video feed, background service calls, cancellable timers,
//! the Engine that ties them together, OS signal handling, and
//! configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod feed;
pub mod handler;
pub mod input_key;
pub mod login_form;
pub mod message;
pub mod process;
pub mod register_form;
pub mod signals;
pub mod state;
pub mod text_field;
pub mod timers;

// Re-export primary types
pub use engine::Engine;
pub use handler::{TimerKind, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{route, AppState, AuthPhase, LoaderState, Screen};

//! youstream-tui - Terminal UI for the YouStream client
//!
//! This crate provides the ratatui-based terminal interface. It creates an
//! Engine from youstream-app over the HTTP backend client and adds terminal
//! rendering, event polling, and the four screens' widgets.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;

//! Centralized theme for the YouStream TUI.
//!
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions

pub mod palette;
pub mod styles;

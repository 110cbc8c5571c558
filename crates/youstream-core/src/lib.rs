//! # youstream-core - Core Domain Types
//!
//! Foundation crate for the YouStream client. Provides domain types, error
//! handling, request sequencing, and the relative-age labels shown on video
//! cards.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Session`] - Authenticated user + interest tag, or anonymous
//! - [`UsernameAvailability`] - Tri-state result of an availability check
//! - [`Video`] - Read-only projection of a video from the Video Service
//! - [`FeedQuery`] / [`FeedRequest`] - What drives the feed, and the request it maps to
//!
//! ### Request Ordering (`sequence`)
//! - [`RequestSequencer`] - Issues monotonically increasing [`RequestToken`]s per slot
//!
//! ### Age Labels (`age`)
//! - [`relative_age_label()`] - "today", "3 days ago", "2 months ago", ...
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum; `Service` carries server-reported failures verbatim
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use youstream_core::prelude::*;
//! ```

pub mod age;
pub mod error;
pub mod logging;
pub mod sequence;
pub mod types;

/// Prelude for common imports used throughout all YouStream crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use age::{age_in_days, relative_age_label, AgeBucket};
pub use error::{Error, Result, ResultExt};
pub use sequence::{RequestSequencer, RequestToken};
pub use types::{
    FeedQuery, FeedRequest, Session, UsernameAvailability, Video, DEFAULT_PAGE_SIZE,
};

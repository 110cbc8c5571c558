//! # youstream-api - Backend Service Client
//!
//! Talks to the three collaborator services of the YouStream backend over
//! HTTP + JSON.
//!
//! Depends on [`youstream_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Services (`services`)
//! - [`AuthService`] - `login`, `register`
//! - [`CatalogService`] - `interest_tags`, `check_username`
//! - [`VideoService`] - `popular`, `search`
//! - [`Backend`] - All three, cloneable into background tasks
//!
//! ### HTTP Client (`client`)
//! - [`ApiClient`] - reqwest implementation of every service
//! - [`HttpClientConfig`] - Base URL and timeouts
//!
//! ### Wire Types (`protocol`)
//! - Request/response DTOs matching the backend JSON

pub mod client;
pub mod protocol;
pub mod services;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{parse_base_url, ApiClient, HttpClientConfig, DEFAULT_BASE_URL};
pub use protocol::{
    InterestTagsResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UsernameCheckRequest, UsernameCheckResponse, VideosResponse,
};
pub use services::{AuthService, Backend, CatalogService, VideoService};

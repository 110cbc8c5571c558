//! Service traits for the three backend collaborators
//!
//! The app layer only talks to these traits, so the TUI runs against
//! [`crate::ApiClient`] while tests run against an in-memory fake.

use youstream_core::prelude::*;

use crate::protocol::{
    InterestTagsResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UsernameCheckResponse, VideosResponse,
};

/// Login and account creation
#[trait_variant::make(AuthService: Send)]
pub trait LocalAuthService {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse>;
}

/// Interest-tag enumeration and username availability
#[trait_variant::make(CatalogService: Send)]
pub trait LocalCatalogService {
    async fn interest_tags(&self) -> Result<InterestTagsResponse>;

    async fn check_username(&self, username: &str) -> Result<UsernameCheckResponse>;
}

/// Popular and search video listings
#[trait_variant::make(VideoService: Send)]
pub trait LocalVideoService {
    async fn popular(&self, max_results: u32) -> Result<VideosResponse>;

    async fn search(&self, query: &str, max_results: u32) -> Result<VideosResponse>;
}

/// Everything the client needs from the backend, cheap to clone into tasks
pub trait Backend:
    AuthService + CatalogService + VideoService + Clone + Send + Sync + 'static
{
}

impl<T> Backend for T where
    T: AuthService + CatalogService + VideoService + Clone + Send + Sync + 'static
{
}

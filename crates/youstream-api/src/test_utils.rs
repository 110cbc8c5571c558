//! In-memory backend for tests
//!
//! [`FakeBackend`] implements every service trait with scripted responses and
//! records each call, so app-level tests can assert on what was (or was not)
//! sent without a network.
//!
//! # Example
//!
//! ```ignore
//! let backend = FakeBackend::new();
//! backend.push_login(Ok(LoginResponse::ok("ana", Some("comedy"))));
//! // ... drive the engine ...
//! assert_eq!(backend.calls(), vec![ApiCall::Login { username: "ana".into(), password: "x".into() }]);
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use youstream_core::prelude::*;

use crate::protocol::{
    InterestTagsResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    UsernameCheckResponse, VideosResponse,
};
use crate::services::{AuthService, CatalogService, VideoService};

/// Interest tags served when nothing else is scripted
pub const DEFAULT_INTEREST_TAGS: &[&str] = &["Gaming", "Comedy", "Music", "Documentaries"];

/// One recorded backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login { username: String, password: String },
    Register(RegisterRequest),
    InterestTags,
    CheckUsername(String),
    Popular { max_results: u32 },
    Search { query: String, max_results: u32 },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<ApiCall>,
    login: VecDeque<Result<LoginResponse>>,
    register: VecDeque<Result<RegisterResponse>>,
    interest_tags: VecDeque<Result<InterestTagsResponse>>,
    /// (delay, response) so tests can make an older check resolve last
    username_checks: VecDeque<(Duration, Result<UsernameCheckResponse>)>,
    videos: VecDeque<(Duration, Result<VideosResponse>)>,
}

/// Scripted implementation of all three services
#[derive(Clone, Default)]
pub struct FakeBackend {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.inner.lock().expect("fake backend lock poisoned")
    }

    pub fn push_login(&self, response: Result<LoginResponse>) {
        self.state().login.push_back(response);
    }

    pub fn push_register(&self, response: Result<RegisterResponse>) {
        self.state().register.push_back(response);
    }

    pub fn push_interest_tags(&self, response: Result<InterestTagsResponse>) {
        self.state().interest_tags.push_back(response);
    }

    pub fn push_username_check(&self, response: Result<UsernameCheckResponse>) {
        self.push_username_check_after(Duration::ZERO, response);
    }

    pub fn push_username_check_after(
        &self,
        delay: Duration,
        response: Result<UsernameCheckResponse>,
    ) {
        self.state().username_checks.push_back((delay, response));
    }

    pub fn push_videos(&self, response: Result<VideosResponse>) {
        self.push_videos_after(Duration::ZERO, response);
    }

    pub fn push_videos_after(&self, delay: Duration, response: Result<VideosResponse>) {
        self.state().videos.push_back((delay, response));
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<ApiCall> {
        self.state().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    fn record(&self, call: ApiCall) {
        debug!("FakeBackend call: {:?}", call);
        self.state().calls.push(call);
    }

    async fn next_videos(&self) -> Result<VideosResponse> {
        let scripted = self.state().videos.pop_front();
        match scripted {
            Some((delay, response)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => Ok(VideosResponse::ok(Vec::new())),
        }
    }
}

impl AuthService for FakeBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.record(ApiCall::Login {
            username: request.username.clone(),
            password: request.password.clone(),
        });
        let scripted = self.state().login.pop_front();
        scripted.unwrap_or_else(|| Err(Error::http("no scripted login response")))
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        self.record(ApiCall::Register(request.clone()));
        let scripted = self.state().register.pop_front();
        scripted.unwrap_or_else(|| Ok(RegisterResponse::ok(request.username.clone())))
    }
}

impl CatalogService for FakeBackend {
    async fn interest_tags(&self) -> Result<InterestTagsResponse> {
        self.record(ApiCall::InterestTags);
        let scripted = self.state().interest_tags.pop_front();
        scripted.unwrap_or_else(|| {
            Ok(InterestTagsResponse {
                types: DEFAULT_INTEREST_TAGS.iter().map(|t| t.to_string()).collect(),
            })
        })
    }

    async fn check_username(&self, username: &str) -> Result<UsernameCheckResponse> {
        self.record(ApiCall::CheckUsername(username.to_string()));
        let scripted = self.state().username_checks.pop_front();
        match scripted {
            Some((delay, response)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                response
            }
            None => Ok(UsernameCheckResponse {
                available: true,
                message: "Username available".to_string(),
            }),
        }
    }
}

impl VideoService for FakeBackend {
    async fn popular(&self, max_results: u32) -> Result<VideosResponse> {
        self.record(ApiCall::Popular { max_results });
        self.next_videos().await
    }

    async fn search(&self, query: &str, max_results: u32) -> Result<VideosResponse> {
        self.record(ApiCall::Search {
            query: query.to_string(),
            max_results,
        });
        self.next_videos().await
    }
}

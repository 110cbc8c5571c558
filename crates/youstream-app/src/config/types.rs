//! Configuration types for YouStream
//!
//! Defines `Settings` (the `config.toml` file) and its sections.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use youstream_api::{HttpClientConfig, DEFAULT_BASE_URL};
use youstream_core::DEFAULT_PAGE_SIZE;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub feed: FeedSettings,

    #[serde(default)]
    pub timing: TimingSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// HTTP client configuration derived from `[api]`
    pub fn to_http_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            base_url: self.api.base_url.clone(),
            timeout_secs: self.api.timeout_secs,
            connect_timeout_secs: self.api.connect_timeout_secs,
            ..Default::default()
        }
    }
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the backend (every endpoint path is joined onto it)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_connect_timeout_secs() -> u64 {
    5
}

/// Feed settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedSettings {
    /// `maxResults` sent with every popular/search request
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Delays of the three client-side timers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TimingSettings {
    /// Quiet period after the last username edit before checking availability
    #[serde(default = "default_username_debounce_ms")]
    pub username_debounce_ms: u64,

    /// Fade-out of the loading overlay once the feed has loaded
    #[serde(default = "default_loader_fade_ms")]
    pub loader_fade_ms: u64,

    /// Pause on the registration success message before returning to login
    #[serde(default = "default_registration_return_ms")]
    pub registration_return_ms: u64,
}

impl TimingSettings {
    pub fn username_debounce(&self) -> Duration {
        Duration::from_millis(self.username_debounce_ms)
    }

    pub fn loader_fade(&self) -> Duration {
        Duration::from_millis(self.loader_fade_ms)
    }

    pub fn registration_return(&self) -> Duration {
        Duration::from_millis(self.registration_return_ms)
    }
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            username_debounce_ms: default_username_debounce_ms(),
            loader_fade_ms: default_loader_fade_ms(),
            registration_return_ms: default_registration_return_ms(),
        }
    }
}

fn default_username_debounce_ms() -> u64 {
    500
}

fn default_loader_fade_ms() -> u64 {
    600
}

fn default_registration_return_ms() -> u64 {
    1200
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Render the description line under each video
    #[serde(default = "default_true")]
    pub show_descriptions: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_descriptions: true,
        }
    }
}

fn default_true() -> bool {
    true
}

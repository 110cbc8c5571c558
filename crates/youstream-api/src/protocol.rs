//! Wire types for the YouStream backend
//!
//! Field names follow the backend's JSON exactly (`entertainment_type`,
//! `maxResults`, `publishedAt`), so every struct here is a plain serde DTO.

use serde::{Deserialize, Serialize};
use youstream_core::{Error, Result, Video};

// ─────────────────────────────────────────────────────────────────────────────
// Auth Service
// ─────────────────────────────────────────────────────────────────────────────

/// `POST /login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub entertainment_type: Option<String>,
}

impl LoginResponse {
    pub fn ok(user: impl Into<String>, entertainment_type: Option<&str>) -> Self {
        Self {
            success: true,
            message: "Login successful".to_string(),
            user: Some(user.into()),
            entertainment_type: entertainment_type.map(str::to_string),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
            entertainment_type: None,
        }
    }

    /// `success: false` becomes [`Error::Service`] carrying the server message
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::service(self.message))
        }
    }
}

/// `POST /register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub entertainment_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<String>,
}

impl RegisterResponse {
    pub fn ok(user: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "User registered".to_string(),
            user: Some(user.into()),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user: None,
        }
    }

    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::service(self.message))
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog Service
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /entertainment-types`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterestTagsResponse {
    #[serde(default)]
    pub types: Vec<String>,
}

/// `POST /check-username`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameCheckRequest {
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsernameCheckResponse {
    pub available: bool,
    #[serde(default)]
    pub message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Video Service
// ─────────────────────────────────────────────────────────────────────────────

/// Response of both `GET /api/videos/popular` and `GET /api/videos/search`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VideosResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl VideosResponse {
    pub fn ok(videos: Vec<Video>) -> Self {
        Self {
            success: true,
            message: None,
            videos,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            videos: Vec::new(),
        }
    }

    /// A failure without a message still surfaces as a service error
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            return Ok(self);
        }
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "service reported failure".to_string());
        Err(Error::service(message))
    }
}

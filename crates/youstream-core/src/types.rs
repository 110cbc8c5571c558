//! Core domain types for the YouStream client

use serde::{Deserialize, Serialize};

use crate::age::relative_age_label;

/// Page size requested for every feed fetch unless configured otherwise
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// Who is using the client right now.
///
/// Either fully anonymous or fully authenticated: there is no way to build an
/// authenticated session without a username.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user: Option<AuthenticatedUser>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AuthenticatedUser {
    username: String,
    interest_tag: Option<String>,
}

impl Session {
    /// A session with nobody logged in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build an authenticated session.
    ///
    /// Returns `None` when `username` is blank. A blank interest tag is
    /// normalized to "no interest".
    pub fn authenticated(
        username: impl Into<String>,
        interest_tag: Option<String>,
    ) -> Option<Self> {
        let username = username.into();
        if username.trim().is_empty() {
            return None;
        }
        let interest_tag = interest_tag.filter(|tag| !tag.trim().is_empty());
        Some(Self {
            user: Some(AuthenticatedUser {
                username,
                interest_tag,
            }),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name of the logged-in user
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    /// Declared entertainment interest of the logged-in user
    pub fn interest_tag(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.interest_tag.as_deref())
    }

    /// Drop everything (logout)
    pub fn clear(&mut self) {
        self.user = None;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Username availability
// ─────────────────────────────────────────────────────────────────────────────

/// Result of the most recent availability check for the current username draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsernameAvailability {
    /// No check has resolved for the current draft value
    #[default]
    Unknown,
    Available,
    Unavailable,
}

impl UsernameAvailability {
    pub fn from_available(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Unavailable
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Video
// ─────────────────────────────────────────────────────────────────────────────

/// A video as returned by the Video Service.
///
/// `duration` and `views` arrive pre-formatted ("4:13", "12K"); the client
/// renders them untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub views: String,
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub description: String,
}

impl Video {
    /// Relative publication label ("today", "3 weeks ago").
    ///
    /// Falls back to the raw timestamp when it cannot be parsed.
    pub fn age_label(&self, now: chrono::DateTime<chrono::Utc>) -> String {
        match chrono::DateTime::parse_from_rfc3339(&self.published_at) {
            Ok(published) => relative_age_label(published.with_timezone(&chrono::Utc), now),
            Err(_) => self.published_at.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feed query
// ─────────────────────────────────────────────────────────────────────────────

/// What currently drives the video feed.
///
/// Starts as the user's interest tag and is replaced for good by the first
/// submitted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedQuery {
    /// Seeded from the session; empty means "no interest declared"
    Interest(String),
    /// Free text typed into the search bar
    Search(String),
}

impl FeedQuery {
    pub fn from_interest(tag: Option<&str>) -> Self {
        Self::Interest(tag.unwrap_or_default().to_string())
    }

    pub fn text(&self) -> &str {
        match self {
            FeedQuery::Interest(text) | FeedQuery::Search(text) => text,
        }
    }

    pub fn is_search(&self) -> bool {
        matches!(self, FeedQuery::Search(_))
    }

    /// Map the query to the Video Service operation it needs.
    ///
    /// Blank text (after trimming) falls back to the popular list.
    pub fn to_request(&self, max_results: u32) -> FeedRequest {
        let text = self.text().trim();
        if text.is_empty() {
            FeedRequest::Popular { max_results }
        } else {
            FeedRequest::Search {
                query: self.text().to_string(),
                max_results,
            }
        }
    }
}

/// A concrete Video Service call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedRequest {
    Popular { max_results: u32 },
    Search { query: String, max_results: u32 },
}

impl FeedRequest {
    pub fn is_popular(&self) -> bool {
        matches!(self, FeedRequest::Popular { .. })
    }

    /// Short operation name for logging
    pub fn operation(&self) -> &'static str {
        match self {
            FeedRequest::Popular { .. } => "popular",
            FeedRequest::Search { .. } => "search",
        }
    }
}

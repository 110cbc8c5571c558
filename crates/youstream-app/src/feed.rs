//! Feed view state
//!
//! The feed is driven by a single [`FeedQuery`]. Every fetch is tagged with a
//! [`RequestToken`]; responses for anything but the latest token are dropped,
//! so an older slow search can never overwrite a newer one.

use youstream_core::prelude::*;
use youstream_core::{FeedQuery, FeedRequest, RequestSequencer, RequestToken, Video};

use crate::text_field::{TextEdit, TextField};

/// Banner shown when a popular fetch fails
pub const LOAD_ERROR: &str = "Error loading videos. Please check the API configuration.";

/// Banner shown when a search fails
pub const SEARCH_ERROR: &str = "Error searching videos. Please check the API configuration.";

/// Second line of the error banner
pub const API_KEY_HINT: &str = "The backend needs a YouTube API key configured to serve videos.";

/// Shown for an empty successful result without a server message
pub const EMPTY_FEED_MESSAGE: &str = "No videos found. Try another search or category.";

/// What happened to a fetch response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Applied; `first` is true for the first completion of this feed
    Applied { first: bool },
    /// A newer fetch was issued after this one
    Stale,
}

#[derive(Debug, Clone)]
pub struct FeedState {
    /// Interest tag from the session (for the "Showing videos for" line)
    pub interest_tag: Option<String>,

    /// What the feed currently shows
    pub query: FeedQuery,

    /// Search bar contents, seeded with the interest tag
    pub search_input: TextField,

    pub search_focused: bool,

    pub videos: Vec<Video>,

    pub loading: bool,

    /// Error banner text
    pub error: Option<String>,

    /// Message sent by the server with an empty result
    pub api_message: Option<String>,

    /// Highlighted video in the list
    pub selected: usize,

    pub page_size: u32,

    sequencer: RequestSequencer,
    last_request: Option<FeedRequest>,
    first_load_reported: bool,
}

impl FeedState {
    pub fn new(interest_tag: Option<&str>, page_size: u32) -> Self {
        Self {
            interest_tag: interest_tag.map(str::to_string),
            query: FeedQuery::from_interest(interest_tag),
            search_input: TextField::with_value(interest_tag.unwrap_or_default()),
            search_focused: false,
            videos: Vec::new(),
            loading: false,
            error: None,
            api_message: None,
            selected: 0,
            page_size,
            sequencer: RequestSequencer::new(),
            last_request: None,
            first_load_reported: false,
        }
    }

    /// Issue a fetch for the current query
    pub fn start_fetch(&mut self) -> (RequestToken, FeedRequest) {
        let token = self.sequencer.issue();
        let request = self.query.to_request(self.page_size);
        self.loading = true;
        self.error = None;
        self.api_message = None;
        self.last_request = Some(request.clone());
        debug!("Feed fetch {} ({})", token, request.operation());
        (token, request)
    }

    /// Replace the query with the search bar text and fetch it.
    ///
    /// From here on the feed never goes back to the interest tag.
    pub fn submit_search(&mut self) -> (RequestToken, FeedRequest) {
        self.query = FeedQuery::Search(self.search_input.value().to_string());
        self.search_focused = false;
        self.start_fetch()
    }

    pub fn edit_search(&mut self, edit: TextEdit) {
        self.search_input.apply(edit);
    }

    /// Apply a successful response
    pub fn apply_loaded(
        &mut self,
        token: RequestToken,
        videos: Vec<Video>,
        message: Option<String>,
    ) -> FeedOutcome {
        if !self.sequencer.is_current(token) {
            debug!("Dropping stale feed response {}", token);
            return FeedOutcome::Stale;
        }
        self.loading = false;
        self.error = None;
        self.videos = videos;
        self.api_message = message.filter(|m| !m.trim().is_empty());
        self.selected = 0;
        FeedOutcome::Applied {
            first: self.mark_completed(),
        }
    }

    /// Apply a failure (service-reported or transport).
    ///
    /// The previously shown videos stay on screen under the banner.
    pub fn apply_failed(&mut self, token: RequestToken, error: &str) -> FeedOutcome {
        if !self.sequencer.is_current(token) {
            debug!("Dropping stale feed failure {}: {}", token, error);
            return FeedOutcome::Stale;
        }
        warn!("Feed fetch {} failed: {}", token, error);
        self.loading = false;
        let is_popular = self
            .last_request
            .as_ref()
            .map(FeedRequest::is_popular)
            .unwrap_or(true);
        self.error = Some(if is_popular { LOAD_ERROR } else { SEARCH_ERROR }.to_string());
        FeedOutcome::Applied {
            first: self.mark_completed(),
        }
    }

    fn mark_completed(&mut self) -> bool {
        let first = !self.first_load_reported;
        self.first_load_reported = true;
        first
    }

    /// Empty-state text, when there is nothing else to show
    pub fn empty_message(&self) -> Option<&str> {
        if self.loading || self.error.is_some() || !self.videos.is_empty() {
            return None;
        }
        if self.last_request.is_none() {
            return None;
        }
        Some(self.api_message.as_deref().unwrap_or(EMPTY_FEED_MESSAGE))
    }

    pub fn select_next(&mut self) {
        if !self.videos.is_empty() {
            self.selected = (self.selected + 1).min(self.videos.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn last_request(&self) -> Option<&FeedRequest> {
        self.last_request.as_ref()
    }
}

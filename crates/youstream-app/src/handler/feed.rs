//! Dashboard feed handlers

use youstream_core::prelude::*;
use youstream_core::{RequestToken, Video};

use crate::feed::FeedOutcome;
use crate::state::AppState;
use crate::text_field::TextEdit;

use super::{session, UpdateAction, UpdateResult};

pub fn handle_edit(state: &mut AppState, edit: TextEdit) -> UpdateResult {
    if let Some(feed) = state.feed.as_mut() {
        if feed.search_focused {
            feed.edit_search(edit);
        }
    }
    UpdateResult::none()
}

/// Enter in the search bar: the typed text replaces the interest query
pub fn handle_search_submit(state: &mut AppState) -> UpdateResult {
    let Some(feed) = state.feed.as_mut() else {
        return UpdateResult::none();
    };

    if !feed.search_focused {
        return UpdateResult::none();
    }

    let (token, request) = feed.submit_search();
    info!("Searching feed: {:?}", request);
    UpdateResult::action(UpdateAction::FetchFeed { token, request })
}

pub fn handle_feed_loaded(
    state: &mut AppState,
    token: RequestToken,
    videos: Vec<Video>,
    message: Option<String>,
) -> UpdateResult {
    let Some(feed) = state.feed.as_mut() else {
        debug!("Feed response {} arrived after logout", token);
        return UpdateResult::none();
    };

    let count = videos.len();
    match feed.apply_loaded(token, videos, message) {
        FeedOutcome::Applied { first } => {
            debug!("Feed {} loaded {} videos", token, count);
            if first {
                session::begin_loader_fade(state)
            } else {
                UpdateResult::none()
            }
        }
        FeedOutcome::Stale => UpdateResult::none(),
    }
}

pub fn handle_feed_failed(state: &mut AppState, token: RequestToken, error: String) -> UpdateResult {
    let Some(feed) = state.feed.as_mut() else {
        debug!("Feed failure {} arrived after logout", token);
        return UpdateResult::none();
    };

    match feed.apply_failed(token, &error) {
        FeedOutcome::Applied { first: true } => session::begin_loader_fade(state),
        FeedOutcome::Applied { first: false } | FeedOutcome::Stale => UpdateResult::none(),
    }
}

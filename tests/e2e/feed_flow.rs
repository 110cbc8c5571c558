//! Dashboard search, staleness, failures, and scrolling

use std::time::Duration;

use youstream_api::test_utils::ApiCall;
use youstream_api::VideosResponse;
use youstream_app::feed::SEARCH_ERROR;
use youstream_app::InputKey;
use youstream_core::FeedQuery;

use crate::{log_in, press, run_until, settle, test_engine, test_video, type_text, TestEngine};

/// Focus the search bar, replace its text, and press Enter
fn search(engine: &mut TestEngine, text: &str) {
    press(engine, InputKey::Char('/'));
    press(engine, InputKey::End);
    let len = engine
        .state
        .feed
        .as_ref()
        .map(|feed| feed.search_input.char_len())
        .unwrap_or_default();
    for _ in 0..len {
        press(engine, InputKey::Backspace);
    }
    type_text(engine, text);
    press(engine, InputKey::Enter);
}

fn titles(engine: &TestEngine) -> Vec<String> {
    engine
        .state
        .feed
        .as_ref()
        .map(|feed| feed.videos.iter().map(|v| v.title.clone()).collect())
        .unwrap_or_default()
}

#[tokio::test(start_paused = true)]
async fn test_search_bar_is_seeded_with_interest() {
    let (mut engine, backend) = test_engine();
    log_in(&mut engine, &backend, "ana", Some("comedy"), Vec::new()).await;

    let feed = engine.state.feed.as_ref().unwrap();
    assert_eq!(feed.search_input.value(), "comedy");
    assert_eq!(feed.query, FeedQuery::Interest("comedy".into()));
}

#[tokio::test(start_paused = true)]
async fn test_search_replaces_interest_query() {
    let (mut engine, backend) = test_engine();
    log_in(&mut engine, &backend, "ana", Some("comedy"), Vec::new()).await;
    backend.push_videos(Ok(VideosResponse::ok(vec![test_video("j1", "Jazz live")])));

    search(&mut engine, "jazz");
    run_until(&mut engine, "search result", |s| {
        s.feed.as_ref().is_some_and(|f| !f.loading)
    })
    .await;

    assert_eq!(
        backend.calls().last(),
        Some(&ApiCall::Search {
            query: "jazz".into(),
            max_results: 20,
        })
    );
    assert_eq!(titles(&engine), vec!["Jazz live".to_string()]);
    assert!(engine.state.feed.as_ref().unwrap().query.is_search());
}

#[tokio::test(start_paused = true)]
async fn test_blank_search_fetches_popular() {
    let (mut engine, backend) = test_engine();
    log_in(&mut engine, &backend, "ana", Some("comedy"), Vec::new()).await;

    search(&mut engine, "   ");
    settle(&mut engine, Duration::from_millis(100)).await;

    assert_eq!(
        backend.calls().last(),
        Some(&ApiCall::Popular { max_results: 20 })
    );
}

#[tokio::test(start_paused = true)]
async fn test_older_search_result_is_dropped() {
    let (mut engine, backend) = test_engine();
    log_in(&mut engine, &backend, "ana", None, Vec::new()).await;

    backend.push_videos_after(
        Duration::from_secs(2),
        Ok(VideosResponse::ok(vec![test_video("a1", "Slow answer")])),
    );
    backend.push_videos(Ok(VideosResponse::ok(vec![test_video("b1", "Fast answer")])));

    search(&mut engine, "slow");
    settle(&mut engine, Duration::from_millis(10)).await;
    search(&mut engine, "fast");
    settle(&mut engine, Duration::from_secs(3)).await;

    assert_eq!(titles(&engine), vec!["Fast answer".to_string()]);
    assert!(!engine.state.feed.as_ref().unwrap().loading);
}

#[tokio::test(start_paused = true)]
async fn test_failed_search_keeps_previous_videos() {
    let (mut engine, backend) = test_engine();
    log_in(
        &mut engine,
        &backend,
        "ana",
        Some("comedy"),
        vec![test_video("v1", "Stand-up night")],
    )
    .await;
    backend.push_videos(Ok(VideosResponse::failed("quota exceeded")));

    search(&mut engine, "jazz");
    run_until(&mut engine, "search failure", |s| {
        s.feed.as_ref().is_some_and(|f| !f.loading)
    })
    .await;

    let feed = engine.state.feed.as_ref().unwrap();
    assert_eq!(feed.error.as_deref(), Some(SEARCH_ERROR));
    assert_eq!(titles(&engine), vec!["Stand-up night".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_empty_popular_result_shows_server_message() {
    let (mut engine, backend) = test_engine();
    backend.push_login(Ok(youstream_api::LoginResponse::ok("ana", None)));
    backend.push_videos(Ok(VideosResponse {
        success: true,
        message: Some("No popular videos in this category".into()),
        videos: Vec::new(),
    }));

    crate::submit_login(&mut engine, "ana", "x");
    run_until(&mut engine, "dashboard", |s| {
        s.screen() == youstream_app::Screen::Dashboard
    })
    .await;

    assert_eq!(
        engine.state.feed.as_ref().unwrap().empty_message(),
        Some("No popular videos in this category")
    );
}

#[tokio::test(start_paused = true)]
async fn test_scrolling_moves_selection() {
    let (mut engine, backend) = test_engine();
    let videos = (0..3).map(|i| test_video(&format!("v{i}"), "Clip")).collect();
    log_in(&mut engine, &backend, "ana", None, videos).await;

    press(&mut engine, InputKey::Char('j'));
    press(&mut engine, InputKey::Down);
    press(&mut engine, InputKey::Down);
    assert_eq!(engine.state.feed.as_ref().unwrap().selected, 2);

    press(&mut engine, InputKey::Char('k'));
    assert_eq!(engine.state.feed.as_ref().unwrap().selected, 1);
}

#[tokio::test(start_paused = true)]
async fn test_esc_leaves_search_without_fetching() {
    let (mut engine, backend) = test_engine();
    log_in(&mut engine, &backend, "ana", Some("comedy"), Vec::new()).await;
    let calls = backend.call_count();

    press(&mut engine, InputKey::Char('/'));
    assert!(engine.state.feed.as_ref().unwrap().search_focused);
    type_text(&mut engine, "x");
    press(&mut engine, InputKey::Esc);
    settle(&mut engine, Duration::from_millis(100)).await;

    assert!(!engine.state.feed.as_ref().unwrap().search_focused);
    assert_eq!(backend.call_count(), calls);
}

//! Credential form, loading overlay, and logout

use std::time::Duration;

use youstream_api::test_utils::ApiCall;
use youstream_api::{LoginResponse, VideosResponse};
use youstream_app::actions::CONNECTION_ERROR;
use youstream_app::handler::CREDENTIALS_REQUIRED;
use youstream_app::{AuthPhase, InputKey, LoaderState, Message, Screen};
use youstream_core::Error;

use crate::{log_in, press, run_until, settle, submit_login, test_engine, test_video};

#[tokio::test(start_paused = true)]
async fn test_login_with_interest_searches_for_it() {
    let (mut engine, backend) = test_engine();
    backend.push_login(Ok(LoginResponse::ok("ana", Some("comedy"))));
    backend.push_videos(Ok(VideosResponse::ok(vec![test_video("v1", "Stand-up night")])));

    submit_login(&mut engine, "ana", "x");
    assert!(engine.state.is_authenticating());
    assert_eq!(engine.state.screen(), Screen::LoadingOverlay);

    run_until(&mut engine, "dashboard", |s| s.screen() == Screen::Dashboard).await;

    assert_eq!(
        backend.calls(),
        vec![
            ApiCall::Login {
                username: "ana".into(),
                password: "x".into(),
            },
            ApiCall::Search {
                query: "comedy".into(),
                max_results: 20,
            },
        ]
    );
    assert_eq!(engine.state.session.username(), Some("ana"));
    assert_eq!(engine.state.session.interest_tag(), Some("comedy"));

    let feed = engine.state.feed.as_ref().unwrap();
    assert_eq!(feed.videos.len(), 1);
    assert!(!feed.loading);
}

#[tokio::test(start_paused = true)]
async fn test_login_without_interest_fetches_popular() {
    let (mut engine, backend) = test_engine();
    log_in(&mut engine, &backend, "bob", None, Vec::new()).await;

    assert_eq!(
        backend.calls().last(),
        Some(&ApiCall::Popular { max_results: 20 })
    );
}

#[tokio::test(start_paused = true)]
async fn test_loader_fades_before_dashboard() {
    let (mut engine, backend) = test_engine();
    backend.push_login(Ok(LoginResponse::ok("ana", None)));
    backend.push_videos_after(
        Duration::from_secs(1),
        Ok(VideosResponse::ok(vec![test_video("v1", "Clip")])),
    );

    submit_login(&mut engine, "ana", "x");
    run_until(&mut engine, "authenticated", |s| s.auth == AuthPhase::Authenticated).await;
    assert_eq!(engine.state.loader, LoaderState::Visible);
    assert_eq!(engine.state.screen(), Screen::LoadingOverlay);

    run_until(&mut engine, "fade start", |s| s.loader == LoaderState::FadingOut).await;
    assert_eq!(engine.state.screen(), Screen::LoadingOverlay);

    run_until(&mut engine, "loader hidden", |s| s.loader.is_hidden()).await;
    assert_eq!(engine.state.screen(), Screen::Dashboard);
}

#[tokio::test(start_paused = true)]
async fn test_failed_first_fetch_still_dismisses_loader() {
    let (mut engine, backend) = test_engine();
    backend.push_login(Ok(LoginResponse::ok("ana", None)));
    backend.push_videos(Ok(VideosResponse::failed("quota exceeded")));

    submit_login(&mut engine, "ana", "x");
    run_until(&mut engine, "dashboard", |s| s.screen() == Screen::Dashboard).await;

    assert!(engine.state.feed.as_ref().unwrap().error.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_rejected_login_stays_on_form() {
    let (mut engine, backend) = test_engine();
    backend.push_login(Ok(LoginResponse::rejected("Invalid credentials")));

    submit_login(&mut engine, "ana", "wrong");
    run_until(&mut engine, "login result", |s| !s.is_authenticating()).await;

    assert_eq!(engine.state.screen(), Screen::CredentialForm);
    assert!(!engine.state.session.is_authenticated());
    let message = engine.state.login.message.as_ref().unwrap();
    assert_eq!(message.text, "Invalid credentials");
    assert!(message.is_error());
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unreachable_backend_reports_connection_error() {
    let (mut engine, backend) = test_engine();
    backend.push_login(Err(Error::http("connection refused")));

    submit_login(&mut engine, "ana", "x");
    run_until(&mut engine, "login result", |s| !s.is_authenticating()).await;

    assert_eq!(
        engine.state.login.message.as_ref().unwrap().text,
        CONNECTION_ERROR
    );
    assert_eq!(engine.state.screen(), Screen::CredentialForm);
}

#[tokio::test(start_paused = true)]
async fn test_empty_credentials_never_reach_backend() {
    let (mut engine, backend) = test_engine();

    press(&mut engine, InputKey::Enter);
    settle(&mut engine, Duration::from_millis(100)).await;

    assert_eq!(backend.call_count(), 0);
    assert_eq!(
        engine.state.login.message.as_ref().unwrap().text,
        CREDENTIALS_REQUIRED
    );
    assert!(!engine.state.is_authenticating());
}

#[tokio::test(start_paused = true)]
async fn test_logout_clears_session_and_form() {
    let (mut engine, backend) = test_engine();
    log_in(&mut engine, &backend, "ana", Some("comedy"), Vec::new()).await;

    press(&mut engine, InputKey::CharCtrl('l'));

    assert_eq!(engine.state.screen(), Screen::CredentialForm);
    assert!(!engine.state.session.is_authenticated());
    assert!(engine.state.feed.is_none());
    assert!(engine.state.login.username.is_empty());
    assert!(engine.state.login.password.is_empty());
    assert!(engine.state.login.message.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_logout_during_fade_cancels_it() {
    let (mut engine, backend) = test_engine();
    backend.push_login(Ok(LoginResponse::ok("ana", None)));
    backend.push_videos(Ok(VideosResponse::ok(Vec::new())));

    submit_login(&mut engine, "ana", "x");
    run_until(&mut engine, "fade start", |s| s.loader == LoaderState::FadingOut).await;

    engine.process_message(Message::Logout);
    settle(&mut engine, Duration::from_secs(2)).await;

    assert_eq!(engine.state.loader, LoaderState::Hidden);
    assert_eq!(engine.state.screen(), Screen::CredentialForm);
}

#[tokio::test(start_paused = true)]
async fn test_esc_on_login_quits() {
    let (mut engine, _backend) = test_engine();
    press(&mut engine, InputKey::Esc);
    assert!(engine.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_c_quits_from_dashboard() {
    let (mut engine, backend) = test_engine();
    log_in(&mut engine, &backend, "ana", None, Vec::new()).await;

    press(&mut engine, InputKey::CharCtrl('c'));
    assert!(engine.should_quit());
}

//! Registration form: validation, username availability, and the return to login

use std::time::Duration;

use youstream_api::test_utils::ApiCall;
use youstream_api::{RegisterRequest, RegisterResponse, UsernameCheckResponse};
use youstream_app::handler::{LOG_IN_NOW_MESSAGE, REGISTERED_MESSAGE};
use youstream_app::register_form::RegisterField;
use youstream_app::{InputKey, Screen};
use youstream_core::UsernameAvailability;

use crate::{press, run_until, settle, test_engine, type_text, TestEngine};

struct Draft<'a> {
    name: &'a str,
    email: &'a str,
    username: &'a str,
    password: &'a str,
    confirm: &'a str,
}

const GOOD: Draft<'static> = Draft {
    name: "  Ana Lima ",
    email: "ana@example.com",
    username: "analima",
    password: "abc123",
    confirm: "abc123",
};

async fn open_registration(engine: &mut TestEngine) {
    press(engine, InputKey::CharCtrl('r'));
    assert_eq!(engine.state.screen(), Screen::RegistrationForm);
    run_until(engine, "interest tags", |s| {
        s.register
            .as_ref()
            .is_some_and(|form| !form.interest_tags.is_empty())
    })
    .await;
}

/// Type every field in focus order and pick the first interest
fn fill(engine: &mut TestEngine, draft: &Draft<'_>) {
    for text in [
        draft.name,
        draft.email,
        draft.username,
        draft.password,
        draft.confirm,
    ] {
        type_text(engine, text);
        press(engine, InputKey::Tab);
    }
    press(engine, InputKey::Right);
}

fn registered(calls: &[ApiCall]) -> Vec<RegisterRequest> {
    calls
        .iter()
        .filter_map(|call| match call {
            ApiCall::Register(request) => Some(request.clone()),
            _ => None,
        })
        .collect()
}

fn username_checks(calls: &[ApiCall]) -> Vec<String> {
    calls
        .iter()
        .filter_map(|call| match call {
            ApiCall::CheckUsername(name) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_successful_registration_returns_to_login() {
    let (mut engine, backend) = test_engine();
    open_registration(&mut engine).await;

    fill(&mut engine, &GOOD);
    settle(&mut engine, Duration::from_secs(1)).await;
    assert_eq!(
        engine.state.register.as_ref().unwrap().availability,
        UsernameAvailability::Available
    );

    press(&mut engine, InputKey::Enter);
    assert!(engine.state.register.as_ref().unwrap().submitting);

    run_until(&mut engine, "registration accepted", |s| {
        s.register.as_ref().is_some_and(|form| form.completed)
    })
    .await;
    let form = engine.state.register.as_ref().unwrap();
    assert_eq!(form.message.as_ref().unwrap().text, REGISTERED_MESSAGE);
    assert!(form.name.is_empty());

    assert_eq!(
        registered(&backend.calls()),
        vec![RegisterRequest {
            name: "Ana Lima".into(),
            email: "ana@example.com".into(),
            username: "analima".into(),
            password: "abc123".into(),
            entertainment_type: "Gaming".into(),
        }]
    );

    run_until(&mut engine, "back on login", |s| {
        s.screen() == Screen::CredentialForm
    })
    .await;
    assert_eq!(
        engine.state.login.message.as_ref().unwrap().text,
        LOG_IN_NOW_MESSAGE
    );
    assert!(engine.state.register.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_mismatched_passwords_never_reach_backend() {
    let (mut engine, backend) = test_engine();
    open_registration(&mut engine).await;

    fill(
        &mut engine,
        &Draft {
            confirm: "abc124",
            ..GOOD
        },
    );
    settle(&mut engine, Duration::from_secs(1)).await;
    press(&mut engine, InputKey::Enter);
    settle(&mut engine, Duration::from_millis(100)).await;

    let form = engine.state.register.as_ref().unwrap();
    assert_eq!(
        form.field_errors.get(&RegisterField::ConfirmPassword).map(String::as_str),
        Some("Passwords do not match")
    );
    assert!(!form.submitting);
    assert!(registered(&backend.calls()).is_empty());
    assert_eq!(engine.state.screen(), Screen::RegistrationForm);
}

#[tokio::test(start_paused = true)]
async fn test_taken_username_blocks_submit() {
    let (mut engine, backend) = test_engine();
    backend.push_username_check(Ok(UsernameCheckResponse {
        available: false,
        message: "Username taken".into(),
    }));
    open_registration(&mut engine).await;

    fill(&mut engine, &GOOD);
    settle(&mut engine, Duration::from_secs(1)).await;
    assert_eq!(
        engine.state.register.as_ref().unwrap().availability,
        UsernameAvailability::Unavailable
    );

    press(&mut engine, InputKey::Enter);
    settle(&mut engine, Duration::from_millis(100)).await;

    let form = engine.state.register.as_ref().unwrap();
    assert_eq!(
        form.field_errors.get(&RegisterField::Username).map(String::as_str),
        Some("Username is already taken")
    );
    assert!(registered(&backend.calls()).is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_only_latest_username_check_counts() {
    let (mut engine, backend) = test_engine();
    // First check answers late and says "taken"; the second is immediate
    backend.push_username_check_after(
        Duration::from_secs(2),
        Ok(UsernameCheckResponse {
            available: false,
            message: String::new(),
        }),
    );
    backend.push_username_check(Ok(UsernameCheckResponse {
        available: true,
        message: String::new(),
    }));
    open_registration(&mut engine).await;

    // Focus the username field
    press(&mut engine, InputKey::Tab);
    press(&mut engine, InputKey::Tab);

    type_text(&mut engine, "bob");
    settle(&mut engine, Duration::from_millis(600)).await;
    assert_eq!(username_checks(&backend.calls()), vec!["bob".to_string()]);

    type_text(&mut engine, "x");
    assert_eq!(
        engine.state.register.as_ref().unwrap().availability,
        UsernameAvailability::Unknown
    );
    settle(&mut engine, Duration::from_secs(3)).await;

    assert_eq!(
        username_checks(&backend.calls()),
        vec!["bob".to_string(), "bobx".to_string()]
    );
    assert_eq!(
        engine.state.register.as_ref().unwrap().availability,
        UsernameAvailability::Available
    );
}

#[tokio::test(start_paused = true)]
async fn test_fast_typing_checks_once() {
    let (mut engine, backend) = test_engine();
    open_registration(&mut engine).await;
    press(&mut engine, InputKey::Tab);
    press(&mut engine, InputKey::Tab);

    type_text(&mut engine, "carol");
    settle(&mut engine, Duration::from_secs(1)).await;

    assert_eq!(username_checks(&backend.calls()), vec!["carol".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_server_rejection_is_shown() {
    let (mut engine, backend) = test_engine();
    backend.push_register(Ok(RegisterResponse::rejected("Email already registered")));
    open_registration(&mut engine).await;

    fill(&mut engine, &GOOD);
    settle(&mut engine, Duration::from_secs(1)).await;
    press(&mut engine, InputKey::Enter);
    run_until(&mut engine, "registration result", |s| {
        s.register.as_ref().is_some_and(|form| !form.submitting)
    })
    .await;

    let form = engine.state.register.as_ref().unwrap();
    let message = form.message.as_ref().unwrap();
    assert_eq!(message.text, "Email already registered");
    assert!(message.is_error());
    assert!(!form.completed);
    assert_eq!(engine.state.screen(), Screen::RegistrationForm);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_after_success_cancels_return_message() {
    let (mut engine, _backend) = test_engine();
    open_registration(&mut engine).await;
    fill(&mut engine, &GOOD);
    settle(&mut engine, Duration::from_secs(1)).await;
    press(&mut engine, InputKey::Enter);
    run_until(&mut engine, "registration accepted", |s| {
        s.register.as_ref().is_some_and(|form| form.completed)
    })
    .await;

    press(&mut engine, InputKey::Esc);
    assert_eq!(engine.state.screen(), Screen::CredentialForm);
    settle(&mut engine, Duration::from_secs(2)).await;

    assert!(engine.state.login.message.is_none());
    assert_eq!(engine.state.screen(), Screen::CredentialForm);
}

#[tokio::test(start_paused = true)]
async fn test_registration_and_login_are_exclusive() {
    let (mut engine, _backend) = test_engine();
    open_registration(&mut engine).await;
    assert_eq!(engine.state.screen(), Screen::RegistrationForm);

    press(&mut engine, InputKey::Esc);
    assert_eq!(engine.state.screen(), Screen::CredentialForm);
    assert!(engine.state.register.is_none());
}

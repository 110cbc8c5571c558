//! Application state (Model in TEA pattern)

use youstream_core::Session;

use crate::config::Settings;
use crate::feed::FeedState;
use crate::login_form::LoginFormState;
use crate::register_form::RegisterFormState;

/// Whether the main loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Where the session is in the login lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthPhase {
    /// Nobody logged in; a credential or registration form is showing
    #[default]
    LoggingIn,

    /// Login request in flight for this username
    Authenticating { username: String },

    /// Session established until logout
    Authenticated,
}

/// Loading overlay shown between login and the first feed result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderState {
    #[default]
    Hidden,
    Visible,
    /// First feed result arrived; unmounts when the fade timer fires
    FadingOut,
}

impl LoaderState {
    pub fn is_hidden(&self) -> bool {
        matches!(self, LoaderState::Hidden)
    }
}

/// The single screen to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    CredentialForm,
    RegistrationForm,
    LoadingOverlay,
    Dashboard,
}

/// Pick the one screen for a given combination of state.
///
/// Precedence: login in flight, then the loader while it is still up, then
/// the dashboard, then the registration form, otherwise the credential form.
pub fn route(auth: &AuthPhase, show_registration: bool, loader: LoaderState) -> Screen {
    match auth {
        AuthPhase::Authenticating { .. } => Screen::LoadingOverlay,
        AuthPhase::Authenticated if !loader.is_hidden() => Screen::LoadingOverlay,
        AuthPhase::Authenticated => Screen::Dashboard,
        AuthPhase::LoggingIn if show_registration => Screen::RegistrationForm,
        AuthPhase::LoggingIn => Screen::CredentialForm,
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub auth: AuthPhase,

    pub session: Session,

    /// "Show registration" toggle, only meaningful while logging in
    pub show_registration: bool,

    pub loader: LoaderState,

    pub login: LoginFormState,

    /// Registration form, present only while that screen is mounted
    pub register: Option<RegisterFormState>,

    /// Feed, present only while authenticated
    pub feed: Option<FeedState>,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            auth: AuthPhase::LoggingIn,
            session: Session::anonymous(),
            show_registration: false,
            loader: LoaderState::Hidden,
            login: LoginFormState::new(),
            register: None,
            feed: None,
            settings,
        }
    }

    pub fn screen(&self) -> Screen {
        route(&self.auth, self.show_registration, self.loader)
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Login request in flight
    pub fn is_authenticating(&self) -> bool {
        matches!(self.auth, AuthPhase::Authenticating { .. })
    }
}

//! Message types for the application (TEA pattern)

use youstream_core::{RequestToken, UsernameAvailability, Video};

use crate::input_key::InputKey;
use crate::text_field::TextEdit;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C, Esc on the login screen)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Form Input Messages
    // ─────────────────────────────────────────────────────────
    /// Edit the focused text input of the current screen
    Edit(TextEdit),
    /// Move focus to the next form input
    FocusNext,
    /// Move focus to the previous form input
    FocusPrev,
    /// Cycle the interest selector forward
    NextInterestTag,
    /// Cycle the interest selector backward
    PrevInterestTag,
    /// Enter: submit the current form or search
    Submit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Switch from the credential form to the registration form
    ShowRegistration,
    /// Leave the registration form for the credential form
    ShowLogin,
    /// End the session
    Logout,

    // ─────────────────────────────────────────────────────────
    // Auth Service Messages
    // ─────────────────────────────────────────────────────────
    /// Login accepted. `user` may be missing from the response.
    LoginSucceeded {
        user: Option<String>,
        interest_tag: Option<String>,
    },
    /// Login rejected or unreachable; `message` is user-facing
    LoginFailed { message: String },
    /// Registration accepted by the server
    RegistrationSucceeded { token: RequestToken, message: String },
    /// Registration rejected or unreachable; `message` is user-facing
    RegistrationFailed { token: RequestToken, message: String },
    /// The pause after a successful registration is over
    RegistrationReturnDue,

    // ─────────────────────────────────────────────────────────
    // Catalog Service Messages
    // ─────────────────────────────────────────────────────────
    InterestTagsLoaded { tags: Vec<String> },
    InterestTagsFailed { error: String },
    /// Debounce elapsed for the username edit that issued `token`
    UsernameCheckDue { token: RequestToken },
    /// Availability check finished
    UsernameChecked {
        token: RequestToken,
        availability: UsernameAvailability,
    },

    // ─────────────────────────────────────────────────────────
    // Feed Messages
    // ─────────────────────────────────────────────────────────
    FeedLoaded {
        token: RequestToken,
        videos: Vec<Video>,
        message: Option<String>,
    },
    FeedFailed { token: RequestToken, error: String },
    /// Focus the search bar
    FocusSearch,
    /// Leave the search bar without searching
    BlurSearch,
    ScrollUp,
    ScrollDown,
    /// Loader fade-out finished
    LoaderFadeDone,
}

//! Registration form state and local validation
//!
//! Validation is a pure function over a [`RegistrationDraft`] so each rule can
//! be exercised on its own; the form state only stores the resulting
//! [`FieldErrors`] and clears an entry as soon as its field is edited.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use youstream_api::RegisterRequest;
use youstream_core::{RequestSequencer, UsernameAvailability};

use crate::login_form::FormMessage;
use crate::text_field::{TextEdit, TextField};

/// Minimum username length before availability is checked or accepted
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email regex is valid"));

/// Whether `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

// ─────────────────────────────────────────────────────────────────────────────
// Fields & Draft
// ─────────────────────────────────────────────────────────────────────────────

/// The six registration inputs, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum RegisterField {
    #[default]
    Name,
    Email,
    Username,
    Password,
    ConfirmPassword,
    InterestTag,
}

impl RegisterField {
    pub const ALL: [RegisterField; 6] = [
        RegisterField::Name,
        RegisterField::Email,
        RegisterField::Username,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
        RegisterField::InterestTag,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RegisterField::Name => "Full name",
            RegisterField::Email => "Email",
            RegisterField::Username => "Username",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Confirm password",
            RegisterField::InterestTag => "Entertainment interest",
        }
    }
}

/// Validation messages keyed by field
pub type FieldErrors = BTreeMap<RegisterField, String>;

/// Snapshot of everything the user has typed or selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub interest_tag: String,
}

impl RegistrationDraft {
    /// Wire request; name, email and username are trimmed
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            entertainment_type: self.interest_tag.clone(),
        }
    }
}

/// Evaluate every rule independently and collect the failures.
///
/// An empty map means the draft may be submitted.
pub fn validate(
    draft: &RegistrationDraft,
    interest_tags: &[String],
    availability: UsernameAvailability,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(RegisterField::Name, "Name is required".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.insert(RegisterField::Email, "Email is required".to_string());
    } else if !is_valid_email(&draft.email) {
        errors.insert(RegisterField::Email, "Invalid email format".to_string());
    }

    if draft.username.trim().is_empty() {
        errors.insert(RegisterField::Username, "Username is required".to_string());
    } else if draft.username.chars().count() < MIN_USERNAME_LEN {
        errors.insert(
            RegisterField::Username,
            format!("Username must be at least {MIN_USERNAME_LEN} characters"),
        );
    } else if availability.is_unavailable() {
        errors.insert(
            RegisterField::Username,
            "Username is already taken".to_string(),
        );
    }

    if draft.password.is_empty() {
        errors.insert(RegisterField::Password, "Password is required".to_string());
    } else if draft.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            RegisterField::Password,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        );
    }

    if draft.password != draft.confirm_password {
        errors.insert(
            RegisterField::ConfirmPassword,
            "Passwords do not match".to_string(),
        );
    }

    if draft.interest_tag.is_empty() || !interest_tags.contains(&draft.interest_tag) {
        errors.insert(
            RegisterField::InterestTag,
            "Select an entertainment interest".to_string(),
        );
    }

    errors
}

// ─────────────────────────────────────────────────────────────────────────────
// Form State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct RegisterFormState {
    pub name: TextField,
    pub email: TextField,
    pub username: TextField,
    pub password: TextField,
    pub confirm_password: TextField,

    /// Index into `interest_tags`; `None` until the user picks one
    pub interest_tag: Option<usize>,

    /// Options served by the Catalog Service (empty if that call failed)
    pub interest_tags: Vec<String>,

    pub focus: RegisterField,
    pub field_errors: FieldErrors,

    /// Availability of the current username draft
    pub availability: UsernameAvailability,

    /// Username check slot
    pub availability_seq: RequestSequencer,

    /// Register call slot; a form reopened later gets a fresh one
    pub register_seq: RequestSequencer,

    /// Register call in flight
    pub submitting: bool,

    pub message: Option<FormMessage>,

    /// Server accepted the registration; waiting to return to login
    pub completed: bool,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            name: TextField::new(),
            email: TextField::new(),
            username: TextField::new(),
            password: TextField::masked(),
            confirm_password: TextField::masked(),
            interest_tag: None,
            interest_tags: Vec::new(),
            focus: RegisterField::default(),
            field_errors: FieldErrors::new(),
            availability: UsernameAvailability::Unknown,
            availability_seq: RequestSequencer::new(),
            register_seq: RequestSequencer::new(),
            submitting: false,
            message: None,
            completed: false,
        }
    }
}

impl RegisterFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: RegisterField) -> Option<&TextField> {
        match field {
            RegisterField::Name => Some(&self.name),
            RegisterField::Email => Some(&self.email),
            RegisterField::Username => Some(&self.username),
            RegisterField::Password => Some(&self.password),
            RegisterField::ConfirmPassword => Some(&self.confirm_password),
            RegisterField::InterestTag => None,
        }
    }

    fn field_mut(&mut self, field: RegisterField) -> Option<&mut TextField> {
        match field {
            RegisterField::Name => Some(&mut self.name),
            RegisterField::Email => Some(&mut self.email),
            RegisterField::Username => Some(&mut self.username),
            RegisterField::Password => Some(&mut self.password),
            RegisterField::ConfirmPassword => Some(&mut self.confirm_password),
            RegisterField::InterestTag => None,
        }
    }

    /// Apply an edit to the focused text field.
    ///
    /// Returns `true` when the username text changed, so the caller can
    /// restart the availability check.
    pub fn edit(&mut self, edit: TextEdit) -> bool {
        let focus = self.focus;
        let changed = match self.field_mut(focus) {
            Some(field) => field.apply(edit),
            None => false,
        };
        if changed {
            self.field_errors.remove(&focus);
        }
        changed && focus == RegisterField::Username
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Step the interest selector forward (wrapping)
    pub fn select_next_tag(&mut self) {
        if self.interest_tags.is_empty() {
            return;
        }
        let len = self.interest_tags.len();
        self.interest_tag = Some(match self.interest_tag {
            Some(i) => (i + 1) % len,
            None => 0,
        });
        self.field_errors.remove(&RegisterField::InterestTag);
    }

    /// Step the interest selector backward (wrapping)
    pub fn select_prev_tag(&mut self) {
        if self.interest_tags.is_empty() {
            return;
        }
        let len = self.interest_tags.len();
        self.interest_tag = Some(match self.interest_tag {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
        self.field_errors.remove(&RegisterField::InterestTag);
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.interest_tag
            .and_then(|i| self.interest_tags.get(i))
            .map(String::as_str)
    }

    pub fn set_interest_tags(&mut self, tags: Vec<String>) {
        self.interest_tags = tags;
        if self
            .interest_tag
            .is_some_and(|i| i >= self.interest_tags.len())
        {
            self.interest_tag = None;
        }
    }

    pub fn draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            username: self.username.value().to_string(),
            password: self.password.value().to_string(),
            confirm_password: self.confirm_password.value().to_string(),
            interest_tag: self.selected_tag().unwrap_or_default().to_string(),
        }
    }

    /// Run local validation and store the result. Returns `true` if valid.
    pub fn validate(&mut self) -> bool {
        self.field_errors = validate(&self.draft(), &self.interest_tags, self.availability);
        self.field_errors.is_empty()
    }

    /// Whether the username draft is long enough to be checked
    pub fn username_checkable(&self) -> bool {
        self.username.char_len() >= MIN_USERNAME_LEN
    }

    /// Empty every input after a successful registration.
    ///
    /// The interest tag options stay loaded.
    pub fn clear_draft(&mut self) {
        self.name.clear();
        self.email.clear();
        self.username.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.interest_tag = None;
        self.field_errors.clear();
        self.availability = UsernameAvailability::Unknown;
        self.availability_seq.invalidate();
        self.focus = RegisterField::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Vec<String> {
        vec!["Gaming".to_string(), "Comedy".to_string()]
    }

    fn valid_draft() -> RegistrationDraft {
        RegistrationDraft {
            name: "Ana Diaz".to_string(),
            email: "ana@example.com".to_string(),
            username: "anad".to_string(),
            password: "abc123".to_string(),
            confirm_password: "abc123".to_string(),
            interest_tag: "Comedy".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&valid_draft(), &tags(), UsernameAvailability::Unknown).is_empty());
        assert!(validate(&valid_draft(), &tags(), UsernameAvailability::Available).is_empty());
    }

    #[test]
    fn test_blank_name() {
        let draft = RegistrationDraft {
            name: "   ".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft, &tags(), UsernameAvailability::Unknown);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&RegisterField::Name));
    }

    #[test]
    fn test_email_rules() {
        for bad in ["", "ana", "ana@example", "ana @example.com", "@example.com"] {
            let draft = RegistrationDraft {
                email: bad.to_string(),
                ..valid_draft()
            };
            let errors = validate(&draft, &tags(), UsernameAvailability::Unknown);
            assert!(
                errors.contains_key(&RegisterField::Email),
                "expected email error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_username_too_short() {
        let draft = RegistrationDraft {
            username: "ab".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft, &tags(), UsernameAvailability::Unknown);
        assert_eq!(
            errors.get(&RegisterField::Username).map(String::as_str),
            Some("Username must be at least 3 characters")
        );
    }

    #[test]
    fn test_username_unavailable() {
        let errors = validate(&valid_draft(), &tags(), UsernameAvailability::Unavailable);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&RegisterField::Username));
    }

    #[test]
    fn test_password_too_short() {
        let draft = RegistrationDraft {
            password: "abc12".to_string(),
            confirm_password: "abc12".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft, &tags(), UsernameAvailability::Unknown);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&RegisterField::Password));
    }

    #[test]
    fn test_passwords_do_not_match() {
        let draft = RegistrationDraft {
            confirm_password: "abc124".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft, &tags(), UsernameAvailability::Unknown);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&RegisterField::ConfirmPassword).map(String::as_str),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_interest_must_be_enumerated() {
        let draft = RegistrationDraft {
            interest_tag: "Cooking".to_string(),
            ..valid_draft()
        };
        let errors = validate(&draft, &tags(), UsernameAvailability::Unknown);
        assert!(errors.contains_key(&RegisterField::InterestTag));

        let empty = RegistrationDraft {
            interest_tag: String::new(),
            ..valid_draft()
        };
        assert!(validate(&empty, &tags(), UsernameAvailability::Unknown)
            .contains_key(&RegisterField::InterestTag));
    }

    #[test]
    fn test_rules_are_independent() {
        let errors = validate(
            &RegistrationDraft::default(),
            &tags(),
            UsernameAvailability::Unknown,
        );
        // Empty password equals empty confirmation, so only five rules fail
        assert_eq!(errors.len(), 5);
        assert!(!errors.contains_key(&RegisterField::ConfirmPassword));
    }

    #[test]
    fn test_to_request_trims() {
        let draft = RegistrationDraft {
            name: "  Ana ".to_string(),
            email: " ana@example.com ".to_string(),
            username: " anad ".to_string(),
            password: " pass  ".to_string(),
            ..valid_draft()
        };
        let req = draft.to_request();
        assert_eq!(req.name, "Ana");
        assert_eq!(req.email, "ana@example.com");
        assert_eq!(req.username, "anad");
        assert_eq!(req.password, " pass  ");
        assert_eq!(req.entertainment_type, "Comedy");
    }

    #[test]
    fn test_edit_clears_only_that_field_error() {
        let mut form = RegisterFormState::new();
        form.interest_tags = tags();
        assert!(!form.validate());
        assert!(form.field_errors.contains_key(&RegisterField::Name));
        assert!(form.field_errors.contains_key(&RegisterField::Email));

        let username_changed = form.edit(TextEdit::Insert('A'));
        assert!(!username_changed);
        assert!(!form.field_errors.contains_key(&RegisterField::Name));
        assert!(form.field_errors.contains_key(&RegisterField::Email));
    }

    #[test]
    fn test_edit_reports_username_change() {
        let mut form = RegisterFormState::new();
        form.focus = RegisterField::Username;
        assert!(form.edit(TextEdit::Insert('a')));
        assert!(!form.edit(TextEdit::Left));
    }

    #[test]
    fn test_tag_selector_wraps() {
        let mut form = RegisterFormState::new();
        form.select_next_tag();
        assert_eq!(form.selected_tag(), None);

        form.set_interest_tags(tags());
        form.select_prev_tag();
        assert_eq!(form.selected_tag(), Some("Comedy"));
        form.select_next_tag();
        assert_eq!(form.selected_tag(), Some("Gaming"));
    }

    #[test]
    fn test_focus_order_wraps() {
        assert_eq!(RegisterField::InterestTag.next(), RegisterField::Name);
        assert_eq!(RegisterField::Name.prev(), RegisterField::InterestTag);
        assert_eq!(RegisterField::Email.next(), RegisterField::Username);
    }

    #[test]
    fn test_clear_draft_keeps_tag_options() {
        let mut form = RegisterFormState::new();
        form.set_interest_tags(tags());
        form.select_next_tag();
        form.username.set("anad");
        form.availability = UsernameAvailability::Available;

        form.clear_draft();

        assert!(form.username.is_empty());
        assert_eq!(form.selected_tag(), None);
        assert_eq!(form.availability, UsernameAvailability::Unknown);
        assert_eq!(form.interest_tags.len(), 2);
    }
}

//! Credential form state

use crate::text_field::{TextEdit, TextField};

/// How a form message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// A one-line status message shown under a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FormMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginFormState {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub message: Option<FormMessage>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: TextField::new(),
            password: TextField::masked(),
            focus: LoginField::default(),
            message: None,
        }
    }
}

impl LoginFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn edit(&mut self, edit: TextEdit) {
        self.focused_field_mut().apply(edit);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Both fields are required before anything is sent
    pub fn is_complete(&self) -> bool {
        !self.username.value().trim().is_empty() && !self.password.is_empty()
    }

    /// Empty both fields and forget any message
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

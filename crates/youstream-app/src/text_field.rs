//! Single-line editable text buffer used by every form input

/// An edit applied to the focused text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Editable text with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    /// Cursor position in chars (0..=len)
    cursor: usize,
    masked: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field whose contents render as bullets (passwords)
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.set(value);
        field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Replace the contents and move the cursor to the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text as it should be drawn
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.char_len())
        } else {
            self.value.clone()
        }
    }

    /// Apply an edit. Returns `true` if the value changed.
    pub fn apply(&mut self, edit: TextEdit) -> bool {
        match edit {
            TextEdit::Insert(c) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            TextEdit::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                let at = self.byte_index(self.cursor - 1);
                self.value.remove(at);
                self.cursor -= 1;
                true
            }
            TextEdit::Delete => {
                if self.cursor >= self.char_len() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            TextEdit::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            TextEdit::Right => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                false
            }
            TextEdit::Home => {
                self.cursor = 0;
                false
            }
            TextEdit::End => {
                self.cursor = self.char_len();
                false
            }
        }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

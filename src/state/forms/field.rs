//! Form field value objects

use std::fmt;

/// The four controlled fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Subject,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Subject,
        FieldName::Message,
    ];

    /// Wire name used in the submission payload
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Subject => "subject",
            FieldName::Message => "message",
        }
    }

    /// Localizer key for the field label
    pub fn label_key(self) -> &'static str {
        match self {
            FieldName::Name => "contact.field.name",
            FieldName::Email => "contact.field.email",
            FieldName::Subject => "contact.field.subject",
            FieldName::Message => "contact.field.message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    SingleLine,
    MultiLine,
    /// Value comes from the subject selector, never from typing
    Choice,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(name: FieldName, kind: FieldKind) -> Self {
        Self {
            name,
            value: String::new(),
            kind,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Blank means empty after trimming
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::MultiLine
    }

    /// Whether keystrokes edit this field directly
    pub fn accepts_typing(&self) -> bool {
        self.kind != FieldKind::Choice
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if self.accepts_typing() {
            self.value.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if self.accepts_typing() {
            self.value.pop();
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

//! Contact form state and the payload it submits

use super::field::{FieldKind, FieldName, FormField};
use serde::{Deserialize, Serialize};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Record sent to the submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The contact form: four controlled fields plus the submit button row
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    /// 0..=3 are fields, 4 is the submit button
    pub active_field_index: usize,
}

impl ContactForm {
    pub const SUBMIT_ROW: usize = 4;

    pub fn new() -> Self {
        Self {
            name: FormField::new(FieldName::Name, FieldKind::SingleLine),
            email: FormField::new(FieldName::Email, FieldKind::SingleLine),
            subject: FormField::new(FieldName::Subject, FieldKind::Choice),
            message: FormField::new(FieldName::Message, FieldKind::MultiLine),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Subject => &mut self.subject,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    pub fn set(&mut self, name: FieldName, value: String) {
        self.field_mut(name).set_text(value);
    }

    /// Field under focus, `None` when the submit button row is active
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        let name = self.active_field_name()?;
        Some(self.field_mut(name))
    }

    pub fn focus(&mut self, name: FieldName) {
        if let Some(index) = FieldName::ALL.iter().position(|f| *f == name) {
            self.active_field_index = index;
        }
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// Reset every field to empty. Focus is left where it is.
    pub fn clear(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
    }

    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            subject: self.subject.as_text().to_string(),
            message: self.message.as_text().to_string(),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}

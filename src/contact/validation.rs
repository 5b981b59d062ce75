//! Client-side validation rules

use super::error::ValidationError;
use crate::state::{ContactForm, FieldName};

/// Decides which fields block a submission
pub trait ValidationPolicy: Send + Sync {
    /// Fields that fail the policy, in display order
    fn missing_fields(&self, form: &ContactForm) -> Vec<FieldName>;

    fn check(&self, form: &ContactForm) -> Result<(), ValidationError> {
        let missing = self.missing_fields(form);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// Every field is required and must be non-empty after trimming
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

impl ValidationPolicy for RequiredFields {
    fn missing_fields(&self, form: &ContactForm) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|name| form.field(*name).is_blank())
            .collect()
    }
}

//! Form domain layer
//!
//! Type-safe field handling for the contact form and its subject selector.

mod field;
mod form_state;
mod subject;

pub use field::{FieldKind, FieldName, FormField};
pub use form_state::{ContactForm, ContactPayload, Form};
pub use subject::{SubjectCategory, SubjectSelector};

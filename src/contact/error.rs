//! Error types for contact submission

use crate::state::FieldName;
use std::time::Duration;

/// One or more required fields were blank
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("required fields missing: {}", display_fields(.missing))]
pub struct ValidationError {
    pub missing: Vec<FieldName>,
}

fn display_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Anything that kept a submission from being acknowledged
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Endpoint answered with a non-success status
    #[error("submission rejected with status {status}")]
    Rejected { status: u16 },

    /// No answer within the configured bound
    #[error("submission timed out after {0:?}")]
    Timeout(Duration),

    /// Connection or protocol failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Transport could not be set up
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Why `submit` did not produce a success
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Another submission is still waiting on the transport
    #[error("a submission is already in flight")]
    InFlight,

    /// Delivery for a request that is no longer in flight
    #[error("delivery for request {0} is not in flight")]
    Stale(uuid::Uuid),
}

/// Which kind of failure the error banner reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Transport,
}

impl FailureKind {
    pub fn message_key(self) -> &'static str {
        match self {
            FailureKind::Validation => "contact.status.validation_error",
            FailureKind::Transport => "contact.status.transport_error",
        }
    }
}

//! Trait abstraction for the submission transport to enable mocking in tests

use crate::contact::TransportError;
use crate::state::ContactPayload;
use async_trait::async_trait;
use uuid::Uuid;

/// Delivers a contact payload and reports whether it was acknowledged
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Send one submission. `Ok` only for a success acknowledgement.
    async fn send(&self, request_id: Uuid, payload: &ContactPayload) -> Result<(), TransportError>;
}

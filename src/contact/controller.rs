//! Contact submission controller
//!
//! Owns the contact form, the subject selector and the submission status.
//! A submission is split into three steps so the event loop never blocks:
//! [`ContactSubmissionController::begin_submit`] validates and hands out a
//! [`SubmissionTicket`], the ticket is delivered on a task, and the resulting
//! [`Delivery`] is applied with [`ContactSubmissionController::complete_submit`].

use super::error::{FailureKind, SubmitError, TransportError};
use super::validation::{RequiredFields, ValidationPolicy};
use crate::locale::Localizer;
use crate::state::{ContactForm, ContactPayload, FieldName, SubjectCategory, SubjectSelector};
use crate::transport::SubmissionTransport;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// A validated submission waiting to be delivered
pub struct SubmissionTicket {
    request_id: Uuid,
    payload: ContactPayload,
    transport: Arc<dyn SubmissionTransport>,
    timeout: Duration,
}

impl SubmissionTicket {
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    #[cfg(test)]
    pub fn payload(&self) -> &ContactPayload {
        &self.payload
    }

    /// Run the transport call, bounded by the controller's timeout
    pub async fn deliver(self) -> Delivery {
        let send = self.transport.send(self.request_id, &self.payload);
        let result = match tokio::time::timeout(self.timeout, send).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Timeout(self.timeout)),
        };
        Delivery {
            request_id: self.request_id,
            result,
        }
    }
}

/// Outcome of one delivered ticket
#[derive(Debug)]
pub struct Delivery {
    pub request_id: Uuid,
    pub result: Result<(), TransportError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Error,
}

/// Localized status line shown above the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

pub struct ContactSubmissionController {
    form: ContactForm,
    selector: SubjectSelector,
    status: SubmissionStatus,
    failure: Option<FailureKind>,
    in_flight: Option<Uuid>,
    submitted_at: Option<DateTime<Utc>>,
    transport: Arc<dyn SubmissionTransport>,
    policy: Box<dyn ValidationPolicy>,
    timeout: Duration,
}

impl ContactSubmissionController {
    pub fn new(transport: Arc<dyn SubmissionTransport>, timeout: Duration) -> Self {
        Self {
            form: ContactForm::new(),
            selector: SubjectSelector::default(),
            status: SubmissionStatus::Idle,
            failure: None,
            in_flight: None,
            submitted_at: None,
            transport,
            policy: Box::new(RequiredFields),
            timeout,
        }
    }

    /// Replace the default required-field policy
    #[cfg(test)]
    pub fn with_policy(mut self, policy: impl ValidationPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Mutable access for focus movement and keystrokes
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn failure(&self) -> Option<FailureKind> {
        self.failure
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.form.set(field, value.into());
    }

    /// True iff every field passes the validation policy
    pub fn is_submittable(&self) -> bool {
        self.policy.missing_fields(&self.form).is_empty()
    }

    pub fn selector(&self) -> &SubjectSelector {
        &self.selector
    }

    pub fn toggle_subject_selector(&mut self) {
        self.selector.toggle(self.form.subject.as_text());
    }

    pub fn close_subject_selector(&mut self) {
        self.selector.close();
    }

    pub fn highlight_next_subject(&mut self) {
        self.selector.highlight_next();
    }

    pub fn highlight_prev_subject(&mut self) {
        self.selector.highlight_prev();
    }

    /// Pick option `index` from the open selector and write it to `subject`
    pub fn choose_subject(&mut self, index: usize) -> Option<SubjectCategory> {
        let category = self.selector.select(index)?;
        self.form.set(FieldName::Subject, category.key().to_string());
        Some(category)
    }

    pub fn choose_highlighted_subject(&mut self) -> Option<SubjectCategory> {
        let category = self.selector.select_highlighted()?;
        self.form.set(FieldName::Subject, category.key().to_string());
        Some(category)
    }

    /// Validate and move to `Submitting`.
    ///
    /// The payload is captured here, so later edits do not leak into it.
    pub fn begin_submit(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if let Some(request_id) = self.in_flight {
            tracing::debug!(%request_id, "rejecting submit while another is in flight");
            return Err(SubmitError::InFlight);
        }

        if let Err(err) = self.policy.check(&self.form) {
            tracing::info!(missing = %err, "contact form failed validation");
            self.status = SubmissionStatus::Error;
            self.failure = Some(FailureKind::Validation);
            return Err(err.into());
        }

        let request_id = Uuid::new_v4();
        self.status = SubmissionStatus::Submitting;
        self.failure = None;
        self.submitted_at = None;
        self.in_flight = Some(request_id);
        tracing::info!(%request_id, subject = self.form.subject.as_text(), "submitting contact form");

        Ok(SubmissionTicket {
            request_id,
            payload: self.form.to_payload(),
            transport: Arc::clone(&self.transport),
            timeout: self.timeout,
        })
    }

    /// Apply a delivery. Deliveries for anything but the in-flight request
    /// are dropped with [`SubmitError::Stale`].
    pub fn complete_submit(&mut self, delivery: Delivery) -> Result<(), SubmitError> {
        if self.in_flight != Some(delivery.request_id) {
            tracing::debug!(request_id = %delivery.request_id, "dropping stale delivery");
            return Err(SubmitError::Stale(delivery.request_id));
        }
        self.in_flight = None;

        match delivery.result {
            Ok(()) => {
                tracing::info!(request_id = %delivery.request_id, "contact form acknowledged");
                self.status = SubmissionStatus::Success;
                self.submitted_at = Some(Utc::now());
                self.form.clear();
                self.selector.close();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(request_id = %delivery.request_id, error = %err, "contact submission failed");
                self.status = SubmissionStatus::Error;
                self.failure = Some(FailureKind::Transport);
                Err(err.into())
            }
        }
    }

    /// Validate, deliver and apply in one call
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        let ticket = self.begin_submit()?;
        let delivery = ticket.deliver().await;
        self.complete_submit(delivery)
    }

    pub fn banner(&self, localizer: &dyn Localizer) -> Option<Banner> {
        match self.status {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Submitting => Some(Banner {
                kind: BannerKind::Info,
                text: localizer.lookup("contact.status.submitting"),
            }),
            SubmissionStatus::Success => {
                let mut text = localizer.lookup("contact.status.success");
                if let Some(at) = self.submitted_at {
                    text.push_str(&format!(" ({} UTC)", at.format("%H:%M")));
                }
                Some(Banner {
                    kind: BannerKind::Success,
                    text,
                })
            }
            SubmissionStatus::Error => {
                let key = self.failure.unwrap_or(FailureKind::Transport).message_key();
                Some(Banner {
                    kind: BannerKind::Error,
                    text: localizer.lookup(key),
                })
            }
        }
    }
}

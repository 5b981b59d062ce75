//! Contact submission: controller, validation and errors

mod controller;
mod error;
mod validation;

pub use controller::{BannerKind, ContactSubmissionController, Delivery};
pub use error::{SubmitError, TransportError};

#[cfg(test)]
pub use controller::SubmissionStatus;
#[cfg(test)]
pub use error::FailureKind;

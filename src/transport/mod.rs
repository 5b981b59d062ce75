//! Submission transport module for delivering contact requests

mod client;
mod traits;

pub use client::HttpTransport;
pub use traits::SubmissionTransport;

#[cfg(test)]
pub use traits::MockSubmissionTransport;

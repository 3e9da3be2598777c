//! Error types for onboarding.

use onboard_forms::ValidationErrors;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Onboarding-specific errors.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// Mode name is neither `website` nor `other`.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// Field name is not part of the onboarding form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Inputs are locked while the creation request is in flight.
    #[error("form is locked while submitting")]
    Locked,

    /// The session already succeeded; the form is frozen.
    #[error("onboarding already completed")]
    Completed,

    /// A creation result arrived with no request in flight.
    #[error("no submission in flight")]
    NotSubmitting,

    /// Continue was requested before the session succeeded.
    #[error("onboarding not completed yet")]
    NotCompleted,

    /// Field validation failed.
    #[error("validation failed:\n{0}")]
    Validation(ValidationErrors),

    /// The creation call was rejected by the remote side.
    #[error("submission failed: {0}")]
    Submission(#[from] SubmissionError),
}

/// Failure reported by the remote creation operation.
///
/// Shown to the user verbatim as a global notice.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{reason}")]
pub struct SubmissionError {
    /// Reason given by the remote side, e.g. `name_taken`.
    pub reason: String,
}

impl SubmissionError {
    /// Creates a submission error.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Result type alias for onboarding operations.
pub type Result<T> = std::result::Result<T, OnboardError>;

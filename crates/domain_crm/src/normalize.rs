//! Error normalization
//!
//! Collapses every `RemoteError` into one `(status, message)` shape:
//!
//! - Rejected by the CRM: the CRM's status, and its body pretty-printed as JSON
//! - Anything local (transport, serialization): status 500 and the local description
//!
//! Normalization is total. It never fails and never panics.

use std::fmt;

use serde::Serialize;

use crate::error::RemoteError;

/// Status used for failures that never produced a remote response
pub const LOCAL_FAILURE_STATUS: u16 = 500;

/// Uniform failure handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Always a valid HTTP status (100..=599)
    pub status: u16,
    /// Human-readable description
    pub message: String,
}

/// Result of every record operation
pub type OperationResult<T> = Result<T, Failure>;

impl Failure {
    /// Creates a failure, coercing anything outside the HTTP status range to 500
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        let status = if (100..=599).contains(&status) {
            status
        } else {
            LOCAL_FAILURE_STATUS
        };

        Self {
            status,
            message: message.into(),
        }
    }

    /// Failure for an error that happened on this side of the wire
    pub fn local(message: impl Into<String>) -> Self {
        Self::new(LOCAL_FAILURE_STATUS, message)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)
    }
}

impl std::error::Error for Failure {}

/// Normalizes a remote error
pub fn normalize(error: &RemoteError) -> Failure {
    match error {
        RemoteError::Rejected { status, body } => {
            let message = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
            Failure::new(*status, message)
        }
        RemoteError::Transport { message } | RemoteError::Serialization { message } => {
            Failure::local(message.clone())
        }
    }
}

impl From<RemoteError> for Failure {
    fn from(error: RemoteError) -> Self {
        normalize(&error)
    }
}

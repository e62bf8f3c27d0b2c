//! Remote call errors
//!
//! A `RemoteError` is what the remote client raises. It is never shown to a
//! user directly; the record operations hand it to the normalizer first.

use std::error::Error as StdError;

use serde_json::Value;
use thiserror::Error;

/// Errors raised by a remote CRM call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteError {
    /// The CRM answered with a non-2xx status
    #[error("CRM rejected the request with status {status}")]
    Rejected {
        status: u16,
        /// Parsed JSON body, or the raw text as a JSON string
        body: Value,
    },

    /// The call never completed (DNS, connect, reset, timeout)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// A request or response body could not be encoded or decoded locally
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl RemoteError {
    pub fn rejected(status: u16, body: Value) -> Self {
        RemoteError::Rejected { status, body }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        RemoteError::Transport {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        RemoteError::Serialization {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return RemoteError::serialization(describe(&err));
        }
        RemoteError::transport(describe(&err))
    }
}

// reqwest keeps the useful part ("Connection refused", "dns error") in the
// source chain, so the whole chain goes into the message.
fn describe(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejected_status() {
        let error = RemoteError::rejected(404, json!({"message": "not found"}));
        assert!(matches!(error, RemoteError::Rejected { status: 404, .. }));
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_transport_has_no_status() {
        let error = RemoteError::transport("connection refused");
        assert!(matches!(error, RemoteError::Transport { .. }));
        assert_eq!(error.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_describe_includes_sources() {
        #[derive(Debug, Error)]
        #[error("outer")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"));
        assert_eq!(describe(&err), "outer: refused");
    }
}

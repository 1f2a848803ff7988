//! # Backend failures and the error body contract
//!
//! Every failed call against the student backend ends up as a [`BackendError`].
//! The UI never inspects the variants directly; it asks for
//! [`BackendError::payload`], which always produces an [`ErrorPayload`] even
//! when the server answered with something that does not match the contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body the backend sends with non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
    pub status: u16,
    pub error: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>, status: u16, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            error: error.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Non-2xx response carrying a well-formed error body.
    #[error("{} [{}] [{}]", .0.message, .0.status, .0.error)]
    Rejected(ErrorPayload),
    /// Non-2xx response whose body did not match [`ErrorPayload`].
    #[error("unexpected response body with status {status}")]
    Malformed { status: u16 },
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),
    /// 2xx response whose body could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl BackendError {
    /// The payload to show the user, falling back to a generic one when the
    /// server did not send a conforming body.
    pub fn payload(&self) -> ErrorPayload {
        match self {
            BackendError::Rejected(payload) => payload.clone(),
            BackendError::Malformed { status } => ErrorPayload::new(
                "Unexpected response from server",
                *status,
                reason_phrase(*status),
            ),
            BackendError::Transport(message) => {
                ErrorPayload::new(message.clone(), 0, "Network Error")
            }
            BackendError::Decode(message) => {
                ErrorPayload::new(message.clone(), 200, "Invalid Response")
            }
        }
    }

    /// Classify a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        match decode_payload(body) {
            Some(payload) => BackendError::Rejected(payload),
            None => BackendError::Malformed { status },
        }
    }
}

fn decode_payload(body: &[u8]) -> Option<ErrorPayload> {
    serde_json::from_slice(body).ok()
}

/// Canonical reason phrase for the statuses a REST backend commonly returns.
pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown Error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conforming_body_is_rejected_payload() {
        let body = br#"{"message":"Student with id 3 does not exists","status":404,"error":"Not Found"}"#;
        let err = BackendError::from_response(404, body);
        assert_eq!(
            err,
            BackendError::Rejected(ErrorPayload::new(
                "Student with id 3 does not exists",
                404,
                "Not Found"
            ))
        );
        assert_eq!(err.payload().status, 404);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let body = br#"{"timestamp":"2024-01-01","message":"Email taken","status":400,"error":"Bad Request","path":"/api/v1/students"}"#;
        let payload = BackendError::from_response(400, body).payload();
        assert_eq!(payload.message, "Email taken");
    }

    #[test]
    fn test_non_conforming_body_fails_closed() {
        let err = BackendError::from_response(502, b"<html>bad gateway</html>");
        assert_eq!(err, BackendError::Malformed { status: 502 });
        assert_eq!(
            err.payload(),
            ErrorPayload::new("Unexpected response from server", 502, "Bad Gateway")
        );
    }

    #[test]
    fn test_missing_field_fails_closed() {
        let err = BackendError::from_response(500, br#"{"message":"boom"}"#);
        assert!(matches!(err, BackendError::Malformed { status: 500 }));
    }

    #[test]
    fn test_transport_payload() {
        let payload = BackendError::Transport("connection refused".into()).payload();
        assert_eq!(payload, ErrorPayload::new("connection refused", 0, "Network Error"));
    }

    #[test]
    fn test_display_matches_notification_body() {
        let err = BackendError::Rejected(ErrorPayload::new("nope", 409, "Conflict"));
        assert_eq!(err.to_string(), "nope [409] [Conflict]");
    }
}

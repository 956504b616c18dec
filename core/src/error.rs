//! Error types for the partner API client.
//!
//! # Design
//! Validation failures get their own variant carrying the offending field
//! name, because they happen before any request exists and callers fix them
//! by changing inputs, not by retrying. Transport failures are produced by
//! the host when executing a request; keeping them in the same enum lets
//! hosts and the core speak one error type. All non-2xx responses land in
//! `Http` with the raw status code and body for debugging.

use std::fmt;

/// Errors returned by `PartnerClient` build and parse methods, plus the
/// `Transport` variant hosts use to report failed round-trips.
#[derive(Debug)]
pub enum ApiError {
    /// An input failed client-side validation. Raised before any request
    /// value is produced; no network call happens.
    InvalidArgument { field: String, reason: String },

    /// The host could not complete the HTTP round-trip (connection, DNS,
    /// TLS, timeout).
    Transport(String),

    /// The server returned a non-2xx status.
    Http { status: u16, body: String },

    /// A 2xx response body could not be decoded as the expected JSON.
    Decode(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl ApiError {
    /// Shorthand for validation failures.
    pub(crate) fn invalid(field: &str, reason: &str) -> Self {
        ApiError::InvalidArgument {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidArgument { field, reason } => {
                write!(f, "invalid argument `{field}`: {reason}")
            }
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Decode(msg) => write!(f, "response decoding failed: {msg}"),
            ApiError::Serialization(msg) => write!(f, "request serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

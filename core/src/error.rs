//! Error types for resource requests.
//!
//! # Design
//! Three failure stages, three variants: the client could not build a URL
//! (`Configuration`), the session manager failed (`Transport`), or the body
//! did not match the requested type (`Decoding`). Transport errors pass
//! through untouched so callers see exactly what the session manager
//! reported. `NotFound` keeps its own transport variant because callers
//! frequently distinguish "no such resource" from other status failures.

use bytes::Bytes;
use thiserror::Error;

/// Errors returned by `HttpClient::request`.
#[derive(Debug, Error)]
pub enum Error {
    /// The base URL is absent or unusable; no network call was made.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The session manager failed to produce a response body.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be decoded into the requested type.
    #[error(transparent)]
    Decoding(#[from] DecodeError),
}

/// Failures reported by a `SessionManager`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Map a non-success status code to the matching variant.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        match status {
            404 => TransportError::NotFound,
            _ => TransportError::Status {
                status,
                body: body.into(),
            },
        }
    }

    /// The HTTP status behind this error, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::NotFound => Some(404),
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A response body that failed to decode, kept for diagnostics.
#[derive(Debug, Error)]
#[error("failed to decode response body: {source}")]
pub struct DecodeError {
    source: serde_json::Error,
    payload: Bytes,
}

impl DecodeError {
    pub fn new(source: serde_json::Error, payload: Bytes) -> Self {
        Self { source, payload }
    }

    /// The raw bytes that failed to decode.
    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn source_error(&self) -> &serde_json::Error {
        &self.source
    }
}

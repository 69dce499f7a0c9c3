//! Error types for the RiskDesk client.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Main error type for RiskDesk API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server replied with a non-success status code.
    ///
    /// `body` is the decoded response payload (a JSON value, or a JSON
    /// string wrapping the raw text when the body was not JSON).
    #[error("HTTP {status}")]
    Status {
        status: u16,
        body: Value,
        /// Parsed `Retry-After` header in seconds, when the server sent one.
        retry_after: Option<u64>,
    },

    /// The request never produced a usable response (connect failure,
    /// timeout, body decode failure, bad request construction).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// An operation requiring a session was attempted without a stored token.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Credential storage I/O failed.
    #[error("credential storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A stored or outgoing payload could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal lock was poisoned.
    #[error("internal lock poisoned")]
    LockPoisoned,
}

impl ApiError {
    /// Build a status error without a `Retry-After` hint.
    pub fn status(status: u16, body: Value) -> Self {
        Self::Status {
            status,
            body,
            retry_after: None,
        }
    }

    /// The HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The server's `Retry-After` hint, if one was captured.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Status {
                retry_after: Some(seconds),
                ..
            } => Some(Duration::from_secs(*seconds)),
            _ => None,
        }
    }

    /// Whether this error is an authentication failure (HTTP 401).
    pub fn is_auth_failure(&self) -> bool {
        self.status_code() == Some(401)
    }
}

/// Convenience Result type for RiskDesk client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

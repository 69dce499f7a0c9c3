//! Failure classification: user-facing messages and retry dispositions.
//!
//! Every failed API call ends up here twice. [`user_message`] turns the error
//! into the single line shown to the user, and [`disposition`] decides whether
//! the retry wrapper may try again. Both are pure functions over [`ApiError`];
//! neither panics or performs I/O.

use std::time::Duration;

use serde_json::Value;

use crate::error::ApiError;

/// Fallback when there is nothing to classify.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

const INVALID_REQUEST: &str = "Invalid request. Please check your input.";
const VALIDATION_FAILED: &str = "Validation failed. Please check your input.";
const AUTH_FAILED: &str = "Authentication failed. Please log in again.";
const FORBIDDEN: &str = "You do not have permission to perform this action.";
const NOT_FOUND: &str = "The requested resource was not found.";
const CONFLICT: &str = "The request conflicts with the current state. Please refresh and try again.";
const RATE_LIMITED: &str = "Too many requests. Please try again later.";
const SERVER_ERROR: &str = "A server error occurred. Please try again later.";
const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

/// HTTP status codes that never warrant a retry.
pub const NON_RETRYABLE_STATUS: [u16; 5] = [400, 401, 403, 404, 422];

/// Map a failed call to a single human-readable message.
///
/// Accepts `None` so UI glue holding an optional last-error can pass it
/// through unconditionally; `None` yields [`UNKNOWN_ERROR`]. Never fails and
/// never exposes a raw payload.
pub fn user_message(error: Option<&ApiError>) -> String {
    let Some(error) = error else {
        return UNKNOWN_ERROR.to_string();
    };

    match error {
        ApiError::Status { status, body, .. } => status_message(*status, body),
        ApiError::Transport(e) => {
            // Builder and decode failures never reached (or never parsed) a
            // response; surface their own text rather than blaming the network.
            if e.is_builder() || e.is_decode() {
                error.to_string()
            } else {
                NETWORK_ERROR.to_string()
            }
        }
        other => {
            let text = other.to_string();
            if text.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                text
            }
        }
    }
}

fn status_message(status: u16, body: &Value) -> String {
    match status {
        400 => detail_message(body).unwrap_or_else(|| INVALID_REQUEST.to_string()),
        422 => detail_message(body).unwrap_or_else(|| VALIDATION_FAILED.to_string()),
        401 => AUTH_FAILED.to_string(),
        403 => FORBIDDEN.to_string(),
        404 => NOT_FOUND.to_string(),
        409 => CONFLICT.to_string(),
        429 => RATE_LIMITED.to_string(),
        500 | 502 | 503 | 504 => SERVER_ERROR.to_string(),
        other => fallback_message(other, body),
    }
}

/// Extract a message from a structured `detail` field.
///
/// The backend reports validation failures either as `{"detail": "text"}` or
/// as `{"detail": [{"msg": ...}, ...]}`; the latter is joined with `", "`.
fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item.get("msg").and_then(Value::as_str) {
                    Some(msg) => msg.to_string(),
                    None => render_value(item),
                })
                .collect();
            Some(parts.join(", "))
        }
        _ => None,
    }
}

fn fallback_message(status: u16, body: &Value) -> String {
    if let Some(message) = body.get("message").and_then(Value::as_str) {
        return message.to_string();
    }
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return detail.to_string();
    }
    format!("Error {}: {}", status, render_value(body))
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Retry decision for a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Permanent failure; retrying cannot change the outcome.
    Fatal,
    /// Worth another attempt, with the server's wait hint when it sent one.
    Transient { retry_after: Option<Duration> },
}

impl Disposition {
    /// Whether this disposition permits a retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Disposition::Transient { .. })
    }
}

/// Classify an error for the retry wrapper.
///
/// Statuses in [`NON_RETRYABLE_STATUS`] are client mistakes or auth failures
/// and fail fast, as does a locally-detected missing session. Everything else
/// (server errors, rate limits, transport failures) is treated as transient.
pub fn disposition(error: &ApiError) -> Disposition {
    if let ApiError::NotAuthenticated = error {
        return Disposition::Fatal;
    }
    match error.status_code() {
        Some(code) if NON_RETRYABLE_STATUS.contains(&code) => Disposition::Fatal,
        _ => Disposition::Transient {
            retry_after: error.retry_after(),
        },
    }
}

//! Bounded retry with jittered exponential backoff.
//!
//! [`retry_with_backoff`] wraps any async operation and re-runs it while a
//! caller-supplied classifier reports the failure as transient.
//! [`retry_api`] is the same loop fixed to [`ApiError`] using the standard
//! [`crate::classify::disposition`]. Attempts within one call are strictly
//! sequential; concurrent calls share no state.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::classify::{self, Disposition};
use crate::error::ApiError;

/// Configuration for retry behavior. Immutable per call.
#[derive(Debug, Clone)]
pub struct RetryOptions {
    /// Maximum number of retry attempts (not counting the initial attempt).
    pub max_retries: u32,
    /// Backoff for the first retry; doubles per attempt before jitter.
    pub base_delay: Duration,
    /// Ceiling on any single wait, hinted or computed.
    pub max_delay: Duration,
    /// Honor the server's `Retry-After` hint instead of computed backoff.
    pub respect_retry_after: bool,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(10000),
            respect_retry_after: true,
        }
    }
}

impl RetryOptions {
    /// Create options that fail fast (no retries).
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    /// Pick the wait before retry number `attempt` (zero-based).
    ///
    /// A `Retry-After` hint, when honored, replaces the computed backoff but
    /// is still capped at `max_delay`.
    fn delay_for(&self, attempt: u32, hint: Option<Duration>) -> Duration {
        if self.respect_retry_after {
            if let Some(hint) = hint {
                return hint.min(self.max_delay);
            }
        }
        self.backoff_delay(attempt)
    }

    /// Compute `min(max_delay, base_delay * 2^attempt * jitter)` with jitter
    /// uniform in `[0.8, 1.2)`.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponential = self.base_delay.as_millis() as f64 * 2f64.powi(attempt as i32);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        let millis = (exponential * jitter).min(self.max_delay.as_millis() as f64);
        Duration::from_millis(millis as u64)
    }
}

/// Retry an async operation with exponential backoff.
///
/// Runs `operation` once, then up to `max_retries` more times while
/// `classify` reports the failure as [`Disposition::Transient`]. A
/// [`Disposition::Fatal`] failure, or the failure observed once retries are
/// exhausted, is returned unchanged.
///
/// # Example
///
/// ```ignore
/// let limits = retry_api(RetryOptions::default(), || client.risk_limits()).await?;
/// ```
pub async fn retry_with_backoff<T, E, F, Fut, C>(
    options: RetryOptions,
    mut operation: F,
    classify: C,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    C: Fn(&E) -> Disposition,
    E: std::fmt::Display,
{
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                let hint = match classify(&err) {
                    Disposition::Fatal => return Err(err),
                    Disposition::Transient { retry_after } => retry_after,
                };

                if attempt >= options.max_retries {
                    return Err(err);
                }

                let delay = options.delay_for(attempt, hint);
                tracing::debug!(
                    attempt = attempt + 1,
                    max_retries = options.max_retries,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "retrying after transient failure"
                );

                sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Retry an API operation using the standard disposition policy.
pub async fn retry_api<T, F, Fut>(options: RetryOptions, operation: F) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    retry_with_backoff(options, operation, classify::disposition).await
}

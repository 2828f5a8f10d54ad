use std::future::Future;
use std::time::Duration;

use startupdeck_core::{DeckError, DEFAULT_RETRY_ATTEMPTS};

/// Exponential-backoff retry for a fallible async operation.
///
/// Attempt `n` (1-based) sleeps `base_delay * 2^(n-1)` before the next try;
/// the final attempt's error propagates immediately with no trailing wait.
/// Earlier errors are logged and discarded, so callers only ever see the
/// last one. No jitter is applied.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_RETRY_ATTEMPTS,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: usize, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Run `operation` until it succeeds or the attempt budget is spent.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, DeckError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, DeckError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut last_error = None;
        for attempt in 1..=max_attempts {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(error) if attempt == max_attempts => return Err(error),
                Err(error) => {
                    tracing::warn!(attempt, max_attempts, %error, "attempt failed, retrying");
                    let delay = self.base_delay * 2u32.saturating_pow(attempt as u32 - 1);
                    tokio::time::sleep(delay).await;
                    last_error = Some(error);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| DeckError::Http("retry budget exhausted".to_string())))
    }
}

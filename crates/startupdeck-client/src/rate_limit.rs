use std::collections::HashMap;
use std::time::Duration;

use startupdeck_core::DeckError;
use tokio::sync::Mutex;
use tokio::time::Instant;

pub const DEFAULT_MAX_REQUESTS: usize = 10;
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Sliding-window admission control keyed by endpoint.
///
/// Each endpoint keeps its own sequence of recent request instants; instants
/// older than the trailing window are pruned on every check, so the limiter
/// self-heals without a background timer. A denied call records nothing.
pub struct RateLimiter {
    windows: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Admit or deny one request against `max_requests` per trailing `window`.
    /// Admission records the current instant.
    pub async fn can_make_request(
        &self,
        endpoint: &str,
        max_requests: usize,
        window: Duration,
    ) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().await;
        let timestamps = windows.entry(endpoint.to_string()).or_default();
        timestamps.retain(|instant| now.duration_since(*instant) < window);

        if timestamps.len() >= max_requests {
            return false;
        }
        timestamps.push(now);
        true
    }

    /// [`can_make_request`](Self::can_make_request) with the denial mapped to
    /// [`DeckError::RateLimited`], ready to surface to the user.
    pub async fn admit(
        &self,
        endpoint: &str,
        max_requests: usize,
        window: Duration,
    ) -> Result<(), DeckError> {
        if self.can_make_request(endpoint, max_requests, window).await {
            Ok(())
        } else {
            Err(DeckError::RateLimited(
                "Rate limit exceeded. Please wait before making more requests.".to_string(),
            ))
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

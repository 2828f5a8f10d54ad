//! Transport and utility layer for the StartupDeck SDK.
//!
//! [`ApiClient`] is the single choke point for calls to the StartupDeck API:
//! it attaches the session token, dispatches through an [`ApiBackend`], and
//! normalizes errors. Retry, caching, and rate limiting are deliberate
//! non-features of the client itself; call sites compose them from
//! [`RetryPolicy`], [`ResponseCache`], and [`RateLimiter`] as needed.

mod backend;
mod cache;
mod client;
mod rate_limit;
mod retry;

pub use backend::{ApiBackend, ApiRequest, FakeBackend, HttpBackend, Method, RawResponse};
pub use cache::{response_cache_key, ResponseCache};
pub use client::ApiClient;
pub use rate_limit::{RateLimiter, DEFAULT_MAX_REQUESTS, DEFAULT_WINDOW};
pub use retry::RetryPolicy;

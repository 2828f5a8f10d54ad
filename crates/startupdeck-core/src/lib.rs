use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// ApiResponse — the envelope every StartupDeck endpoint answers with
// ---------------------------------------------------------------------------

/// Standard response envelope produced by the StartupDeck service:
/// `{ success, data, message?, meta? }`. The SDK only deserializes this
/// shape, it never constructs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

/// Pagination info attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResponseMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

// ---------------------------------------------------------------------------
// DeckError
// ---------------------------------------------------------------------------

/// Error type shared across all StartupDeck SDK crates.
///
/// `Api` keeps the raw HTTP status alongside the normalized message; its
/// `Display` is the message alone so callers can surface it to users as-is.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("http error: {0}")]
    Http(String),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("parsing error: {0}")]
    Parsing(String),
    #[error("rate limit: {0}")]
    RateLimited(String),
    #[error("auth error: {0}")]
    Auth(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("config error: {0}")]
    Config(String),
}

impl DeckError {
    /// HTTP status of the failed call, when one was observed.
    pub fn status(&self) -> Option<u16> {
        match self {
            DeckError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Environment & ApiConfig
// ---------------------------------------------------------------------------

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default retry budget for call sites that opt into retries.
pub const DEFAULT_RETRY_ATTEMPTS: usize = 3;
/// Default freshness window for cached responses.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Deployment environment the SDK talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Resolve the environment from `STARTUPDECK_ENV`
    /// (`development` / `staging` / anything else = production).
    pub fn detect() -> Self {
        match std::env::var("STARTUPDECK_ENV").as_deref() {
            Ok("development") | Ok("dev") | Ok("local") => Environment::Development,
            Ok("staging") | Ok("test") => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Development => "http://localhost:8000/api/v1",
            Environment::Staging => "https://staging-api.startupdeck.app/v1",
            Environment::Production => "https://api.startupdeck.app/v1",
        }
    }

    pub fn storage_url(&self) -> &'static str {
        match self {
            Environment::Development => "http://localhost:8000/storage",
            Environment::Staging => "https://staging-api.startupdeck.app/storage",
            Environment::Production => "https://api.startupdeck.app/storage",
        }
    }
}

/// Connection settings for the StartupDeck API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub storage_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            storage_url: environment.storage_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_storage_url(mut self, url: impl Into<String>) -> Self {
        self.storage_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(Environment::Production)
    }
}

// ---------------------------------------------------------------------------
// Session & SessionProvider
// ---------------------------------------------------------------------------

/// The signed-in user, as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An authenticated session issued by the external identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) after which `access_token` is invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<u64>,
    pub user: UserProfile,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => unix_now() >= expires_at,
            None => false,
        }
    }
}

/// Seconds since the Unix epoch.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Source of the current session token. The identity service is external;
/// the SDK only consumes whatever session it hands out. `None` means the
/// call proceeds anonymously.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn session(&self) -> Result<Option<Session>, DeckError>;

    async fn user(&self) -> Result<Option<UserProfile>, DeckError> {
        Ok(self.session().await?.map(|s| s.user))
    }
}

/// Provider for unauthenticated use: every call is anonymous.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousSession;

#[async_trait]
impl SessionProvider for AnonymousSession {
    async fn session(&self) -> Result<Option<Session>, DeckError> {
        Ok(None)
    }
}

/// Provider that always hands out one fixed session. Useful in tests and in
/// server-side jobs that hold a long-lived service token.
#[derive(Debug, Clone)]
pub struct StaticSessionProvider {
    session: Session,
}

impl StaticSessionProvider {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Shorthand for a provider with just a bearer token and user id.
    pub fn with_token(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::new(Session {
            access_token: access_token.into(),
            refresh_token: None,
            expires_at: None,
            user: UserProfile {
                id: user_id.into(),
                email: None,
            },
        })
    }
}

#[async_trait]
impl SessionProvider for StaticSessionProvider {
    async fn session(&self) -> Result<Option<Session>, DeckError> {
        Ok(Some(self.session.clone()))
    }
}

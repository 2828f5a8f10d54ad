use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use startupdeck_core::{ApiConfig, ApiResponse, DeckError, SessionProvider};

use crate::backend::{ApiBackend, ApiRequest, HttpBackend, Method, RawResponse};

/// Single choke point for outbound calls to the StartupDeck API.
///
/// Attaches the current session token (anonymous when absent), dispatches
/// through the configured [`ApiBackend`], and normalizes non-2xx answers
/// into [`DeckError::Api`]. The client itself never retries, caches, or
/// rate-limits; those compose at call sites.
pub struct ApiClient {
    config: ApiConfig,
    backend: Arc<dyn ApiBackend>,
    sessions: Arc<dyn SessionProvider>,
}

impl ApiClient {
    pub fn new(
        config: ApiConfig,
        backend: Arc<dyn ApiBackend>,
        sessions: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            config,
            backend,
            sessions,
        }
    }

    /// Client backed by a real HTTP transport honoring `config.timeout`.
    pub fn from_config(
        config: ApiConfig,
        sessions: Arc<dyn SessionProvider>,
    ) -> Result<Self, DeckError> {
        let backend = Arc::new(HttpBackend::with_timeout(config.timeout)?);
        Ok(Self::new(config, backend, sessions))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, DeckError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<ApiResponse<T>, DeckError> {
        self.request(Method::Post, path, Some(body)).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<ApiResponse<T>, DeckError> {
        self.request(Method::Put, path, Some(body)).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
    ) -> Result<ApiResponse<T>, DeckError> {
        self.request(Method::Patch, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, DeckError> {
        self.request(Method::Delete, path, None).await
    }

    /// Dispatch one call and parse the envelope. `body` is dropped for
    /// non-mutating methods.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse<T>, DeckError> {
        let headers = self.headers().await?;
        let request = ApiRequest {
            method,
            url: format!("{}{}", self.config.base_url, path),
            headers,
            body: if method.allows_body() { body } else { None },
        };

        tracing::debug!(method = method.as_str(), path, "dispatching request");
        let started = Instant::now();
        let response = self.backend.send(request).await?;
        tracing::debug!(
            method = method.as_str(),
            path,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );

        if !(200..300).contains(&response.status) {
            return Err(normalize_error(&response));
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| DeckError::Parsing(format!("response from {path}: {e}")))
    }

    async fn headers(&self) -> Result<Vec<(String, String)>, DeckError> {
        let mut headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("X-Client".to_string(), "StartupDeck-Rust".to_string()),
            ("X-Version".to_string(), env!("CARGO_PKG_VERSION").to_string()),
        ];
        if let Some(session) = self.sessions.session().await? {
            headers.push((
                "Authorization".to_string(),
                format!("Bearer {}", session.access_token),
            ));
        }
        Ok(headers)
    }
}

/// Turn a non-2xx answer into [`DeckError::Api`]: use the error body's
/// `message` field when one parses out, otherwise fall back to
/// `API Error: <status>`.
fn normalize_error(response: &RawResponse) -> DeckError {
    let message = serde_json::from_slice::<Value>(&response.body)
        .ok()
        .and_then(|body| body["message"].as_str().map(str::to_string))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("API Error: {}", response.status));
    DeckError::Api {
        status: response.status,
        message,
    }
}

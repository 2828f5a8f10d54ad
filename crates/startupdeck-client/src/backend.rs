use std::{collections::VecDeque, sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use startupdeck_core::DeckError;
use tokio::sync::Mutex;

/// HTTP method of an outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Only mutating methods carry a JSON body.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

/// A fully assembled outbound request. Ephemeral: built per call by
/// [`ApiClient`](crate::ApiClient), never persisted.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw service answer before normalization: status plus the unparsed body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 2xx response carrying the given JSON payload.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }
}

/// Transport seam for the StartupDeck API. Production uses [`HttpBackend`];
/// tests queue canned answers on a [`FakeBackend`].
#[async_trait]
pub trait ApiBackend: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, DeckError>;
}

/// Production backend using reqwest.
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Backend whose requests abort after `timeout`. The upstream service
    /// enforces no deadline of its own, so the transport carries one.
    pub fn with_timeout(timeout: Duration) -> Result<Self, DeckError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DeckError::Config(format!("http client: {e}")))?;
        Ok(Self { client })
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiBackend for HttpBackend {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, DeckError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Patch => self.client.patch(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                DeckError::Timeout(format!("request to {}: {e}", request.url))
            } else {
                DeckError::Http(format!("request failed: {e}"))
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| DeckError::Http(format!("reading response body: {e}")))?;

        Ok(RawResponse { status, body })
    }
}

/// Test backend with queued responses. Records every dispatched request so
/// tests can assert on headers, paths, and bodies.
pub struct FakeBackend {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, DeckError>>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push_response(&self, response: RawResponse) -> &Self {
        self.responses
            .try_lock()
            .expect("not concurrent during setup")
            .push_back(Ok(response));
        self
    }

    /// Queue a JSON response with the given status.
    pub fn push_json(&self, status: u16, body: &Value) -> &Self {
        self.push_response(RawResponse::json(status, body))
    }

    pub fn push_error(&self, error: DeckError) -> &Self {
        self.responses
            .try_lock()
            .expect("not concurrent during setup")
            .push_back(Err(error));
        self
    }

    /// Requests dispatched so far, in order.
    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiBackend for FakeBackend {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, DeckError> {
        self.requests.lock().await.push(request);
        let mut responses = self.responses.lock().await;
        responses
            .pop_front()
            .unwrap_or_else(|| Err(DeckError::Http("FakeBackend exhausted".to_string())))
    }
}

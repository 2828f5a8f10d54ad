//! Consumer of the external identity service.
//!
//! The service owns accounts, credentials, and token issuance; this crate
//! only drives its REST surface and holds the session it hands back.
//! [`AuthClient`] implements [`SessionProvider`], so it plugs directly into
//! `startupdeck_client::ApiClient` as the token source.

use async_trait::async_trait;
use serde_json::{json, Value};
use startupdeck_core::{unix_now, DeckError, Session, SessionProvider, UserProfile};
use tokio::sync::RwLock;

/// OAuth providers the identity service federates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    GitHub,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::GitHub => "github",
        }
    }
}

/// Connection settings for the identity service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub base_url: String,
    pub api_key: String,
}

impl AuthConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

/// Client for the identity service. Holds at most one session at a time.
pub struct AuthClient {
    config: AuthConfig,
    client: reqwest::Client,
    session: RwLock<Option<Session>>,
}

impl AuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            session: RwLock::new(None),
        }
    }

    /// Register a new account and start a session for it.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Session, DeckError> {
        validate_credentials(email, password)?;
        let body = self
            .post("/signup", json!({ "email": email, "password": password }), None)
            .await?;
        self.store_session(&body).await
    }

    /// Exchange email/password credentials for a session.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, DeckError> {
        validate_credentials(email, password)?;
        let body = self
            .post(
                "/token?grant_type=password",
                json!({ "email": email, "password": password }),
                None,
            )
            .await?;
        tracing::debug!(email, "password sign-in succeeded");
        self.store_session(&body).await
    }

    /// Ask the service to email a passwordless sign-in link.
    pub async fn sign_in_with_magic_link(&self, email: &str) -> Result<(), DeckError> {
        validate_email(email)?;
        self.post("/magiclink", json!({ "email": email }), None)
            .await?;
        tracing::debug!(email, "magic link requested");
        Ok(())
    }

    /// Redirect URL that starts the OAuth flow with `provider`. The browser
    /// completes the flow against the identity service directly.
    pub fn sign_in_with_oauth(&self, provider: OAuthProvider) -> String {
        format!(
            "{}/authorize?provider={}",
            self.config.base_url,
            provider.as_str()
        )
    }

    /// Revoke the current session, if any, and forget it locally.
    pub async fn sign_out(&self) -> Result<(), DeckError> {
        let session = self.session.write().await.take();
        if let Some(session) = session {
            self.post("/logout", json!({}), Some(&session.access_token))
                .await?;
            tracing::debug!("signed out");
        }
        Ok(())
    }

    async fn store_session(&self, body: &Value) -> Result<Session, DeckError> {
        let session = parse_session(body)?;
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, DeckError> {
        let body = self
            .post(
                "/token?grant_type=refresh_token",
                json!({ "refresh_token": refresh_token }),
                None,
            )
            .await?;
        tracing::debug!("session refreshed");
        self.store_session(&body).await
    }

    async fn post(
        &self,
        path: &str,
        body: Value,
        bearer: Option<&str>,
    ) -> Result<Value, DeckError> {
        let mut builder = self
            .client
            .post(format!("{}{}", self.config.base_url, path))
            .header("apikey", &self.config.api_key)
            .json(&body);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| DeckError::Http(format!("identity service: {e}")))?;
        let status = response.status().as_u16();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        if !(200..300).contains(&status) {
            let message = ["error_description", "msg", "message"]
                .iter()
                .find_map(|key| body[key].as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("Auth Error: {status}"));
            return Err(DeckError::Auth(message));
        }
        Ok(body)
    }
}

#[async_trait]
impl SessionProvider for AuthClient {
    async fn session(&self) -> Result<Option<Session>, DeckError> {
        let current = self.session.read().await.clone();
        match current {
            Some(session) if !session.is_expired() => Ok(Some(session)),
            Some(session) => match session.refresh_token {
                Some(ref token) => Ok(Some(self.refresh(token).await?)),
                None => Ok(None),
            },
            None => Ok(None),
        }
    }
}

fn parse_session(body: &Value) -> Result<Session, DeckError> {
    let access_token = body["access_token"]
        .as_str()
        .filter(|token| !token.is_empty())
        .ok_or_else(|| DeckError::Auth("identity service returned no access token".to_string()))?;

    let expires_at = body["expires_at"]
        .as_u64()
        .or_else(|| body["expires_in"].as_u64().map(|ttl| unix_now() + ttl));

    Ok(Session {
        access_token: access_token.to_string(),
        refresh_token: body["refresh_token"].as_str().map(str::to_string),
        expires_at,
        user: UserProfile {
            id: body["user"]["id"].as_str().unwrap_or("").to_string(),
            email: body["user"]["email"].as_str().map(str::to_string),
        },
    })
}

fn validate_email(email: &str) -> Result<(), DeckError> {
    if email.contains('@') && !email.trim().is_empty() {
        Ok(())
    } else {
        Err(DeckError::Validation(
            "Please enter a valid email address".to_string(),
        ))
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), DeckError> {
    validate_email(email)?;
    if password.len() < 6 {
        return Err(DeckError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}

//! Consumer of the managed object store holding user assets.
//!
//! Every object lives under the signed-in user's id as a path prefix. That
//! prefix is a namespacing convention; the store enforces authorization
//! server-side, not this client.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use serde_json::{json, Value};
use startupdeck_core::{DeckError, Session, SessionProvider};

/// Bucket that holds per-user files.
pub const USER_ASSETS_BUCKET: &str = "user-assets";
/// Default lifetime of a signed download URL.
pub const DEFAULT_SIGNED_URL_TTL: Duration = Duration::from_secs(3600);

/// Connection settings for the object store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub base_url: String,
    pub bucket: String,
}

impl StorageConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bucket: USER_ASSETS_BUCKET.to_string(),
        }
    }

    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }
}

/// An object the store reported back from a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectInfo {
    pub name: String,
    pub updated_at: Option<String>,
    pub size: Option<u64>,
}

/// A successfully stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Bucket-relative path, user prefix included.
    pub path: String,
}

/// Client for the user-assets object store. All operations require an
/// authenticated session.
pub struct StorageClient {
    config: StorageConfig,
    client: reqwest::Client,
    sessions: Arc<dyn SessionProvider>,
}

impl StorageClient {
    pub fn new(config: StorageConfig, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            sessions,
        }
    }

    /// Upload (or overwrite) a file under the user's prefix and return the
    /// stored path.
    pub async fn upload(
        &self,
        name: &str,
        contents: Bytes,
        content_type: &str,
    ) -> Result<StoredObject, DeckError> {
        let session = self.required_session().await?;
        let path = format!("{}/{}", session.user.id, name);
        let url = format!(
            "{}/object/{}/{}",
            self.config.base_url, self.config.bucket, path
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&session.access_token)
            .header("Content-Type", content_type)
            .header("Cache-Control", "3600")
            .header("x-upsert", "true")
            .body(contents)
            .send()
            .await
            .map_err(|e| DeckError::Storage(format!("upload {name}: {e}")))?;

        check_status(&path, response).await?;
        tracing::debug!(path, "asset uploaded");
        Ok(StoredObject { path })
    }

    /// List the user's files, optionally within a subfolder of their prefix.
    pub async fn list(&self, folder: Option<&str>) -> Result<Vec<ObjectInfo>, DeckError> {
        let session = self.required_session().await?;
        let prefix = match folder {
            Some(folder) => format!("{}/{folder}", session.user.id),
            None => session.user.id.clone(),
        };
        let url = format!("{}/object/list/{}", self.config.base_url, self.config.bucket);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&session.access_token)
            .json(&json!({ "prefix": prefix }))
            .send()
            .await
            .map_err(|e| DeckError::Storage(format!("list {prefix}: {e}")))?;
        let body = check_status(&prefix, response).await?;

        let objects = body
            .as_array()
            .map(|items| items.iter().filter_map(parse_object).collect())
            .unwrap_or_default();
        Ok(objects)
    }

    /// Delete one object by its bucket-relative path.
    pub async fn remove(&self, path: &str) -> Result<(), DeckError> {
        let session = self.required_session().await?;
        let url = format!("{}/object/{}", self.config.base_url, self.config.bucket);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&session.access_token)
            .json(&json!({ "prefixes": [path] }))
            .send()
            .await
            .map_err(|e| DeckError::Storage(format!("remove {path}: {e}")))?;
        check_status(path, response).await?;
        tracing::debug!(path, "asset removed");
        Ok(())
    }

    /// Issue a time-limited download URL for one object.
    pub async fn signed_url(&self, path: &str, ttl: Duration) -> Result<String, DeckError> {
        let session = self.required_session().await?;
        let url = format!(
            "{}/object/sign/{}/{}",
            self.config.base_url, self.config.bucket, path
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&session.access_token)
            .json(&json!({ "expiresIn": ttl.as_secs() }))
            .send()
            .await
            .map_err(|e| DeckError::Storage(format!("sign {path}: {e}")))?;
        let body = check_status(path, response).await?;

        body["signedURL"]
            .as_str()
            .map(|signed| format!("{}{signed}", self.config.base_url))
            .ok_or_else(|| DeckError::Storage(format!("no signed URL returned for {path}")))
    }

    async fn required_session(&self) -> Result<Session, DeckError> {
        self.sessions
            .session()
            .await?
            .ok_or_else(|| DeckError::Auth("Authentication required".to_string()))
    }
}

async fn check_status(context: &str, response: reqwest::Response) -> Result<Value, DeckError> {
    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    if !(200..300).contains(&status) {
        let message = body["message"]
            .as_str()
            .or_else(|| body["error"].as_str())
            .unwrap_or("unknown storage error");
        return Err(DeckError::Storage(format!("{context}: {message} ({status})")));
    }
    Ok(body)
}

fn parse_object(item: &Value) -> Option<ObjectInfo> {
    Some(ObjectInfo {
        name: item["name"].as_str()?.to_string(),
        updated_at: item["updated_at"].as_str().map(str::to_string),
        size: item["metadata"]["size"].as_u64(),
    })
}

//! Client for the contact-form relay. The relay forwards the submission as
//! an outbound email through a transactional provider; mail delivery is its
//! concern, not this crate's.

use serde::Serialize;
use serde_json::Value;
use startupdeck_core::DeckError;

/// One contact-form submission. All fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Every field must be present and non-blank.
    pub fn validate(&self) -> Result<(), DeckError> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| *field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DeckError::Validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Client for the relay's single POST endpoint.
pub struct ContactClient {
    endpoint: String,
    client: reqwest::Client,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Validate and submit one message.
    pub async fn send(&self, message: &ContactMessage) -> Result<(), DeckError> {
        message.validate()?;

        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|e| DeckError::Http(format!("contact relay: {e}")))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body["error"]
                .as_str()
                .filter(|error| !error.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("API Error: {status}"));
            return Err(DeckError::Api { status, message });
        }
        tracing::debug!("contact message relayed");
        Ok(())
    }
}

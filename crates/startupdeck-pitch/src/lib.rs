//! Pitch deck endpoints: generation, editing, export, presentation scripts,
//! and per-deck view analytics.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use startupdeck_client::{ApiClient, Method};
use startupdeck_core::{ApiResponse, DeckError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchTemplate {
    Standard,
    Investor,
    DemoDay,
    Accelerator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Pptx,
    Html,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Pptx => "pptx",
            ExportFormat::Html => "html",
        }
    }
}

/// Deck branding options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Payload for [`PitchApi::generate`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePitchDeckRequest {
    pub idea_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PitchTemplate>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slides: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<Branding>,
}

impl GeneratePitchDeckRequest {
    pub fn new(idea_id: impl Into<String>) -> Self {
        Self {
            idea_id: idea_id.into(),
            template: None,
            slides: Vec::new(),
            branding: None,
        }
    }

    pub fn with_template(mut self, template: PitchTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_slide(mut self, slide: impl Into<String>) -> Self {
        self.slides.push(slide.into());
        self
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = Some(branding);
        self
    }
}

/// A generated deck with its ordered slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchDeck {
    pub id: String,
    pub idea_id: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
    pub template: String,
    #[serde(default)]
    pub branding: Branding,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    #[serde(rename = "type")]
    pub slide_type: String,
    pub title: String,
    pub content: Value,
    pub order: u32,
}

/// Typed wrapper over the `/pitch/*` endpoints.
pub struct PitchApi {
    client: Arc<ApiClient>,
}

impl PitchApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        request: &GeneratePitchDeckRequest,
    ) -> Result<ApiResponse<PitchDeck>, DeckError> {
        let body = serde_json::to_value(request)
            .map_err(|e| DeckError::Parsing(format!("request body: {e}")))?;
        self.client.post("/pitch/generate", body).await
    }

    pub async fn deck(&self, deck_id: &str) -> Result<ApiResponse<PitchDeck>, DeckError> {
        self.client.get(&format!("/pitch/deck/{deck_id}")).await
    }

    pub async fn update_deck(
        &self,
        deck_id: &str,
        updates: Value,
    ) -> Result<ApiResponse<PitchDeck>, DeckError> {
        self.client
            .put(&format!("/pitch/deck/{deck_id}"), updates)
            .await
    }

    /// Kick off a server-side export; the response carries the download
    /// location once ready.
    pub async fn export_deck(
        &self,
        deck_id: &str,
        format: ExportFormat,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .request(
                Method::Post,
                &format!("/pitch/deck/{deck_id}/export?format={}", format.as_str()),
                None,
            )
            .await
    }

    pub async fn templates(&self) -> Result<ApiResponse<Value>, DeckError> {
        self.client.get("/pitch/templates").await
    }

    /// Generate a presentation script; `duration` is the target length in
    /// minutes.
    pub async fn script(
        &self,
        deck_id: &str,
        duration: Option<u32>,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .post(
                &format!("/pitch/deck/{deck_id}/script"),
                json!({ "duration": duration }),
            )
            .await
    }

    pub async fn deck_analytics(&self, deck_id: &str) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .get(&format!("/pitch/deck/{deck_id}/analytics"))
            .await
    }
}

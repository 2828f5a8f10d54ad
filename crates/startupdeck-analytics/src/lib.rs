//! Analytics endpoints: dashboard stats, per-idea metrics, platform usage,
//! and user-data export.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use startupdeck_client::{ApiClient, Method};
use startupdeck_core::{ApiResponse, DeckError};

/// Default usage window when the caller does not name one.
pub const DEFAULT_USAGE_TIMEFRAME: &str = "30days";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataExportFormat {
    Json,
    Csv,
}

impl DataExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataExportFormat::Json => "json",
            DataExportFormat::Csv => "csv",
        }
    }
}

/// Typed wrapper over the `/analytics/*` endpoints.
pub struct AnalyticsApi {
    client: Arc<ApiClient>,
}

impl AnalyticsApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Aggregate stats for the signed-in user's dashboard.
    pub async fn dashboard(&self) -> Result<ApiResponse<Value>, DeckError> {
        self.client.get("/analytics/dashboard").await
    }

    /// Performance metrics for one idea.
    pub async fn idea_metrics(&self, idea_id: &str) -> Result<ApiResponse<Value>, DeckError> {
        self.client.get(&format!("/analytics/idea/{idea_id}")).await
    }

    /// Platform usage over `timeframe` (e.g. `7days`, `30days`).
    pub async fn usage(&self, timeframe: Option<&str>) -> Result<ApiResponse<Value>, DeckError> {
        let timeframe = timeframe.unwrap_or(DEFAULT_USAGE_TIMEFRAME);
        self.client
            .get(&format!("/analytics/usage?timeframe={timeframe}"))
            .await
    }

    /// Ask the service to assemble an export of the user's data.
    pub async fn export(&self, format: DataExportFormat) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .request(
                Method::Post,
                &format!("/analytics/export?format={}", format.as_str()),
                None,
            )
            .await
    }
}

//! Idea analysis endpoints: submit a business idea, browse and manage the
//! resulting analyses.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use startupdeck_client::ApiClient;
use startupdeck_core::{ApiResponse, DeckError};

/// Shortest idea text the service accepts.
pub const MIN_IDEA_LENGTH: usize = 10;

/// Submission payload for [`IdeasApi::analyze`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeIdeaRequest {
    pub idea: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

impl AnalyzeIdeaRequest {
    pub fn new(idea: impl Into<String>) -> Self {
        Self {
            idea: idea.into(),
            industry: None,
            target_market: None,
            budget: None,
            timeline: None,
        }
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_target_market(mut self, target_market: impl Into<String>) -> Self {
        self.target_market = Some(target_market.into());
        self
    }

    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }

    /// The idea must survive trimming with at least [`MIN_IDEA_LENGTH`]
    /// characters.
    pub fn validate(&self) -> Result<(), DeckError> {
        if self.idea.trim().chars().count() < MIN_IDEA_LENGTH {
            return Err(DeckError::Validation(format!(
                "Your idea must be at least {MIN_IDEA_LENGTH} characters long"
            )));
        }
        Ok(())
    }

    fn body(&self) -> Result<Value, DeckError> {
        self.validate()?;
        let mut request = self.clone();
        request.idea = request.idea.trim().to_string();
        serde_json::to_value(&request).map_err(|e| DeckError::Parsing(format!("request body: {e}")))
    }
}

/// One analyzed idea as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaAnalysis {
    pub id: String,
    pub idea: String,
    pub analysis: AnalysisScores,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Scores and SWOT lists the service computed for an idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisScores {
    pub viability: f64,
    pub market_potential: f64,
    pub competitiveness: f64,
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub threats: Vec<String>,
}

/// Typed wrapper over the `/ideas/*` endpoints.
pub struct IdeasApi {
    client: Arc<ApiClient>,
}

impl IdeasApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Submit a new idea for analysis.
    pub async fn analyze(
        &self,
        request: &AnalyzeIdeaRequest,
    ) -> Result<ApiResponse<IdeaAnalysis>, DeckError> {
        self.client.post("/ideas/analyze", request.body()?).await
    }

    /// Fetch a single analysis by id.
    pub async fn analysis(&self, analysis_id: &str) -> Result<ApiResponse<IdeaAnalysis>, DeckError> {
        self.client
            .get(&format!("/ideas/analysis/{analysis_id}"))
            .await
    }

    /// Page through the signed-in user's analysis history.
    pub async fn history(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse<Vec<IdeaAnalysis>>, DeckError> {
        self.client
            .get(&format!("/ideas/history?page={page}&limit={limit}"))
            .await
    }

    /// Apply partial updates to an analysis.
    pub async fn update_analysis(
        &self,
        analysis_id: &str,
        updates: Value,
    ) -> Result<ApiResponse<IdeaAnalysis>, DeckError> {
        self.client
            .put(&format!("/ideas/analysis/{analysis_id}"), updates)
            .await
    }

    pub async fn delete_analysis(
        &self,
        analysis_id: &str,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .delete(&format!("/ideas/analysis/{analysis_id}"))
            .await
    }
}

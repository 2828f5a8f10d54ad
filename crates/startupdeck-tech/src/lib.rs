//! Tech stack endpoints: MVP stack recommendations, stack comparison, cost
//! analysis, architecture advice, and delivery timeline estimates.
//!
//! Field names follow the service's wire format, which mixes camelCase and
//! snake_case across endpoints; the explicit serde renames below are
//! deliberate.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use startupdeck_client::ApiClient;
use startupdeck_core::{ApiResponse, DeckError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Web,
    Mobile,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyScale {
    Startup,
    Growth,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureScale {
    Mvp,
    Growth,
    Enterprise,
}

/// Payload for [`TechApi::mvp_stack`].
#[derive(Debug, Clone, Serialize)]
pub struct MvpStackRequest {
    #[serde(rename = "ideaId")]
    pub idea_id: String,
    pub platform: Platform,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(rename = "team_size", skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
}

impl MvpStackRequest {
    pub fn new(idea_id: impl Into<String>, platform: Platform) -> Self {
        Self {
            idea_id: idea_id.into(),
            platform,
            budget: None,
            timeline: None,
            team_size: None,
        }
    }

    pub fn with_budget(mut self, budget: BudgetLevel) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }

    pub fn with_team_size(mut self, team_size: u32) -> Self {
        self.team_size = Some(team_size);
        self
    }
}

/// Payload for [`TechApi::compare`].
#[derive(Debug, Clone, Serialize)]
pub struct CompareStacksRequest {
    pub stacks: Vec<String>,
    pub criteria: Vec<String>,
}

impl CompareStacksRequest {
    pub fn new(stacks: Vec<String>, criteria: Vec<String>) -> Self {
        Self { stacks, criteria }
    }
}

/// Payload for [`TechApi::cost_analysis`].
#[derive(Debug, Clone, Serialize)]
pub struct CostAnalysisRequest {
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<CompanyScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl CostAnalysisRequest {
    pub fn new(technologies: Vec<String>) -> Self {
        Self {
            technologies,
            scale: None,
            region: None,
        }
    }

    pub fn with_scale(mut self, scale: CompanyScale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// Payload for [`TechApi::architecture`].
#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureRequest {
    #[serde(rename = "ideaId")]
    pub idea_id: String,
    pub scale: ArchitectureScale,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requirements: Vec<String>,
}

impl ArchitectureRequest {
    pub fn new(idea_id: impl Into<String>, scale: ArchitectureScale) -> Self {
        Self {
            idea_id: idea_id.into(),
            scale,
            requirements: Vec::new(),
        }
    }

    pub fn with_requirement(mut self, requirement: impl Into<String>) -> Self {
        self.requirements.push(requirement.into());
        self
    }
}

/// Payload for [`TechApi::timeline`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub team_size: u32,
}

impl TimelineRequest {
    pub fn new(tech_stack: Vec<String>, features: Vec<String>, team_size: u32) -> Self {
        Self {
            tech_stack,
            features,
            team_size,
        }
    }
}

/// Recommended stack for one idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStack {
    pub id: String,
    #[serde(rename = "ideaId")]
    pub idea_id: String,
    pub stack: StackBuckets,
    pub estimated_cost: CostBreakdown,
    pub timeline: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StackBuckets {
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
    #[serde(default)]
    pub hosting: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub development: f64,
    pub hosting: f64,
    pub tools: f64,
    pub total: f64,
}

/// Typed wrapper over the `/tech/*` endpoints.
pub struct TechApi {
    client: Arc<ApiClient>,
}

impl TechApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn mvp_stack(
        &self,
        request: &MvpStackRequest,
    ) -> Result<ApiResponse<TechStack>, DeckError> {
        self.client.post("/tech/mvp-stack", to_body(request)?).await
    }

    pub async fn compare(
        &self,
        request: &CompareStacksRequest,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client.post("/tech/compare", to_body(request)?).await
    }

    pub async fn cost_analysis(
        &self,
        request: &CostAnalysisRequest,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .post("/tech/cost-analysis", to_body(request)?)
            .await
    }

    pub async fn architecture(
        &self,
        request: &ArchitectureRequest,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .post("/tech/architecture", to_body(request)?)
            .await
    }

    pub async fn timeline(
        &self,
        request: &TimelineRequest,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client.post("/tech/timeline", to_body(request)?).await
    }
}

fn to_body<T: Serialize>(request: &T) -> Result<Value, DeckError> {
    serde_json::to_value(request).map_err(|e| DeckError::Parsing(format!("request body: {e}")))
}

//! Feature generation endpoints: recommended feature sets, prioritization,
//! roadmaps, and development cost estimates for an analyzed idea.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use startupdeck_client::ApiClient;
use startupdeck_core::{ApiResponse, DeckError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Core,
    Advanced,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrioritizeCriteria {
    Impact,
    Effort,
    Revenue,
    UserValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadmapTimeframe {
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl RoadmapTimeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapTimeframe::ThreeMonths => "3months",
            RoadmapTimeframe::SixMonths => "6months",
            RoadmapTimeframe::OneYear => "1year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostRegion {
    Us,
    Eu,
    Asia,
}

/// Payload for [`FeaturesApi::generate`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFeaturesRequest {
    pub idea_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FeatureCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl GenerateFeaturesRequest {
    pub fn new(idea_id: impl Into<String>) -> Self {
        Self {
            idea_id: idea_id.into(),
            category: None,
            count: None,
        }
    }

    pub fn with_category(mut self, category: FeatureCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

/// Payload for [`FeaturesApi::prioritize`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizeFeaturesRequest {
    pub idea_id: String,
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<PrioritizeCriteria>,
}

impl PrioritizeFeaturesRequest {
    pub fn new(idea_id: impl Into<String>, features: Vec<String>) -> Self {
        Self {
            idea_id: idea_id.into(),
            features,
            criteria: None,
        }
    }

    pub fn with_criteria(mut self, criteria: PrioritizeCriteria) -> Self {
        self.criteria = Some(criteria);
        self
    }
}

/// Payload for [`FeaturesApi::estimate_cost`].
#[derive(Debug, Clone, Serialize)]
pub struct EstimateCostRequest {
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<Complexity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<CostRegion>,
}

impl EstimateCostRequest {
    pub fn new(features: Vec<String>) -> Self {
        Self {
            features,
            complexity: None,
            region: None,
        }
    }

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    pub fn with_region(mut self, region: CostRegion) -> Self {
        self.region = Some(region);
        self
    }
}

/// Feature recommendations for one idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    pub id: String,
    pub idea_id: String,
    pub features: FeatureBuckets,
    #[serde(default)]
    pub roadmap: Vec<RoadmapPhase>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureBuckets {
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub advanced: Vec<String>,
    #[serde(default)]
    pub premium: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub timeline: String,
    pub effort: String,
}

/// Typed wrapper over the `/features/*` endpoints.
pub struct FeaturesApi {
    client: Arc<ApiClient>,
}

impl FeaturesApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        request: &GenerateFeaturesRequest,
    ) -> Result<ApiResponse<FeatureSet>, DeckError> {
        self.client
            .post("/features/generate", to_body(request)?)
            .await
    }

    pub async fn prioritize(
        &self,
        request: &PrioritizeFeaturesRequest,
    ) -> Result<ApiResponse<FeatureSet>, DeckError> {
        self.client
            .post("/features/prioritize", to_body(request)?)
            .await
    }

    /// Roadmap for an idea; `timeframe` defaults to six months server-side,
    /// so the default is sent explicitly to keep responses stable.
    pub async fn roadmap(
        &self,
        idea_id: &str,
        timeframe: Option<RoadmapTimeframe>,
    ) -> Result<ApiResponse<FeatureSet>, DeckError> {
        let timeframe = timeframe.unwrap_or(RoadmapTimeframe::SixMonths);
        self.client
            .get(&format!(
                "/features/roadmap/{idea_id}?timeframe={}",
                timeframe.as_str()
            ))
            .await
    }

    pub async fn estimate_cost(
        &self,
        request: &EstimateCostRequest,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .post("/features/estimate-cost", to_body(request)?)
            .await
    }
}

fn to_body<T: Serialize>(request: &T) -> Result<Value, DeckError> {
    serde_json::to_value(request).map_err(|e| DeckError::Parsing(format!("request body: {e}")))
}

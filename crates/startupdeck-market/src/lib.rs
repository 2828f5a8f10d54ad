//! Market mapping endpoints: landscape analysis, competitors, market size,
//! trends, and customer personas.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use startupdeck_client::{ApiClient, Method};
use startupdeck_core::{ApiResponse, DeckError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketDepth {
    Basic,
    Comprehensive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendTimeframe {
    #[serde(rename = "1year")]
    OneYear,
    #[serde(rename = "3years")]
    ThreeYears,
    #[serde(rename = "5years")]
    FiveYears,
}

/// Payload for [`MarketApi::analyze`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMarketRequest {
    pub idea_id: String,
    pub industry: String,
    /// Regions to cover; the service treats an absent list as `["global"]`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub region: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<MarketDepth>,
}

impl AnalyzeMarketRequest {
    pub fn new(idea_id: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            idea_id: idea_id.into(),
            industry: industry.into(),
            region: Vec::new(),
            depth: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region.push(region.into());
        self
    }

    pub fn with_depth(mut self, depth: MarketDepth) -> Self {
        self.depth = Some(depth);
        self
    }
}

/// Payload for [`MarketApi::competitors`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorsRequest {
    pub idea_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_indirect: Option<bool>,
}

impl CompetitorsRequest {
    pub fn new(idea_id: impl Into<String>) -> Self {
        Self {
            idea_id: idea_id.into(),
            region: None,
            include_indirect: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn include_indirect(mut self) -> Self {
        self.include_indirect = Some(true);
        self
    }
}

/// Payload for [`MarketApi::market_size`].
#[derive(Debug, Clone, Serialize)]
pub struct MarketSizeRequest {
    pub industry: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
}

impl MarketSizeRequest {
    pub fn new(industry: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            region: region.into(),
            segment: None,
        }
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }
}

/// Payload for [`MarketApi::trends`].
#[derive(Debug, Clone, Serialize)]
pub struct TrendsRequest {
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<TrendTimeframe>,
}

impl TrendsRequest {
    pub fn new(industry: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
            timeframe: None,
        }
    }

    pub fn with_timeframe(mut self, timeframe: TrendTimeframe) -> Self {
        self.timeframe = Some(timeframe);
        self
    }
}

/// Market landscape for one idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAnalysis {
    pub id: String,
    pub idea_id: String,
    pub market_size: MarketSize,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub trends: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    pub created_at: String,
}

/// TAM/SAM/SOM estimates in dollars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSize {
    pub tam: f64,
    pub sam: f64,
    pub som: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_share: Option<f64>,
}

/// Typed wrapper over the `/market/*` endpoints.
pub struct MarketApi {
    client: Arc<ApiClient>,
}

impl MarketApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn analyze(
        &self,
        request: &AnalyzeMarketRequest,
    ) -> Result<ApiResponse<MarketAnalysis>, DeckError> {
        self.client.post("/market/analyze", to_body(request)?).await
    }

    pub async fn competitors(
        &self,
        request: &CompetitorsRequest,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .post("/market/competitors", to_body(request)?)
            .await
    }

    pub async fn market_size(
        &self,
        request: &MarketSizeRequest,
    ) -> Result<ApiResponse<Value>, DeckError> {
        self.client.post("/market/size", to_body(request)?).await
    }

    pub async fn trends(&self, request: &TrendsRequest) -> Result<ApiResponse<Value>, DeckError> {
        self.client.post("/market/trends", to_body(request)?).await
    }

    /// Generate customer personas for an idea. The idea id rides in the
    /// path; the call carries no body.
    pub async fn personas(&self, idea_id: &str) -> Result<ApiResponse<Value>, DeckError> {
        self.client
            .request(Method::Post, &format!("/market/personas/{idea_id}"), None)
            .await
    }
}

fn to_body<T: Serialize>(request: &T) -> Result<Value, DeckError> {
    serde_json::to_value(request).map_err(|e| DeckError::Parsing(format!("request body: {e}")))
}

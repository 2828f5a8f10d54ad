use std::sync::Arc;

use serde_json::json;
use startupdeck_client::{ApiClient, FakeBackend, Method};
use startupdeck_core::{ApiConfig, Environment, StaticSessionProvider};
use startupdeck_ideas::{AnalyzeIdeaRequest, IdeasApi};

fn api(backend: Arc<FakeBackend>) -> IdeasApi {
    let client = ApiClient::new(
        ApiConfig::new(Environment::Production),
        backend,
        Arc::new(StaticSessionProvider::with_token("tok", "user_1")),
    );
    IdeasApi::new(Arc::new(client))
}

fn analysis_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "idea": "A meal-planning app for shift workers",
        "analysis": {
            "viability": 7.5,
            "marketPotential": 8.0,
            "competitiveness": 6.0,
            "summary": "Strong niche demand.",
            "strengths": ["clear audience"],
            "weaknesses": ["crowded space"],
            "opportunities": ["B2B partnerships"],
            "threats": ["incumbent apps"]
        },
        "createdAt": "2025-06-01T10:00:00Z"
    })
}

#[tokio::test]
async fn analyze_posts_trimmed_camel_case_body() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": analysis_json("idea_1") }));
    let api = api(backend.clone());

    let request = AnalyzeIdeaRequest::new("  A meal-planning app for shift workers  ")
        .with_industry("foodtech")
        .with_target_market("shift workers")
        .with_budget(25_000);
    let resp = api.analyze(&request).await.unwrap();
    assert_eq!(resp.data.id, "idea_1");
    assert_eq!(resp.data.analysis.market_potential, 8.0);

    let requests = backend.requests().await;
    assert_eq!(requests[0].method, Method::Post);
    assert!(requests[0].url.ends_with("/ideas/analyze"));
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["idea"], "A meal-planning app for shift workers");
    assert_eq!(body["targetMarket"], "shift workers");
    assert_eq!(body["budget"], 25_000);
    assert!(body.get("timeline").is_none());
}

#[tokio::test]
async fn short_ideas_are_rejected_without_dispatch() {
    let backend = Arc::new(FakeBackend::new());
    let api = api(backend.clone());

    let request = AnalyzeIdeaRequest::new("too short");
    let err = api.analyze(&request).await.unwrap_err();
    assert!(err.to_string().contains("at least 10 characters"));
    assert!(backend.requests().await.is_empty());
}

#[tokio::test]
async fn whitespace_does_not_count_toward_the_minimum() {
    let request = AnalyzeIdeaRequest::new("   padded   ");
    assert!(request.validate().is_err());

    let request = AnalyzeIdeaRequest::new("My idea here");
    assert!(request.validate().is_ok());
}

#[tokio::test]
async fn history_builds_paged_query() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(
        200,
        &json!({
            "success": true,
            "data": [analysis_json("idea_1"), analysis_json("idea_2")],
            "meta": { "page": 2, "limit": 10, "total": 12 }
        }),
    );
    let api = api(backend.clone());

    let resp = api.history(2, 10).await.unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.meta.unwrap().page, Some(2));

    let requests = backend.requests().await;
    assert!(requests[0].url.ends_with("/ideas/history?page=2&limit=10"));
    assert_eq!(requests[0].method, Method::Get);
}

#[tokio::test]
async fn update_and_delete_target_the_analysis_path() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": analysis_json("idea_9") }));
    backend.push_json(200, &json!({ "success": true, "data": null }));
    let api = api(backend.clone());

    api.update_analysis("idea_9", json!({ "idea": "A refined description of it" }))
        .await
        .unwrap();
    api.delete_analysis("idea_9").await.unwrap();

    let requests = backend.requests().await;
    assert_eq!(requests[0].method, Method::Put);
    assert!(requests[0].url.ends_with("/ideas/analysis/idea_9"));
    assert_eq!(requests[1].method, Method::Delete);
    assert!(requests[1].url.ends_with("/ideas/analysis/idea_9"));
    assert!(requests[1].body.is_none());
}

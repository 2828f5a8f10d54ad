use std::sync::Arc;

use serde_json::json;
use startupdeck_client::{ApiClient, FakeBackend, Method};
use startupdeck_core::{ApiConfig, Environment, StaticSessionProvider};
use startupdeck_pitch::{
    Branding, ExportFormat, GeneratePitchDeckRequest, PitchApi, PitchTemplate,
};

fn api(backend: Arc<FakeBackend>) -> PitchApi {
    let client = ApiClient::new(
        ApiConfig::new(Environment::Production),
        backend,
        Arc::new(StaticSessionProvider::with_token("tok", "user_1")),
    );
    PitchApi::new(Arc::new(client))
}

fn deck_json() -> serde_json::Value {
    json!({
        "id": "deck_1",
        "ideaId": "idea_1",
        "slides": [
            { "type": "problem", "title": "Problem Statement", "content": "Current tools are fragmented.", "order": 1 },
            { "type": "solution", "title": "Solution Overview", "content": "One platform.", "order": 2 }
        ],
        "template": "investor",
        "branding": { "primaryColor": "#3b82f6", "companyName": "Acme" },
        "createdAt": "2025-06-05T15:00:00Z"
    })
}

#[tokio::test]
async fn generate_serializes_template_and_branding() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": deck_json() }));
    let api = api(backend.clone());

    let request = GeneratePitchDeckRequest::new("idea_1")
        .with_template(PitchTemplate::DemoDay)
        .with_slide("problem")
        .with_slide("solution")
        .with_branding(Branding {
            primary_color: Some("#3b82f6".into()),
            company_name: Some("Acme".into()),
            logo: None,
        });
    let resp = api.generate(&request).await.unwrap();
    assert_eq!(resp.data.slides.len(), 2);
    assert_eq!(resp.data.slides[0].slide_type, "problem");
    assert_eq!(resp.data.branding.company_name.as_deref(), Some("Acme"));

    let body = backend.requests().await[0].body.clone().unwrap();
    assert_eq!(body["ideaId"], "idea_1");
    assert_eq!(body["template"], "demo_day");
    assert_eq!(body["slides"], json!(["problem", "solution"]));
    assert_eq!(body["branding"]["primaryColor"], "#3b82f6");
    assert!(body["branding"].get("logo").is_none());
}

#[tokio::test]
async fn export_rides_the_query_string() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": { "url": "https://cdn/deck_1.pdf" } }));
    let api = api(backend.clone());

    api.export_deck("deck_1", ExportFormat::Pdf).await.unwrap();

    let requests = backend.requests().await;
    assert_eq!(requests[0].method, Method::Post);
    assert!(requests[0]
        .url
        .ends_with("/pitch/deck/deck_1/export?format=pdf"));
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn script_posts_duration() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": { "script": "..." } }));
    let api = api(backend.clone());

    api.script("deck_1", Some(5)).await.unwrap();

    let requests = backend.requests().await;
    assert!(requests[0].url.ends_with("/pitch/deck/deck_1/script"));
    assert_eq!(requests[0].body.as_ref().unwrap()["duration"], 5);
}

#[tokio::test]
async fn deck_and_analytics_are_gets() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": deck_json() }));
    backend.push_json(200, &json!({ "success": true, "data": { "views": 12 } }));
    let api = api(backend.clone());

    api.deck("deck_1").await.unwrap();
    api.deck_analytics("deck_1").await.unwrap();

    let requests = backend.requests().await;
    assert!(requests[0].url.ends_with("/pitch/deck/deck_1"));
    assert!(requests[1].url.ends_with("/pitch/deck/deck_1/analytics"));
    assert!(requests.iter().all(|r| r.method == Method::Get));
}

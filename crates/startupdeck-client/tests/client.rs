use std::sync::Arc;

use serde_json::{json, Value};
use startupdeck_client::{ApiClient, FakeBackend, Method, RawResponse};
use startupdeck_core::{
    AnonymousSession, ApiConfig, DeckError, Environment, StaticSessionProvider,
};

fn client_with(backend: Arc<FakeBackend>, sessions: Arc<StaticSessionProvider>) -> ApiClient {
    ApiClient::new(ApiConfig::new(Environment::Production), backend, sessions)
}

#[tokio::test]
async fn attaches_bearer_and_client_headers() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": null }));
    let sessions = Arc::new(StaticSessionProvider::with_token("tok_123", "user_1"));
    let client = client_with(backend.clone(), sessions);

    let _: startupdeck_core::ApiResponse<Value> =
        client.get("/analytics/dashboard").await.unwrap();

    let requests = backend.requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.url,
        "https://api.startupdeck.app/v1/analytics/dashboard"
    );
    assert_eq!(request.header("Authorization"), Some("Bearer tok_123"));
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    assert_eq!(request.header("X-Client"), Some("StartupDeck-Rust"));
    assert!(request.header("X-Version").is_some());
}

#[tokio::test]
async fn anonymous_calls_carry_no_auth_header() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": null }));
    let client = ApiClient::new(
        ApiConfig::new(Environment::Production),
        backend.clone(),
        Arc::new(AnonymousSession),
    );

    let _: startupdeck_core::ApiResponse<Value> = client.get("/pitch/templates").await.unwrap();

    let requests = backend.requests().await;
    assert_eq!(requests[0].header("Authorization"), None);
}

#[tokio::test]
async fn serializes_body_for_mutating_methods_only() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": null }));
    backend.push_json(200, &json!({ "success": true, "data": null }));
    let sessions = Arc::new(StaticSessionProvider::with_token("tok", "u"));
    let client = client_with(backend.clone(), sessions);

    let body = json!({ "idea": "an idea worth analyzing" });
    let _: startupdeck_core::ApiResponse<Value> =
        client.post("/ideas/analyze", body.clone()).await.unwrap();
    let _: startupdeck_core::ApiResponse<Value> = client
        .request(Method::Get, "/ideas/history", Some(body.clone()))
        .await
        .unwrap();

    let requests = backend.requests().await;
    assert_eq!(requests[0].body.as_ref(), Some(&body));
    // GET drops whatever body was handed in.
    assert!(requests[1].body.is_none());
}

#[tokio::test]
async fn error_body_message_is_surfaced_verbatim() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(404, &json!({ "message": "not found" }));
    let sessions = Arc::new(StaticSessionProvider::with_token("tok", "u"));
    let client = client_with(backend, sessions);

    let err = client
        .get::<Value>("/ideas/analysis/missing")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "not found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unparsable_error_body_falls_back_to_status() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(RawResponse::new(500, "<html>oops</html>"));
    let sessions = Arc::new(StaticSessionProvider::with_token("tok", "u"));
    let client = client_with(backend, sessions);

    let err = client.get::<Value>("/analytics/usage").await.unwrap_err();
    assert_eq!(err.to_string(), "API Error: 500");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn empty_error_message_falls_back_to_status() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(422, &json!({ "message": "" }));
    let sessions = Arc::new(StaticSessionProvider::with_token("tok", "u"));
    let client = client_with(backend, sessions);

    let err = client.get::<Value>("/features/roadmap/x").await.unwrap_err();
    assert_eq!(err.to_string(), "API Error: 422");
}

#[tokio::test]
async fn malformed_success_body_is_a_parsing_error() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_response(RawResponse::new(200, "not json"));
    let sessions = Arc::new(StaticSessionProvider::with_token("tok", "u"));
    let client = client_with(backend, sessions);

    let err = client.get::<Value>("/analytics/dashboard").await.unwrap_err();
    assert!(matches!(err, DeckError::Parsing(_)));
}

#[tokio::test]
async fn transport_errors_pass_through() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_error(DeckError::Timeout("30s elapsed".into()));
    let sessions = Arc::new(StaticSessionProvider::with_token("tok", "u"));
    let client = client_with(backend, sessions);

    let err = client.get::<Value>("/analytics/dashboard").await.unwrap_err();
    assert!(matches!(err, DeckError::Timeout(_)));
}

#[tokio::test]
async fn parses_typed_envelope_data() {
    #[derive(serde::Deserialize)]
    struct Stats {
        ideas: u32,
    }

    let backend = Arc::new(FakeBackend::new());
    backend.push_json(
        200,
        &json!({ "success": true, "data": { "ideas": 7 }, "meta": { "total": 7 } }),
    );
    let sessions = Arc::new(StaticSessionProvider::with_token("tok", "u"));
    let client = client_with(backend, sessions);

    let resp = client.get::<Stats>("/analytics/dashboard").await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.data.ideas, 7);
    assert_eq!(resp.meta.unwrap().total, Some(7));
}

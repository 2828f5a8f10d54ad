use std::sync::Arc;

use serde_json::json;
use startupdeck_client::{ApiClient, FakeBackend};
use startupdeck_core::{ApiConfig, Environment, StaticSessionProvider};
use startupdeck_tech::{
    BudgetLevel, MvpStackRequest, Platform, TechApi, TimelineRequest,
};

fn api(backend: Arc<FakeBackend>) -> TechApi {
    let client = ApiClient::new(
        ApiConfig::new(Environment::Production),
        backend,
        Arc::new(StaticSessionProvider::with_token("tok", "user_1")),
    );
    TechApi::new(Arc::new(client))
}

#[tokio::test]
async fn mvp_stack_uses_the_services_mixed_naming() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(
        200,
        &json!({
            "success": true,
            "data": {
                "id": "ts_1",
                "ideaId": "idea_1",
                "stack": {
                    "frontend": ["React", "Tailwind CSS"],
                    "backend": ["Node.js"],
                    "database": ["PostgreSQL"],
                    "hosting": ["AWS"],
                    "tools": ["Docker"]
                },
                "estimated_cost": { "development": 40000.0, "hosting": 200.0, "tools": 100.0, "total": 40300.0 },
                "timeline": "4 months",
                "createdAt": "2025-06-04T08:00:00Z"
            }
        }),
    );
    let api = api(backend.clone());

    let request = MvpStackRequest::new("idea_1", Platform::Web)
        .with_budget(BudgetLevel::Medium)
        .with_team_size(3);
    let resp = api.mvp_stack(&request).await.unwrap();
    assert_eq!(resp.data.stack.frontend[0], "React");
    assert_eq!(resp.data.estimated_cost.total, 40300.0);

    let body = backend.requests().await[0].body.clone().unwrap();
    // The mvp-stack endpoint expects camelCase ideaId but snake_case team_size.
    assert_eq!(body["ideaId"], "idea_1");
    assert_eq!(body["team_size"], 3);
    assert_eq!(body["platform"], "web");
    assert_eq!(body["budget"], "medium");
}

#[tokio::test]
async fn timeline_is_fully_camel_case() {
    let backend = Arc::new(FakeBackend::new());
    backend.push_json(200, &json!({ "success": true, "data": {} }));
    let api = api(backend.clone());

    let request = TimelineRequest::new(
        vec!["React".to_string(), "PostgreSQL".to_string()],
        vec!["auth".to_string()],
        4,
    );
    api.timeline(&request).await.unwrap();

    let body = backend.requests().await[0].body.clone().unwrap();
    assert_eq!(body["techStack"], json!(["React", "PostgreSQL"]));
    assert_eq!(body["teamSize"], 4);
}

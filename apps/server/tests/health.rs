use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use daylog_core::activities::{Activity, ActivityRepositoryTrait, ActivityService, NewActivity};
use daylog_core::errors::Result;
use daylog_server::{api::app_router, config::Config, AppState};
use std::sync::Arc;
use tower::ServiceExt;

struct EmptyRepository;

#[async_trait::async_trait]
impl ActivityRepositoryTrait for EmptyRepository {
    async fn create_activity(&self, _new_activity: NewActivity) -> Result<Activity> {
        Ok(Activity::default())
    }

    async fn get_activities(&self) -> Result<Vec<Activity>> {
        Ok(Vec::new())
    }

    async fn archive_activity(&self, _activity_id: &str) -> Result<()> {
        Ok(())
    }
}

fn build_test_router() -> axum::Router {
    let service = Arc::new(ActivityService::new(Arc::new(EmptyRepository)));
    let config = Config::from_env().unwrap();
    app_router(AppState::new(service), &config)
}

#[tokio::test]
async fn healthz_and_readyz_answer_ok() {
    let app = build_test_router();

    for uri in ["/api/healthz", "/api/readyz"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }
}

#[tokio::test]
async fn openapi_document_lists_the_activities_path() {
    let app = build_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/api/activities"].is_object());
    assert!(doc["paths"]["/api/activities/summary"].is_object());
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = build_test_router();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

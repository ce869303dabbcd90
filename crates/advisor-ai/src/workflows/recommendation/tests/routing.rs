use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use super::common::*;
use crate::workflows::recommendation::router::{current_handler, generate_handler};
use crate::workflows::recommendation::{recommendation_router, RecommendationService};

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("valid json body")
}

#[tokio::test]
async fn generate_handler_returns_the_ranked_shortlist() {
    let user = user();
    let (service, _cache) = build_service(
        vec![finance_tool(), generic_tool("Flow Desk")],
        vec![assessment_record(&user, cfo_profile(), cfo_context())],
    );

    let response = generate_handler::<MemoryCatalog, MemoryAssessments, MemoryRecommendations>(
        State(service),
        Path(user.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["user_id"], "user-42");
    assert_eq!(body["count"], 2);
    assert_eq!(body["recommendations"][0]["tool_name"], "Ledger Sense");
}

#[tokio::test]
async fn current_handler_reads_the_cache() {
    let user = user();
    let (service, _cache) = build_service(
        vec![finance_tool()],
        vec![assessment_record(&user, cfo_profile(), cfo_context())],
    );
    service.generate(&user).expect("seed the cache");

    let response = current_handler::<MemoryCatalog, MemoryAssessments, MemoryRecommendations>(
        State(service),
        Path(user.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["recommendations"][0]["category"], "finance");
}

#[tokio::test]
async fn handlers_fail_open_when_the_cache_is_unavailable() {
    let user = user();
    let service = Arc::new(RecommendationService::new(
        Arc::new(MemoryCatalog::with_items(vec![finance_tool()])),
        Arc::new(MemoryAssessments::with_records(vec![assessment_record(
            &user,
            cfo_profile(),
            cfo_context(),
        )])),
        Arc::new(UnavailableRecommendations),
        weights(),
    ));

    let response =
        current_handler::<MemoryCatalog, MemoryAssessments, UnavailableRecommendations>(
            State(service),
            Path(user.0.clone()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["recommendations"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn generate_without_a_profile_degrades_to_an_empty_list() {
    let (service, _cache) = build_service(vec![finance_tool()], Vec::new());

    let response = generate_handler::<MemoryCatalog, MemoryAssessments, MemoryRecommendations>(
        State(service),
        Path("user-without-history".to_string()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn generate_route_accepts_requests() {
    let user = user();
    let (service, _cache) = build_service(
        vec![finance_tool()],
        vec![assessment_record(&user, cfo_profile(), cfo_context())],
    );
    let router = recommendation_router(service);

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/recommendations/user-42/generate")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

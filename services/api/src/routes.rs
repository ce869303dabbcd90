use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

use advisor_ai::workflows::assessment::{assessment_router, AssessmentRepository, AssessmentService};
use advisor_ai::workflows::catalog::{catalog_router, CatalogRepository};
use advisor_ai::workflows::dashboard::{dashboard_router, DashboardService};
use advisor_ai::workflows::narrative::NarrativeGenerator;
use advisor_ai::workflows::recommendation::{
    recommendation_router, RecommendationRepository, RecommendationService,
};

use crate::infra::AppState;

/// Merge every workflow router with the operational endpoints.
pub(crate) fn with_advisor_routes<C, A, R, N>(
    catalog: Arc<C>,
    assessments: Arc<AssessmentService<A>>,
    recommendations: Arc<RecommendationService<C, A, R>>,
    dashboard: Arc<DashboardService<A, R, N>>,
) -> axum::Router
where
    C: CatalogRepository + 'static,
    A: AssessmentRepository + 'static,
    R: RecommendationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    axum::Router::new()
        .merge(catalog_router(catalog))
        .merge(assessment_router(assessments))
        .merge(recommendation_router(recommendations))
        .merge(dashboard_router(dashboard))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

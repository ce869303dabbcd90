use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::summary::DashboardService;
use crate::workflows::assessment::{AssessmentRepository, UserId};
use crate::workflows::narrative::NarrativeGenerator;
use crate::workflows::recommendation::RecommendationRepository;

/// Router builder exposing the per-user dashboard read.
pub fn dashboard_router<A, R, N>(service: Arc<DashboardService<A, R, N>>) -> Router
where
    A: AssessmentRepository + 'static,
    R: RecommendationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    Router::new()
        .route("/api/v1/dashboard/:user_id", get(overview_handler::<A, R, N>))
        .with_state(service)
}

pub(crate) async fn overview_handler<A, R, N>(
    State(service): State<Arc<DashboardService<A, R, N>>>,
    Path(user_id): Path<String>,
) -> Response
where
    A: AssessmentRepository + 'static,
    R: RecommendationRepository + 'static,
    N: NarrativeGenerator + 'static,
{
    match service.overview(&UserId(user_id)) {
        Ok(overview) => (StatusCode::OK, axum::Json(overview)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tracing::warn;

use super::domain::Recommendation;
use super::repository::RecommendationRepository;
use super::service::{RecommendationService, RecommendationServiceError};
use crate::workflows::assessment::{AssessmentRepository, UserId};
use crate::workflows::catalog::CatalogRepository;

/// Router builder exposing shortlist regeneration and reads.
pub fn recommendation_router<C, A, R>(service: Arc<RecommendationService<C, A, R>>) -> Router
where
    C: CatalogRepository + 'static,
    A: AssessmentRepository + 'static,
    R: RecommendationRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/recommendations/:user_id/generate",
            post(generate_handler::<C, A, R>),
        )
        .route(
            "/api/v1/recommendations/:user_id",
            get(current_handler::<C, A, R>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct RecommendationListView {
    pub(crate) user_id: String,
    pub(crate) count: usize,
    pub(crate) recommendations: Vec<Recommendation>,
}

pub(crate) async fn generate_handler<C, A, R>(
    State(service): State<Arc<RecommendationService<C, A, R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    C: CatalogRepository + 'static,
    A: AssessmentRepository + 'static,
    R: RecommendationRepository + 'static,
{
    let user = UserId(user_id);
    match service.generate(&user) {
        Ok(recommendations) => list_response(user, recommendations),
        // Fail open: a broken scoring run degrades to "no recommendations"
        // instead of blocking the dashboard.
        Err(error) => degraded_response(user, "generate", error),
    }
}

pub(crate) async fn current_handler<C, A, R>(
    State(service): State<Arc<RecommendationService<C, A, R>>>,
    Path(user_id): Path<String>,
) -> Response
where
    C: CatalogRepository + 'static,
    A: AssessmentRepository + 'static,
    R: RecommendationRepository + 'static,
{
    let user = UserId(user_id);
    match service.current(&user) {
        Ok(recommendations) => list_response(user, recommendations),
        Err(error) => degraded_response(user, "current", error),
    }
}

fn list_response(user: UserId, recommendations: Vec<Recommendation>) -> Response {
    let view = RecommendationListView {
        user_id: user.0,
        count: recommendations.len(),
        recommendations,
    };
    (StatusCode::OK, axum::Json(view)).into_response()
}

fn degraded_response(user: UserId, operation: &str, error: RecommendationServiceError) -> Response {
    warn!(user_id = %user.0, %operation, error = %error, "recommendation lookup degraded to empty list");
    list_response(user, Vec::new())
}

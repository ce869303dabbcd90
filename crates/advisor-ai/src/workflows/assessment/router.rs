use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::json;

use super::domain::{AssessmentKind, AssessmentRecord, AssessmentSubmission, ProfileSnapshot, UserId};
use super::repository::AssessmentRepository;
use super::service::{AssessmentService, AssessmentServiceError};
use crate::workflows::store::StoreError;

/// Router builder exposing wizard submission and latest-assessment reads.
pub fn assessment_router<A>(service: Arc<AssessmentService<A>>) -> Router
where
    A: AssessmentRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(submit_handler::<A>))
        .route(
            "/api/v1/assessments/:user_id/:kind/latest",
            get(latest_handler::<A>),
        )
        .with_state(service)
}

/// Sanitized representation of a stored assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub assessment_id: String,
    pub user_id: String,
    pub kind: &'static str,
    pub profile: ProfileSnapshot,
    pub readiness: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    pub submitted_at: NaiveDateTime,
}

impl AssessmentView {
    pub(crate) fn from_record(record: AssessmentRecord) -> Self {
        Self {
            assessment_id: record.id.0,
            user_id: record.user_id.0,
            kind: record.kind.label(),
            readiness: record.context.readiness,
            profile: record.profile,
            score: record.score,
            submitted_at: record.submitted_at,
        }
    }
}

pub(crate) async fn submit_handler<A>(
    State(service): State<Arc<AssessmentService<A>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    A: AssessmentRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = AssessmentView::from_record(record);
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(AssessmentServiceError::Intake(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn latest_handler<A>(
    State(service): State<Arc<AssessmentService<A>>>,
    Path((user_id, kind)): Path<(String, String)>,
) -> Response
where
    A: AssessmentRepository + 'static,
{
    let Some(kind) = AssessmentKind::parse(&kind) else {
        let payload = json!({ "error": format!("unknown assessment kind '{kind}'") });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    };

    match service.latest(&UserId(user_id.clone()), kind) {
        Ok(Some(record)) => {
            let view = AssessmentView::from_record(record);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Ok(None) => {
            let payload = json!({
                "user_id": user_id,
                "kind": kind.label(),
                "error": "no assessment of this kind",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(AssessmentServiceError::Store(StoreError::Unavailable(reason))) => {
            let payload = json!({ "error": format!("store unavailable: {reason}") });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

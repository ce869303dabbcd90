use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{CatalogItem, ToolId};
use super::import::CatalogCsvImporter;
use super::repository::CatalogRepository;
use crate::workflows::store::StoreError;

/// Administrative CRUD surface over the tool catalog.
pub fn catalog_router<C>(repository: Arc<C>) -> Router
where
    C: CatalogRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/catalog/tools",
            get(list_handler::<C>).post(create_handler::<C>),
        )
        .route(
            "/api/v1/catalog/tools/:tool_id",
            get(fetch_handler::<C>)
                .put(update_handler::<C>)
                .delete(delete_handler::<C>),
        )
        .route("/api/v1/catalog/import", post(import_handler::<C>))
        .with_state(repository)
}

pub(crate) async fn list_handler<C>(State(repository): State<Arc<C>>) -> Response
where
    C: CatalogRepository + 'static,
{
    match repository.list_active() {
        Ok(items) => (StatusCode::OK, axum::Json(items)).into_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn create_handler<C>(
    State(repository): State<Arc<C>>,
    axum::Json(item): axum::Json<CatalogItem>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    match repository.insert(item) {
        Ok(stored) => (StatusCode::CREATED, axum::Json(stored)).into_response(),
        Err(StoreError::Conflict) => {
            let payload = json!({ "error": "tool already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn fetch_handler<C>(
    State(repository): State<Arc<C>>,
    Path(tool_id): Path<String>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    match repository.fetch(&ToolId(tool_id)) {
        Ok(Some(item)) => (StatusCode::OK, axum::Json(item)).into_response(),
        Ok(None) => not_found_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn update_handler<C>(
    State(repository): State<Arc<C>>,
    Path(tool_id): Path<String>,
    axum::Json(mut item): axum::Json<CatalogItem>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    // The path segment is authoritative for the identifier.
    item.id = ToolId(tool_id);
    match repository.update(item.clone()) {
        Ok(()) => (StatusCode::OK, axum::Json(item)).into_response(),
        Err(StoreError::NotFound) => not_found_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn delete_handler<C>(
    State(repository): State<Arc<C>>,
    Path(tool_id): Path<String>,
) -> Response
where
    C: CatalogRepository + 'static,
{
    match repository.remove(&ToolId(tool_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(StoreError::NotFound) => not_found_response(),
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn import_handler<C>(State(repository): State<Arc<C>>, body: String) -> Response
where
    C: CatalogRepository + 'static,
{
    let items = match CatalogCsvImporter::from_reader(body.as_bytes()) {
        Ok(items) => items,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    let mut imported = 0usize;
    let mut skipped = 0usize;
    for item in items {
        match repository.insert(item) {
            Ok(_) => imported += 1,
            // Existing tools stay untouched; re-imports are additive.
            Err(StoreError::Conflict) => skipped += 1,
            Err(error) => {
                // Rows already written stay; tell the caller how far the
                // import got so a retry can account for them.
                let payload = json!({
                    "error": error.to_string(),
                    "imported": imported,
                    "skipped": skipped,
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response();
            }
        }
    }

    let payload = json!({ "imported": imported, "skipped": skipped });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn not_found_response() -> Response {
    let payload = json!({ "error": "tool not found" });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn store_error_response(error: StoreError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

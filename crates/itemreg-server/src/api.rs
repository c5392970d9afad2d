use std::sync::{Arc, MutexGuard};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use itemreg_store::{Item, ItemStore, NewItem, ValidationError};
use serde::Deserialize;

use crate::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

// ── Page handler ────────────────────────────────────────────────────

pub async fn index() -> impl IntoResponse {
    ([(header::CACHE_CONTROL, "no-cache")], Html(INDEX_HTML))
}

// ── API types ───────────────────────────────────────────────────────

/// Raw create-item body as it arrives off the wire. Both fields optional;
/// the missing-name case is a validation failure, not a parse failure.
#[derive(Deserialize)]
pub struct CreateItemRequest {
    name: Option<String>,
    description: Option<String>,
}

/// Request-boundary failure.
///
/// Both kinds map to a 500 response carrying the raw error text. Validation
/// arguably deserves a 400, but the service keeps the single generic status
/// the callers already depend on.
pub(crate) enum ApiError {
    Validation(ValidationError),
    Store(String),
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Store(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": self.message()})),
        )
            .into_response()
    }
}

// ── API handlers ────────────────────────────────────────────────────

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "OK", "message": "Server is healthy"}))
}

pub async fn list_items<S>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Item>>, ApiError>
where
    S: ItemStore + Send + 'static,
{
    let store = lock_store(&state)?;
    let items = store.find_all().map_err(store_err)?;
    Ok(Json(items))
}

pub async fn create_item<S>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
    S: ItemStore + Send + 'static,
{
    // Parsed by hand so a malformed body reports through the same generic
    // error shape as every other failure.
    let req: CreateItemRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::Store(e.to_string()))?;
    let new = NewItem::from_parts(req.name, req.description).map_err(ApiError::Validation)?;

    let mut store = lock_store(&state)?;
    let item = store.insert(&new).map_err(store_err)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn delete_item<S>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    S: ItemStore + Send + 'static,
{
    // The id is parsed here rather than by the router so a garbage id gets
    // the same error shape instead of a bare 400 rejection.
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::Store(format!("invalid item id: {id}")))?;

    let mut store = lock_store(&state)?;
    // No existence check: deleting an absent id is a success.
    store.delete(id).map_err(store_err)?;
    Ok(Json(serde_json::json!({"message": "Item deleted"})))
}

// ── Helpers ─────────────────────────────────────────────────────────

fn lock_store<S>(state: &AppState<S>) -> Result<MutexGuard<'_, S>, ApiError> {
    state
        .store
        .lock()
        .map_err(|_| ApiError::Store("store lock poisoned".into()))
}

fn store_err<E: std::fmt::Display>(e: E) -> ApiError {
    ApiError::Store(e.to_string())
}

//! Item catalog routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use rab_shared::AppError;
use serde::Deserialize;
use serde_json::json;

use crate::{AppState, error::ApiError};

/// Creates the catalog routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(list_catalog))
        .route("/catalog/lookup", get(lookup_catalog))
}

/// Query parameters for a catalog lookup.
#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    /// Item name, matched case- and whitespace-insensitively.
    pub name: String,
}

/// GET `/catalog` - Remembered items, most recently used first.
async fn list_catalog(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "entries": state.catalog.list() }))
}

/// GET `/catalog/lookup?name=` - Remembered price for one item name.
async fn lookup_catalog(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .catalog
        .lookup(&query.name)
        .map(Json)
        .ok_or_else(|| ApiError::from(AppError::NotFound(format!("Catalog entry {:?}", query.name))))
}

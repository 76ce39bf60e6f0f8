//! Category and item editing routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
};
use rab_core::budget::{Category, Item, ItemType};
use rab_core::input::coerce_json_number;
use rab_core::project::{CategoryPreset, ItemPatch, ProjectError};
use rab_shared::types::{CategoryId, ItemId, ProjectId};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the category and item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects/{project_id}/categories", post(create_category))
        .route(
            "/projects/{project_id}/categories/{category_id}",
            patch(rename_category).delete(delete_category),
        )
        .route(
            "/projects/{project_id}/categories/{category_id}/items",
            post(create_item),
        )
        .route(
            "/projects/{project_id}/categories/{category_id}/items/{item_id}",
            patch(update_item).delete(delete_item),
        )
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for adding a category.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name. Blank falls back to "Bagian Baru".
    pub name: Option<String>,
    /// Quick-add template. Takes precedence over `name`.
    pub preset: Option<CategoryPreset>,
}

/// Request body for renaming a category.
#[derive(Debug, Deserialize)]
pub struct RenameCategoryRequest {
    /// New name.
    pub name: String,
}

/// Request body for adding an item.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    /// Item classification, `perangkat` when omitted.
    #[serde(default, rename = "type")]
    pub item_type: ItemType,
}

/// Request body for editing an item, as sent by the builder's form controls.
///
/// Numeric fields accept numbers or numeric text. Unreadable values count as zero.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPatchRequest {
    /// New name.
    pub name: Option<String>,
    /// New unit.
    pub unit: Option<String>,
    /// New quantity.
    pub quantity: Option<Value>,
    /// New cost price per unit.
    pub unit_price: Option<Value>,
    /// New markup percentage.
    pub margin: Option<Value>,
    /// New classification.
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    /// New vendor name.
    pub vendor_name: Option<String>,
    /// New source link.
    pub source_url: Option<String>,
}

impl From<ItemPatchRequest> for ItemPatch {
    fn from(request: ItemPatchRequest) -> Self {
        Self {
            name: request.name,
            unit: request.unit,
            quantity: request.quantity.as_ref().map(coerce_json_number),
            unit_price: request.unit_price.as_ref().map(coerce_json_number),
            margin: request.margin.as_ref().map(coerce_json_number),
            item_type: request.item_type,
            vendor_name: request.vendor_name,
            source_url: request.source_url,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/projects/{project_id}/categories` - Append a category.
async fn create_category(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
    Json(payload): Json<CreateCategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let category = state
        .store
        .update(project_id, |project| {
            let category_id = match payload.preset {
                Some(preset) => project.add_preset_category(preset),
                None => project.add_category(payload.name.as_deref()),
            };
            project.category(category_id).cloned()
        })
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    info!(
        project_id = %project_id,
        category_id = %category.id,
        name = %category.name,
        "Category added"
    );
    Ok((StatusCode::CREATED, Json(category)))
}

/// PATCH `/projects/{project_id}/categories/{category_id}` - Rename a category.
async fn rename_category(
    State(state): State<AppState>,
    Path((project_id, category_id)): Path<(ProjectId, CategoryId)>,
    Json(payload): Json<RenameCategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .store
        .update(project_id, |project| {
            project.rename_category(category_id, payload.name)?;
            project.category(category_id).cloned()
        })
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    Ok(Json(category))
}

/// DELETE `/projects/{project_id}/categories/{category_id}` - Remove a category and its items.
async fn delete_category(
    State(state): State<AppState>,
    Path((project_id, category_id)): Path<(ProjectId, CategoryId)>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .store
        .update(project_id, |project| project.delete_category(category_id))
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    info!(
        project_id = %project_id,
        category_id = %category_id,
        items = removed.items.len(),
        "Category deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// POST `/projects/{project_id}/categories/{category_id}/items` - Append a placeholder item.
async fn create_item(
    State(state): State<AppState>,
    Path((project_id, category_id)): Path<(ProjectId, CategoryId)>,
    payload: Option<Json<CreateItemRequest>>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.unwrap_or_default();
    let item = state
        .store
        .update(project_id, |project| {
            let item_id = project.add_item(category_id, payload.item_type)?;
            project.item(category_id, item_id).cloned()
        })
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    info!(
        project_id = %project_id,
        category_id = %category_id,
        item_id = %item.id,
        "Item added"
    );
    Ok((StatusCode::CREATED, Json(item)))
}

/// PATCH `/projects/{project_id}/categories/{category_id}/items/{item_id}` - Edit item fields.
async fn update_item(
    State(state): State<AppState>,
    Path((project_id, category_id, item_id)): Path<(ProjectId, CategoryId, ItemId)>,
    Json(payload): Json<ItemPatchRequest>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .store
        .update(project_id, |project| {
            project
                .update_item(category_id, item_id, payload.into())
                .cloned()
        })
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    Ok(Json(item))
}

/// DELETE `/projects/{project_id}/categories/{category_id}/items/{item_id}` - Remove an item.
async fn delete_item(
    State(state): State<AppState>,
    Path((project_id, category_id, item_id)): Path<(ProjectId, CategoryId, ItemId)>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .update(project_id, |project| {
            project.delete_item(category_id, item_id)?;
            Ok::<_, ProjectError>(())
        })
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    info!(project_id = %project_id, item_id = %item_id, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}

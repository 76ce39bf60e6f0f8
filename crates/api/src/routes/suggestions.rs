//! Routes accepting AI-drafted content.
//!
//! The hosted model is called by the client. These routes only receive its
//! raw text answer, validate it, and apply it all-or-nothing.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use rab_core::budget::Item;
use rab_core::suggestion::{
    BoqSuggestionRequest, PriceSuggestion, PriceSuggestionRequest, SuggestionError,
    parse_boq_suggestion, parse_price_suggestion,
};
use rab_shared::types::{CategoryId, ItemId, ProjectId};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::{AppState, error::ApiError};

/// Creates the suggestion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects/{project_id}/suggestions", post(apply_boq_suggestion))
        .route(
            "/projects/{project_id}/categories/{category_id}/items/{item_id}/price",
            post(apply_price),
        )
}

/// Request body carrying a drafted category tree.
#[derive(Debug, Deserialize)]
pub struct BoqSuggestionBody {
    /// Raw model output.
    pub raw: String,
    /// Project type the draft was requested for. Saved on the project when given.
    pub project_type: Option<String>,
    /// Specifications the draft was requested for.
    pub specifications: Option<String>,
}

/// Request body carrying a price lookup answer.
#[derive(Debug, Deserialize)]
pub struct PriceSuggestionBody {
    /// Raw model output.
    pub raw: String,
}

/// Response for an applied price lookup.
#[derive(Debug, Serialize)]
pub struct PriceSuggestionResponse {
    /// The item after the update.
    pub item: Item,
    /// The accepted suggestion.
    pub suggestion: PriceSuggestion,
}

fn rejected(project_id: ProjectId, error: SuggestionError) -> ApiError {
    warn!(project_id = %project_id, error = %error, "Suggestion rejected");
    error.into()
}

/// POST `/projects/{project_id}/suggestions` - Append a drafted category tree.
///
/// Nothing is applied unless the whole draft validates.
async fn apply_boq_suggestion(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
    Json(payload): Json<BoqSuggestionBody>,
) -> Result<impl IntoResponse, ApiError> {
    let request = payload
        .project_type
        .as_deref()
        .map(|project_type| {
            BoqSuggestionRequest::new(
                project_type,
                payload.specifications.as_deref().unwrap_or_default(),
            )
        })
        .transpose()
        .map_err(|e| rejected(project_id, e))?;

    let categories = parse_boq_suggestion(&payload.raw).map_err(|e| rejected(project_id, e))?;

    let (added, project) = state
        .store
        .update(project_id, |project| {
            if let Some(request) = request {
                project.project_type = request.project_type;
                project.specifications = request.specifications;
            }
            let added = project.append_categories(categories);
            Ok::<_, ApiError>((added, project.clone()))
        })
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    info!(project_id = %project_id, categories = added, "Suggestion applied");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "added": added, "project": project })),
    ))
}

/// POST `/projects/{project_id}/categories/{category_id}/items/{item_id}/price` -
/// Apply a price lookup to an item and remember the price in the catalog.
async fn apply_price(
    State(state): State<AppState>,
    Path((project_id, category_id, item_id)): Path<(ProjectId, CategoryId, ItemId)>,
    Json(payload): Json<PriceSuggestionBody>,
) -> Result<Json<PriceSuggestionResponse>, ApiError> {
    let project = state
        .store
        .get(project_id)
        .ok_or_else(|| ApiError::project_not_found(project_id))?;
    let item = project.item(category_id, item_id)?;
    PriceSuggestionRequest::for_item(item).map_err(|e| rejected(project_id, e))?;

    let suggestion = parse_price_suggestion(&payload.raw).map_err(|e| rejected(project_id, e))?;

    let item = state
        .store
        .update(project_id, |project| {
            project
                .apply_price_suggestion(category_id, item_id, &suggestion)
                .cloned()
        })
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    if let Some(entry) = state.catalog.record(&item) {
        info!(slug = %entry.slug, "Catalog entry recorded");
    }
    info!(
        project_id = %project_id,
        item_id = %item_id,
        price = %suggestion.suggested_price,
        "Price suggestion applied"
    );

    Ok(Json(PriceSuggestionResponse { item, suggestion }))
}

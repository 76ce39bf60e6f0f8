//! Project management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, Utc};
use rab_core::budget::{BudgetEngine, Project, types::DEFAULT_PROJECT_TITLE};
use rab_core::project::DocumentPatch;
use rab_core::report::ReportService;
use rab_shared::types::{Money, ProjectId};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use super::tax::TaxQuery;
use crate::{AppState, error::ApiError};

/// Creates the project routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{project_id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/{project_id}/summary", get(get_summary))
        .route("/projects/{project_id}/report", get(get_report))
}

// ============================================================================
// Response Types
// ============================================================================

/// One row of the project list.
#[derive(Debug, Serialize)]
pub struct ProjectListEntry {
    /// Project ID.
    pub id: ProjectId,
    /// Project title.
    pub title: String,
    /// Kind of project.
    pub project_type: String,
    /// Number of categories.
    pub category_count: usize,
    /// Number of items across all categories.
    pub item_count: usize,
    /// Grand total under the default tax settings, formatted.
    pub grand_total: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/projects` - List projects, most recently updated first.
async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    let projects: Vec<ProjectListEntry> = state
        .store
        .list()
        .into_iter()
        .map(|project| {
            let summary = BudgetEngine::summarize(&project, &state.tax);
            ProjectListEntry {
                id: project.id,
                category_count: project.categories.len(),
                item_count: project.item_count(),
                grand_total: Money::new(summary.grand_total, state.currency).format(),
                title: project.title,
                project_type: project.project_type,
                updated_at: project.updated_at,
            }
        })
        .collect();

    Json(json!({ "projects": projects }))
}

/// POST `/projects` - Start a new project.
async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<DocumentPatch>,
) -> impl IntoResponse {
    let mut project = Project::new(DEFAULT_PROJECT_TITLE);
    let blank_title = payload.title.as_deref().is_some_and(|t| t.trim().is_empty());
    project.update_document(payload);
    if blank_title {
        DEFAULT_PROJECT_TITLE.clone_into(&mut project.title);
    }

    info!(project_id = %project.id, title = %project.title, "Project created");
    state.store.insert(project.clone());

    (StatusCode::CREATED, Json(project))
}

/// GET `/projects/{project_id}` - Full project tree.
async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> Result<Json<Project>, ApiError> {
    state
        .store
        .get(project_id)
        .map(Json)
        .ok_or_else(|| ApiError::project_not_found(project_id))
}

/// PUT `/projects/{project_id}` - Update title, project type and letterhead.
async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
    Json(payload): Json<DocumentPatch>,
) -> Result<Json<Project>, ApiError> {
    let project = state
        .store
        .update(project_id, |project| {
            project.update_document(payload);
            Ok::<_, ApiError>(project.clone())
        })
        .ok_or_else(|| ApiError::project_not_found(project_id))??;

    info!(project_id = %project_id, "Project updated");
    Ok(Json(project))
}

/// DELETE `/projects/{project_id}` - Remove a project.
async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> Result<StatusCode, ApiError> {
    state
        .store
        .delete(project_id)
        .ok_or_else(|| ApiError::project_not_found(project_id))?;

    info!(project_id = %project_id, "Project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET `/projects/{project_id}/summary` - Run the budget engine.
///
/// Tax settings default to the server configuration; query parameters
/// override individual fields.
async fn get_summary(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
    Query(query): Query<TaxQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state
        .store
        .get(project_id)
        .ok_or_else(|| ApiError::project_not_found(project_id))?;
    let tax = query.resolve(state.tax)?;

    Ok(Json(BudgetEngine::summarize(&project, &tax)))
}

/// GET `/projects/{project_id}/report` - Printable RAB layout.
async fn get_report(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
    Query(query): Query<TaxQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let project = state
        .store
        .get(project_id)
        .ok_or_else(|| ApiError::project_not_found(project_id))?;
    let tax = query.resolve(state.tax)?;

    Ok(Json(ReportService::generate_rab(
        &project,
        &tax,
        state.currency,
    )))
}

//! Mapping of domain errors onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rab_core::budget::LimitError;
use rab_core::project::ProjectError;
use rab_core::suggestion::SuggestionError;
use rab_shared::{AppError, types::ProjectId};
use serde_json::json;

/// Error returned by handlers, rendered as `{ "error": code, "message": text }`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// The project does not exist in the store.
    #[must_use]
    pub fn project_not_found(id: ProjectId) -> Self {
        Self(AppError::NotFound(format!("Project {id}")))
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<ProjectError> for ApiError {
    fn from(error: ProjectError) -> Self {
        let message = error.to_string();
        Self(match error {
            ProjectError::CategoryNotFound(_) | ProjectError::ItemNotFound(_) => {
                AppError::NotFound(message)
            }
            ProjectError::NegativeQuantity
            | ProjectError::NegativeUnitPrice
            | ProjectError::Limit(_) => AppError::Validation(message),
        })
    }
}

impl From<LimitError> for ApiError {
    fn from(error: LimitError) -> Self {
        Self(AppError::Validation(error.to_string()))
    }
}

impl From<SuggestionError> for ApiError {
    fn from(error: SuggestionError) -> Self {
        let message = error.to_string();
        match error {
            SuggestionError::EmptyResponse
            | SuggestionError::InvalidJson(_)
            | SuggestionError::SchemaMismatch(_) => Self(AppError::MalformedResponse(message)),
            SuggestionError::MissingProjectType => Self(AppError::Validation(message)),
            SuggestionError::UnspecificItemName(_) => Self(AppError::BusinessRule(message)),
            SuggestionError::Project(inner) => inner.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": self.0.to_string()
            })),
        )
            .into_response()
    }
}

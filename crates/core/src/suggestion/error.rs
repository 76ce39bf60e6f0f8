//! Suggestion errors.

use thiserror::Error;

use crate::project::ProjectError;

/// Errors raised while preparing a suggestion request or accepting its response.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SuggestionError {
    /// The service returned nothing usable.
    #[error("AI response is empty")]
    EmptyResponse,

    /// The response is not JSON.
    #[error("AI response is not valid JSON: {0}")]
    InvalidJson(String),

    /// The response is JSON but not in the expected shape.
    #[error("AI response does not match the expected shape: {0}")]
    SchemaMismatch(String),

    /// A BoQ draft needs a project type.
    #[error("Project type is required")]
    MissingProjectType,

    /// The item still has a placeholder or empty name.
    #[error("Item name is not specific enough for a price lookup: {0:?}")]
    UnspecificItemName(String),

    /// The target of the suggestion does not exist.
    #[error(transparent)]
    Project(#[from] ProjectError),
}

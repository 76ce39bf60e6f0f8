//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod catalog;
pub mod health;
pub mod items;
pub mod projects;
pub mod suggestions;
pub mod summaries;
pub mod tax;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(summaries::routes())
        .merge(projects::routes())
        .merge(items::routes())
        .merge(suggestions::routes())
        .merge(catalog::routes())
}

#[cfg(test)]
pub(crate) mod test_support;

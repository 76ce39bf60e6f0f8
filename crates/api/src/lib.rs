//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the budget engine
//! - An in-memory project store
//! - Error-to-response mapping

pub mod error;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use rab_core::budget::TaxConfig;
use rab_core::catalog::ItemCatalog;
use rab_shared::types::Currency;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use store::ProjectStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Saved projects.
    pub store: Arc<ProjectStore>,
    /// Remembered item prices.
    pub catalog: Arc<ItemCatalog>,
    /// Tax settings used when a request does not override them.
    pub tax: TaxConfig,
    /// Currency used for formatted amounts.
    pub currency: Currency,
}

impl AppState {
    /// Creates state with an empty store and catalog.
    #[must_use]
    pub fn new(tax: TaxConfig, currency: Currency) -> Self {
        Self {
            store: Arc::new(ProjectStore::new()),
            catalog: Arc::new(ItemCatalog::new()),
            tax,
            currency,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TaxConfig::default(), Currency::default())
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

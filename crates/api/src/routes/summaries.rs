//! Stateless summary endpoint.

use axum::{Json, Router, extract::State, routing::post};
use rab_core::budget::{BudgetEngine, BudgetSummary, Project};
use serde::Deserialize;

use super::tax::TaxOverrides;
use crate::{AppState, error::ApiError};

/// Creates the summary routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/summaries", post(summarize))
}

/// Request body for a one-off summary.
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Project tree to price. It is not saved.
    pub project: Project,
    /// Overrides on top of the server's tax settings.
    #[serde(default)]
    pub tax: TaxOverrides,
}

/// POST `/summaries` - Price a project tree without storing it.
///
/// Items must pass the same checks as the item routes.
async fn summarize(
    State(state): State<AppState>,
    Json(payload): Json<SummaryRequest>,
) -> Result<Json<BudgetSummary>, ApiError> {
    payload.project.check_items()?;
    let tax = payload.tax.resolve(state.tax)?;
    Ok(Json(BudgetEngine::summarize(&payload.project, &tax)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{call, seeded_state};
    use axum::http::{Method, StatusCode};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[tokio::test]
    async fn test_summary_is_not_stored() {
        let (state, ids) = seeded_state();
        let project = state.store.get(ids.project).unwrap();
        state.store.delete(ids.project);

        let (status, body) = call(
            &state,
            Method::POST,
            "/summaries",
            Some(json!({ "project": project, "tax": { "vat_rate": "12" } })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let grand_total: Decimal = body["grand_total"].as_str().unwrap().parse().unwrap();
        // 756.000 base plus 12% PPN
        assert_eq!(grand_total, dec!(846720));
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let state = crate::AppState::default();
        let (status, _) = call(&state, Method::POST, "/summaries", Some(json!({ "tax": {} }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_negative_item_values_are_rejected() {
        let (state, _) = seeded_state();
        let mut project = serde_json::to_value(state.store.list().remove(0)).unwrap();

        project["categories"][0]["items"][0]["quantity"] = json!("-5");
        let (status, body) = call(
            &state,
            Method::POST,
            "/summaries",
            Some(json!({ "project": project.clone() })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");

        project["categories"][0]["items"][0]["quantity"] = json!("2");
        project["categories"][0]["items"][0]["unit_price"] = json!("-100");
        let (status, _) = call(
            &state,
            Method::POST,
            "/summaries",
            Some(json!({ "project": project })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_item_values_are_rejected() {
        let (state, _) = seeded_state();
        let mut project = serde_json::to_value(state.store.list().remove(0)).unwrap();
        project["categories"][0]["items"][0]["quantity"] = json!("1e15");
        project["categories"][0]["items"][0]["unit_price"] = json!("1e15");

        let (status, body) = call(
            &state,
            Method::POST,
            "/summaries",
            Some(json!({ "project": project, "tax": { "vat_rate": 12 } })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "VALIDATION_ERROR");
    }
}

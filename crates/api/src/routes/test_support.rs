//! Helpers for route tests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use rab_core::budget::{Category, Item, ItemType, Project};
use rab_shared::types::{CategoryId, ItemId, ProjectId};
use rust_decimal_macros::dec;
use serde_json::Value;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Ids of the seeded project tree.
pub(crate) struct SeededIds {
    pub project: ProjectId,
    pub category: CategoryId,
    pub goods: ItemId,
    pub labor: ItemId,
}

/// State holding one project: a 2 × 100.000 device at 10% margin and a
/// 500.000 labor line. Grand total under default taxes is Rp 839.160.
pub(crate) fn seeded_state() -> (AppState, SeededIds) {
    let state = AppState::default();

    let goods = Item::new("Switch 24 Port", "Unit", ItemType::Perangkat)
        .priced(dec!(2), dec!(100000))
        .with_margin(dec!(10));
    let labor = Item::new("Jasa Instalasi", "Lot", ItemType::Jasa).priced(dec!(1), dec!(500000));
    let category = Category::new("Perangkat Utama")
        .with_item(goods.clone())
        .with_item(labor.clone());

    let mut project = Project::new("Jaringan Kantor");
    let ids = SeededIds {
        project: project.id,
        category: category.id,
        goods: goods.id,
        labor: labor.id,
    };
    project.categories.push(category);
    state.store.insert(project);

    (state, ids)
}

/// Sends one request through the full router. `uri` is relative to `/api/v1`.
pub(crate) async fn call(
    state: &AppState,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(format!("/api/v1{uri}"))
        .header(CONTENT_TYPE, "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = create_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

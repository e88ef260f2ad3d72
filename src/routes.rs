//! Route wiring: resource routes under the `/api` prefix, plus unprefixed
//! operational routes and the CORS layer.

use crate::handlers::{
    create_contact_message, create_import_request, create_listing, create_status, get_listing,
    list_status, search_listings,
};
use crate::response::Message;
use crate::state::AppState;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

async fn root() -> Json<Message> {
    Json(Message {
        message: "Hello World",
    })
}

/// Resource routes, mounted under `/api` by the caller.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/status", get(list_status).post(create_status))
        .route("/listings", get(search_listings).post(create_listing))
        .route("/listings/:id", get(get_listing))
        .route("/contact", post(create_contact_message))
        .route("/import-requests", post(create_import_request))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Operational routes (no state): GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// Permissive CORS: any method and header; origins from config, where `*`
/// allows all.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let list: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(AllowOrigin::list(list))
    }
}

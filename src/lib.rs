pub mod config;
pub mod directory;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/appointment/:doc_id",
            get(handlers::appointment::appointment_page),
        )
        .route(
            "/appointment/:doc_id/book",
            post(handlers::booking::book_form),
        )
        .route(
            "/api/appointment/:doc_id",
            get(handlers::appointment::appointment_json),
        )
        .route(
            "/api/appointment/:doc_id/book",
            post(handlers::booking::book_json),
        )
        .route(
            "/api/admin/directory/reload",
            post(handlers::admin::reload_directory),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

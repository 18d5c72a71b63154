//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the HTTP endpoints: the rendered guestbook page at `/`
//! and a read-only JSON API under `/api/guestbook`. Every route reads the
//! current snapshot; nothing here writes guestbook data.

pub mod guestbook;

use axum::Router;
use axum::http::{Method, StatusCode};
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(guestbook::page))
        .route("/api/guestbook/canvas", get(guestbook::canvas))
        .route("/api/guestbook/entries", get(guestbook::list_entries))
        .route("/api/guestbook/entries/{id}/neighborhood", get(guestbook::entry_neighborhood))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

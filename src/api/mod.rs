//! HTTP API server

use std::sync::Arc;
use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    http::{Method, StatusCode},
    routing::get,
    BoxError, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::upstream::WordSource;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Path of the search endpoint
pub const SEARCH_PATH: &str = "/api/";

/// Build the API router using the provided application state.
///
/// Every request, including the not-found fallback, is bounded by
/// `request_timeout` and passes through the CORS and trace layers. A request
/// that runs out of time is answered like any other server failure.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let search = get(handlers::search).fallback(handlers::not_found);

    Router::new()
        .route(SEARCH_PATH, search.clone())
        .route(SEARCH_PATH.trim_end_matches('/'), search)
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(request_timeout),
        )
        .layer(cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Convenience helper wiring a word source straight into a router
pub fn create_source_router(source: Arc<dyn WordSource>, request_timeout: Duration) -> Router {
    create_router(AppState::new(source), request_timeout)
}

async fn handle_timeout(err: BoxError) -> (StatusCode, &'static str) {
    tracing::error!(error = %err, "Request did not complete in time");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// Any origin, with credentials. The wildcard origin is not allowed
/// together with credentials, so the request origin is mirrored back.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::HEAD, Method::OPTIONS])
}

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use posts_common::PostsError;

use crate::rest;
use crate::AppState;

/// Permissive when no origins are configured, otherwise an exact allow list.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, PostsError> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| PostsError::Config(format!("invalid CORS origin {o:?}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn build_router(state: Arc<AppState>, allowed_origins: &[String]) -> Result<Router, PostsError> {
    let cors = cors_layer(allowed_origins)?;

    let router = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        .route("/posts", get(rest::posts::list_posts))
        .route("/posts/create", post(rest::posts::create_post))
        // Event bus callbacks
        .route("/events", post(rest::events::receive_event))
        .with_state(state)
        .layer(cors)
        // method + path only
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        );

    Ok(router)
}

//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Redirect to the bound target (public)
//! - `POST   /url`          - Create a binding (basic auth)
//! - `DELETE /url/{alias}`  - Delete a binding (basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Per-request deadline, answered with the error envelope
//! - **Authentication** - Basic auth on mutating routes
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, timeout, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Routes with authentication, timeout and tracing applied.
///
/// `request_timeout` bounds how long any single request may take.
pub fn api_router(state: AppState, request_timeout: Duration) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn_with_state(request_timeout, timeout::layer))
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/url/` matches `/url`.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state, request_timeout))
}

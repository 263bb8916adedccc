//! API route configuration.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Routes that mutate bindings. Callers must wrap them with
/// [`crate::api::middleware::auth::layer`].
///
/// # Endpoints
///
/// - `POST   /url`          - Bind a URL to an alias
/// - `DELETE /url/{alias}`  - Remove a binding
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}

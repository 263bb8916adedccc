//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::{error, info};

use crate::error::{AppError, StoreError};
use crate::state::AppState;

const OP: &str = "handlers.redirect";

/// Redirects an alias to its target URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// `302 Found` with `Location: <target>`.
///
/// # Errors
///
/// Returns 404 `not found` if the alias has no live binding.
/// Returns 500 `internal error` on storage failures.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target = state.store.resolve(&alias).await.map_err(|e| {
        match &e {
            StoreError::NotFound(_) => info!(op = OP, alias = %alias, "url not found"),
            other => error!(op = OP, alias = %alias, error = %other, "failed to get url"),
        }
        AppError::from(e)
    })?;

    info!(op = OP, alias = %alias, url = %target, "got url");

    Ok((StatusCode::FOUND, [(header::LOCATION, target)]))
}

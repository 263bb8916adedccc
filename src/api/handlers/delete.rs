//! Handler for alias deletion.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{error, info};

use crate::api::dto::response::StatusResponse;
use crate::error::{AppError, StoreError};
use crate::state::AppState;

const OP: &str = "handlers.url.delete";

/// Permanently removes the binding for an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (basic auth)
///
/// The alias becomes available again right away; a later redirect for it
/// returns 404.
///
/// # Errors
///
/// Returns 404 `not found` if the alias has no live binding.
/// Returns 500 `internal error` on storage failures.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatusResponse>, AppError> {
    state.store.delete(&alias).await.map_err(|e| {
        match &e {
            StoreError::NotFound(_) => info!(op = OP, alias = %alias, "url not found"),
            other => error!(op = OP, alias = %alias, error = %other, "failed to delete url"),
        }
        AppError::from(e)
    })?;

    info!(op = OP, alias = %alias, "url deleted");

    Ok(Json(StatusResponse::ok()))
}

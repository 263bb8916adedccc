//! Handler for binding a URL to an alias.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::response::StatusResponse;
use crate::api::dto::save::SaveRequest;
use crate::error::{AppError, StoreError};
use crate::state::AppState;

const OP: &str = "handlers.url.save";

/// Stores a URL under a caller-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://google.com", "alias": "google" }
/// ```
///
/// `alias` may be omitted or empty, in which case a random one is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "google" }
/// ```
///
/// # Errors
///
/// - 400 `failed to decode request` for malformed JSON
/// - 400 `field URL is a required field` / `field URL is not a valid URL`
/// - 409 `alias already exists`
/// - 500 `failed to add url`
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(op = OP, error = %rejection, "failed to decode request body");
        AppError::bad_request("failed to decode request")
    })?;

    if let Err(errors) = request.validate() {
        info!(op = OP, error = %errors, "invalid request");
        return Err(errors.into());
    }

    let binding = state
        .store
        .create(&request.url, request.alias.as_deref())
        .await
        .map_err(|e| match e {
            StoreError::AliasExists(alias) => {
                info!(op = OP, alias = %alias, "alias already exists");
                AppError::conflict("alias already exists")
            }
            other => {
                error!(op = OP, error = %other, "failed to add url");
                AppError::internal("failed to add url")
            }
        })?;

    info!(op = OP, alias = %binding.alias, id = binding.id, "url added");

    Ok(Json(StatusResponse::ok_with_alias(binding.alias)))
}

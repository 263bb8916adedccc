//! Per-request deadline.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Fails the request with `500 request timed out` once `timeout` has passed.
///
/// The deadline is checked before the handler on every poll, so a handler
/// that is still waiting on storage when the deadline hits never answers.
/// An insert that already reached SQLite may still commit afterwards; keeping
/// `DB_BUSY_TIMEOUT` below `HTTP_TIMEOUT` lets the database give up first.
///
/// ```rust,ignore
/// let router = router.layer(middleware::from_fn_with_state(timeout, timeout::layer));
/// ```
pub async fn layer(
    State(timeout): State<Duration>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    tokio::select! {
        biased;
        _ = tokio::time::sleep(timeout) => {
            tracing::error!(%method, %uri, timeout_ms = timeout.as_millis() as u64, "request timed out");
            Err(AppError::internal("request timed out"))
        }
        response = next.run(req) => Ok(response),
    }
}

//! Error types for the alias store and the HTTP layer.
//!
//! [`StoreError`] is what the store and its repositories return. [`AppError`]
//! is the HTTP-facing error; it renders the uniform status envelope and maps
//! onto status codes.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::api::dto::response::StatusResponse;

/// Failure of an alias store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A live binding already uses this alias.
    #[error("alias already exists: {0}")]
    AliasExists(String),

    /// No live binding for this alias.
    #[error("alias not found: {0}")]
    NotFound(String),

    /// Every generated candidate collided with a live alias.
    #[error("failed to generate a free alias after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl StoreError {
    /// Returns true for outcomes the caller is expected to handle
    /// (`AliasExists`, `NotFound`), false for internal failures.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::AliasExists(_) | Self::NotFound(_))
    }
}

/// Translates a storage error, turning a unique-constraint violation on
/// `alias` into [`StoreError::AliasExists`].
pub fn map_sqlx_error(e: sqlx::Error, alias: &str) -> StoreError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StoreError::AliasExists(alias.to_string());
    }

    StoreError::Storage(e)
}

/// HTTP-facing error carrying the message placed in the `error` field of the
/// response envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Default translation used by the redirect and delete handlers.
/// The save handler overrides the internal-error message.
impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::AliasExists(_) => AppError::conflict("alias already exists"),
            StoreError::NotFound(_) => AppError::not_found("not found"),
            StoreError::ExhaustedRetries { .. } | StoreError::Storage(_) => {
                AppError::internal("internal error")
            }
        }
    }
}

/// Renders request validation failures as `field URL is a required field`,
/// `field URL is not a valid URL`, and so on, one clause per invalid field.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut clauses: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| describe_field(field, errs))
            .collect();
        clauses.sort();

        AppError::bad_request(clauses.join(", "))
    }
}

fn describe_field(field: &str, errors: &[ValidationError]) -> String {
    let name = match field {
        "url" => "URL".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    };

    let required = errors
        .iter()
        .any(|e| e.code == "required" || (field == "url" && e.code == "length"));

    if required {
        format!("field {} is a required field", name)
    } else if errors.iter().any(|e| e.code == "url") {
        format!("field {} is not a valid URL", name)
    } else if errors.iter().any(|e| e.code == "reserved") {
        format!("field {} is reserved", name)
    } else {
        format!("field {} is not valid", name)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let unauthorized = matches!(self, AppError::Unauthorized(_));

        let mut response = (status, Json(StatusResponse::error(self.to_string()))).into_response();

        if unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"alias-shortener\""),
            );
        }

        response
    }
}

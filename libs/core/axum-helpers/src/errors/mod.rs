pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Body of every error response.
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Product not found"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Structured details, e.g. per-field validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            error: code.as_str().to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own errors into this type; the conversion
/// decides the status code and what the client gets to see.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// Malformed path identifier
    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Database(e) => map_db_error(&e),
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(error_code = ErrorCode::JsonExtraction.code(), "JSON extraction error: {:?}", e);
                (rejection_status(&e), ErrorCode::JsonExtraction, e.body_text(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = ErrorCode::ValidationError.code(), "Validation error: {:?}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    ErrorCode::ValidationError.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::InvalidId(raw) => {
                tracing::info!(error_code = ErrorCode::InvalidId.code(), id = %raw, "Invalid id in path");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidId,
                    format!("{}: {}", ErrorCode::InvalidId.default_message(), raw),
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::BadRequest.code(), "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg, None)
            }
            AppError::InternalServerError(msg) => {
                // Detail stays in the logs.
                tracing::error!(error_code = ErrorCode::InternalError.code(), "Internal server error: {}", msg);
                internal(ErrorCode::InternalError)
            }
        };

        let mut body = ErrorResponse::new(code, message);
        body.details = details;

        (status, Json(body)).into_response()
    }
}

type ErrorParts = (StatusCode, ErrorCode, String, Option<serde_json::Value>);

fn internal(code: ErrorCode) -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        code,
        code.default_message().to_string(),
        None,
    )
}

/// Unparseable bodies and bodies with missing or mistyped fields are both
/// `400`; only a wrong content type keeps axum's own status.
fn rejection_status(rejection: &JsonRejection) -> StatusCode {
    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            StatusCode::BAD_REQUEST
        }
        other => other.status(),
    }
}

fn map_db_error(error: &DbErr) -> ErrorParts {
    match error {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            tracing::info!(error_code = ErrorCode::DatabaseNotFound.code(), "Database record not found: {}", error);
            (
                StatusCode::NOT_FOUND,
                ErrorCode::DatabaseNotFound,
                ErrorCode::DatabaseNotFound.default_message().to_string(),
                None,
            )
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            tracing::warn!(error_code = ErrorCode::DatabaseUnavailable.code(), "Database unavailable: {}", error);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::DatabaseUnavailable,
                ErrorCode::DatabaseUnavailable.default_message().to_string(),
                None,
            )
        }
        _ => {
            tracing::error!(error_code = ErrorCode::DatabaseError.code(), "Database error: {:?}", error);
            internal(ErrorCode::DatabaseError)
        }
    }
}

/// `{ "field": [{ "code", "message", "params" }] }` for each failing field.
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    let fields = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let entries: Vec<serde_json::Value> = errs
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(entries))
        })
        .collect::<serde_json::Map<_, _>>();

    serde_json::Value::Object(fields)
}

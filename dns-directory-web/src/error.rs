//! API error type and its HTTP mapping

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;

use dns_directory_core::CoreError;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Stable error code
    pub error: String,
    /// Human-readable message
    pub message: String,
    /// Correlates the response with the server log line
    pub request_id: String,
}

/// Web layer error: wraps `CoreError` and carries the HTTP status mapping.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Stable code for the `error` field of the response body.
    fn error_code(&self) -> &'static str {
        match &self.0 {
            CoreError::RecordNotFound { .. } => "RecordNotFound",
            CoreError::RecordExists { .. } => "RecordExists",
            CoreError::ValidationError(_) => "ValidationError",
            CoreError::StorageError(_) => "StorageError",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            CoreError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CoreError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
            CoreError::RecordExists { .. } => StatusCode::CONFLICT,
            CoreError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let request_id = uuid::Uuid::new_v4().to_string();

        // Expected failures (bad input, missing record) are warnings;
        // anything else is an internal fault.
        if self.0.is_expected() {
            tracing::warn!(%request_id, error = %self.0, "request failed");
        } else {
            tracing::error!(%request_id, error = %self.0, "request failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error_code().to_string(),
            message: self.0.to_string(),
            request_id,
        })
    }
}

/// Rewrite body deserialization failures (unknown record type, negative TTL,
/// bare malformed JSON) into the standard error shape instead of Actix's
/// plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError(CoreError::ValidationError(format!(
        "Invalid request body: {err}"
    )))
    .into()
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clevio_core::content::ContentValidationError;
use clevio_core::{StoreError, TemplateError, UploadError};
use serde_json::json;

/// API error type, rendered as `{"ok": false, "message": ..., "type": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Io(source) => ApiError::Internal(format!("failed to store upload: {source}")),
            other => ApiError::Validation(other.to_string()),
        }
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<ContentValidationError> for ApiError {
    fn from(err: ContentValidationError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalidCredentials",
                "Invalid credentials".to_string(),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "badRequest", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validationError", msg.clone()),
            ApiError::Persistence(err) => {
                tracing::error!(error = %err, "Persistence error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "persistenceError",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "ok": false,
            "message": message,
            "type": error_type,
        });

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_rejections_are_client_errors() {
        let err = ApiError::from(UploadError::TooLarge {
            size: 3_000_000,
            max: 2_097_152,
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(UploadError::NotImage("text/plain".into()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_are_server_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ApiError::from(UploadError::Io(io));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthorized_maps_to_401() {
        assert_eq!(
            ApiError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}

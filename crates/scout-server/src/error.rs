use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use scout_core::AppError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = if self.0.is_user_error() {
            (StatusCode::BAD_REQUEST, self.0.to_string())
        } else {
            // Upstream detail stays in the logs; the caller only gets a
            // generic body.
            tracing::error!(error = %self.0, "Scrape failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Internal server error".to_string(),
            )
        };

        let body = ErrorResponse { error: message };
        (status, axum::Json(body)).into_response()
    }
}

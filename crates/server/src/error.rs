//! Mapping of scrape failures to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use frontpage_core::FrontpageError;
use serde_json::json;

/// A failed request, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct AppError(FrontpageError);

impl From<FrontpageError> for AppError {
    fn from(err: FrontpageError) -> Self {
        Self(err)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            FrontpageError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            FrontpageError::HttpError(_) | FrontpageError::InvalidUrl(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(%status, error = %self.0, "request failed");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::from(FrontpageError::Timeout { timeout: 5 }).status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(AppError::from(FrontpageError::InvalidUrl("x".into())).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            AppError::from(FrontpageError::Serialization("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::from(FrontpageError::Timeout { timeout: 5 }).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}

/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "success": false,
 *   "error": "validation failed",
 *   "errors": [{"field": "idNumber", "reason": "..."}]
 * }
 * ```
 *
 * The `errors` array is present only for validation failures. Internal
 * errors are logged here with their full detail and surface a generic
 * message.
 */
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {:?}", self);
        }

        let body = match &self {
            ApiError::Validation { errors } => serde_json::json!({
                "success": false,
                "error": self.public_message(),
                "errors": errors,
            }),
            _ => serde_json::json!({
                "success": false,
                "error": self.public_message(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::types::FieldError;

    #[tokio::test]
    async fn test_validation_response_lists_every_violation() {
        let err = ApiError::Validation {
            errors: vec![
                FieldError::new("idNumber", "must be exactly 10 digits"),
                FieldError::new("password", "must contain an uppercase letter"),
            ],
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"].as_array().unwrap().len(), 2);
        assert_eq!(body["errors"][0]["field"], "idNumber");
    }

    #[tokio::test]
    async fn test_rate_limited_response() {
        let response = ApiError::RateLimited.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}

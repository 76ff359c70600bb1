/**
 * Backend Error Types
 *
 * This module defines the error types returned by HTTP handlers. Each
 * variant maps to one HTTP status code and one response shape; the actual
 * conversion lives in `conversion.rs`.
 *
 * # Security
 *
 * `InvalidCredentials` carries no detail on purpose: a failed login must not
 * reveal whether the username exists. Internal variants (`Database`, `Hash`)
 * are logged server-side and surface only a generic message.
 */
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One field-scoped validation violation.
///
/// Registration reports every violation, not just the first, so the response
/// carries a list of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending request field (e.g. `"idNumber"`)
    pub field: String,
    /// Human-readable, user-correctable reason
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// All errors an HTTP handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed field validation; every violation is listed
    #[error("validation failed")]
    Validation { errors: Vec<FieldError> },

    /// Wrong username or password; message stays generic
    #[error("invalid username or password")]
    InvalidCredentials,

    /// No valid session for a protected resource
    #[error("authentication required")]
    Unauthorized,

    /// Unknown form or user
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// Unique-constraint violation (username, email or idNumber)
    #[error("{field} is already registered")]
    Duplicate { field: String },

    /// Client IP exceeded the request budget for the current window
    #[error("too many requests, please try again later")]
    RateLimited,

    /// Database not configured; persistence-backed endpoints are disabled
    #[error("service unavailable")]
    Unavailable,

    /// Database query failure
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("password hashing error")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    /// Shorthand for a `NotFound` with a named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Duplicate { .. } => StatusCode::CONFLICT,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client.
    ///
    /// Internal variants deliberately do not leak their source error text.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Hash(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::Validation { errors: vec![] }.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::not_found("form").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Duplicate {
                field: "email".to_string()
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Unavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_internal_errors_do_not_leak_detail() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.public_message(), "internal server error");
    }

    #[test]
    fn test_credentials_message_is_generic() {
        // Unknown user and wrong password share this exact message, so a
        // caller cannot tell which one failed.
        let msg = ApiError::InvalidCredentials.public_message();
        assert_eq!(msg, "invalid username or password");
        assert!(!msg.contains("exists"));
        assert!(!msg.contains("unknown"));
    }
}

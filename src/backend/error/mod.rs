//! Backend Error Types
//!
//! This module defines the error taxonomy used by every HTTP handler and the
//! conversion of those errors into JSON responses.
//!
//! # Taxonomy
//!
//! - `Validation` - field-scoped, user-correctable; shown inline by clients
//! - `InvalidCredentials` - wrong username/password; deliberately generic to
//!   avoid account enumeration
//! - `Unauthorized` - missing or expired session; clients redirect to login
//! - `NotFound` - unknown form or user
//! - `Duplicate` - unique-constraint violation on registration
//! - `RateLimited` - too many requests from one client IP
//! - `Unavailable` - database not configured
//! - `Database` / `Hash` - internal failures, never fatal to the process

/// Error enum and status-code mapping
pub mod types;

/// `IntoResponse` conversion for handlers
pub mod conversion;

pub use types::{ApiError, FieldError};

//! Middleware for request processing
//!
//! - **`auth`** - session token extraction and the session requirement helper
//! - **`rate_limit`** - fixed-window per-IP request limiting

/// Session token extraction and session-gated access
pub mod auth;

/// Per-IP rate limiting
pub mod rate_limit;

pub use auth::{require_session, session_token, SESSION_COOKIE};
pub use rate_limit::{rate_limit_middleware, RateLimitConfig, RateLimiter};

//! HTTP handlers for authentication endpoints
//!
//! - `POST /api/auth/register` - account creation with full field validation
//! - `POST /api/auth/login` - credential verification, session issue
//! - `GET /api/auth/check` - total session validity query
//! - `POST /api/auth/logout` - idempotent session invalidation
//! - `GET /api/user` - current user profile

/// Request/response types
pub mod types;

/// Account registration handler
pub mod register;

/// Login handler
pub mod login;

/// Session check handler
pub mod check;

/// Logout handler
pub mod logout;

/// Current user handler
pub mod me;

pub use check::check;
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use register::register;

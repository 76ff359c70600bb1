//! Authentication Module
//!
//! This module handles user accounts, registration validation, session
//! management and the HTTP handlers for the auth endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Server-held session store with injectable clock
//! ├── validation.rs   - Registration field validation
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Account registration
//!     ├── login.rs    - Credential verification + session issue
//!     ├── check.rs    - Total session validity query
//!     ├── logout.rs   - Idempotent session invalidation
//!     └── me.rs       - Current user profile
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: all fields validated → password bcrypt-hashed → user row
//!    inserted (uniqueness enforced by the database)
//! 2. **Login**: credentials verified → opaque session token issued and set
//!    as an HttpOnly cookie
//! 3. **Check**: the client's router asks whether the session is live; the
//!    answer is always a boolean, never an error
//! 4. **Logout**: the session is removed server-side and the cookie cleared
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage; the plaintext is
//!   discarded immediately after hashing
//! - Failed logins answer identically for unknown users and wrong passwords
//! - Session tokens are random UUIDs; the server is the sole authority on
//!   their validity

/// User data model and database operations
pub mod users;

/// Session store
pub mod sessions;

/// Registration validation rules
pub mod validation;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{CheckResponse, LoginRequest, RegisterRequest, SuccessResponse, UserResponse};
pub use handlers::{check, get_me, login, logout, register};
pub use sessions::{Clock, SessionStore, SystemClock};

//! Server setup and configuration
//!
//! - **`init`** - application assembly: state, seeding, router, layers
//! - **`state`** - the shared `AppState` and its `FromRef` projections
//! - **`config`** - environment-driven configuration (database, CORS origin, port)

/// Application assembly
pub mod init;

/// Shared application state
pub mod state;

/// Environment configuration
pub mod config;

pub use init::{create_app, create_app_with_state};
pub use state::AppState;

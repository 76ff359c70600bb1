//! Backend Module
//!
//! This module contains all server-side code for the inspecta application:
//! an Axum HTTP server persisting users, form templates and submissions in
//! PostgreSQL.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, registration validation, sessions, auth handlers
//! - **`forms`** - Form templates, submissions and their handlers
//! - **`middleware`** - Session extraction and per-IP rate limiting
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # State Management
//!
//! Request handling is stateless per request except for two shared
//! structures held in `AppState`: the session store (keyed by opaque
//! session token) and the rate-limit counters (keyed by client IP). Both
//! are in-memory and clone-cheap; the optional PostgreSQL pool carries all
//! durable state.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>` and propagate with `?`. Every
//! handled condition maps onto a JSON error response; nothing crashes the
//! process.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Form templates and submissions
pub mod forms;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, create_app_with_state, AppState};

//! Inspecta - Main Library
//!
//! Inspecta is a government-inspection record-keeping application. Inspectors
//! authenticate, fill out predefined inspection forms whose layout is served
//! by the backend, and can reorder form fields in a drag-and-drop builder
//! view. Accounts (including a captured signature image), form templates and
//! form submissions are persisted in PostgreSQL.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the client layer and the backend
//!   - Field descriptors and the closed field-type enum
//!   - Wire request/response shapes for the JSON API
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with auth, form and submission endpoints
//!   - Session store with injectable clock
//!   - Per-IP rate limiting, CORS and security headers
//!   - Database persistence (PostgreSQL via sqlx)
//!
//! - **`client`** - Client-side view-model layer
//!   - Reqwest API client with a cookie-held session
//!   - Form renderer view model (pure reducer)
//!   - Form builder / reorder engine
//!   - Session-gated route reducer
//!
//! The client layer is deliberately UI-toolkit free: rendering, styling and
//! toast notifications are external collaborators. Everything here is plain
//! state plus pure transition functions so it can be tested directly.

/// Types shared between the client layer and the backend
pub mod shared;

/// Server-side code (Axum HTTP server, persistence, sessions)
pub mod backend;

/// Client-side view models and HTTP API client
pub mod client;

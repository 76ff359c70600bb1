//! Form Definition Store and Submissions
//!
//! Persists named form templates (ordered sequences of typed field
//! descriptors) and the submissions users enter against them, and exposes
//! the HTTP handlers for both.
//!
//! # Module Structure
//!
//! ```text
//! forms/
//! ├── mod.rs          - Module exports and documentation
//! ├── templates.rs    - Template rows (name + JSONB element list), seeding
//! ├── submissions.rs  - Insert-only submission rows
//! └── handlers.rs     - HTTP handlers (list, fetch, save, submit)
//! ```

/// Template database operations and default seeds
pub mod templates;

/// Submission database operations
pub mod submissions;

/// HTTP handlers for form endpoints
pub mod handlers;

pub use handlers::{get_form, list_forms, save_form, submit_form};
pub use submissions::SubmissionValues;

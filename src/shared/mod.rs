//! Shared Types
//!
//! Types used on both sides of the HTTP surface: the backend serializes them
//! into responses and the client layer deserializes them back. Keeping them
//! in one place guarantees the two sides cannot drift apart.

/// Form templates, field descriptors and the closed field-type enum
pub mod forms;

pub use forms::{FieldDescriptor, FieldKind, FormTemplate};

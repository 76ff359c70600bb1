/**
 * Form Template Types
 *
 * A form template is a named, ordered sequence of typed field descriptors.
 * The order of `elements` is semantically significant: it is the on-screen
 * and print order, and it is exactly what the builder's reorder engine
 * permutes and the renderer walks.
 */
use serde::{Deserialize, Serialize};

/// Closed set of field types a template element can have.
///
/// Matched exhaustively wherever a field is rendered, so adding a type is a
/// compile-time-checked change. Documents written by older versions of the
/// application may carry types this build does not know; those deserialize
/// into `Unknown` and render as nothing. That silent fallback is deliberate
/// and documented behavior, not a defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-text input
    Text,
    /// Boolean checkbox
    Checkbox,
    /// Calendar date input
    Date,
    /// Captured signature image
    Signature,
    /// Unrecognized type from an older or newer document; renders nothing
    #[serde(other)]
    Unknown,
}

/// One typed field inside a form template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Identifier, unique within a single template
    pub id: String,
    /// Field type, drives rendering
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Label or placeholder text shown next to the input
    pub content: String,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<String>, kind: FieldKind, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            content: content.into(),
        }
    }
}

/// A named form template: the unit the builder edits and the renderer loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormTemplate {
    /// Human key, unique across templates
    pub name: String,
    /// Ordered field sequence; order is display order
    pub elements: Vec<FieldDescriptor>,
}

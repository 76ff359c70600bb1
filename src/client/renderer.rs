/**
 * Form Renderer View Model
 *
 * Turns a template into an ordered list of renderable field descriptions
 * and collects the per-field input into a submission record. The view
 * model is plain serializable state updated by a pure reducer; the actual
 * widgets, styling and toasts are the UI shell's business.
 *
 * # Unknown Field Types
 *
 * `render_field` dispatches exhaustively on the closed field-type enum.
 * A descriptor whose type this build does not recognize renders nothing:
 * `None`, silently. That fallback is documented policy (older documents
 * keep working), not a defect.
 */
use serde::{Deserialize, Serialize};

use crate::backend::forms::submissions::SubmissionValues;
use crate::shared::forms::{FieldDescriptor, FieldKind, FormTemplate};

/// What the UI shell should draw for one field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RenderedField {
    /// Free-text input with a placeholder
    TextInput { id: String, placeholder: String },
    /// Labelled checkbox
    Checkbox { id: String, label: String },
    /// Labelled calendar input
    DatePicker { id: String, label: String },
    /// Labelled signature capture pad
    SignaturePad { id: String, label: String },
}

/// Map a field descriptor to its renderable description.
///
/// Returns `None` for unrecognized types; the caller skips the field.
pub fn render_field(descriptor: &FieldDescriptor) -> Option<RenderedField> {
    let id = descriptor.id.clone();
    let content = descriptor.content.clone();
    match descriptor.kind {
        FieldKind::Text => Some(RenderedField::TextInput {
            id,
            placeholder: content,
        }),
        FieldKind::Checkbox => Some(RenderedField::Checkbox { id, label: content }),
        FieldKind::Date => Some(RenderedField::DatePicker { id, label: content }),
        FieldKind::Signature => Some(RenderedField::SignaturePad { id, label: content }),
        FieldKind::Unknown => None,
    }
}

/// Where a submission attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitStatus {
    /// Nothing submitted yet
    Idle,
    /// Request on the wire
    InFlight,
    /// Stored; the shell shows a confirmation
    Confirmed,
    /// Transport or storage failure; the shell shows a retry prompt
    Failed,
}

/// Events the reducer consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FormMsg {
    /// User entered a value for a field
    ValueChanged { id: String, value: serde_json::Value },
    /// User pressed submit
    SubmitStarted,
    /// The submit request resolved
    SubmitFinished { success: bool },
    /// User dismissed the confirmation/retry notice
    NoticeDismissed,
}

/// Serializable view model for one form being filled out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormViewModel {
    /// Template name
    pub form_name: String,
    /// Ordered elements as fetched
    pub elements: Vec<FieldDescriptor>,
    /// Entered values keyed by field id
    pub values: SubmissionValues,
    /// Submission progress
    pub status: SubmitStatus,
}

impl FormViewModel {
    pub fn new(template: FormTemplate) -> Self {
        Self {
            form_name: template.name,
            elements: template.elements,
            values: SubmissionValues::new(),
            status: SubmitStatus::Idle,
        }
    }

    /// The renderable fields, in template order, unknown types skipped
    pub fn rendered_fields(&self) -> Vec<RenderedField> {
        self.elements.iter().filter_map(render_field).collect()
    }

    /// Pure state transition
    pub fn update(&mut self, msg: FormMsg) {
        match msg {
            FormMsg::ValueChanged { id, value } => {
                self.values.insert(id, value);
            }
            FormMsg::SubmitStarted => {
                self.status = SubmitStatus::InFlight;
            }
            FormMsg::SubmitFinished { success } => {
                self.status = if success {
                    SubmitStatus::Confirmed
                } else {
                    SubmitStatus::Failed
                };
            }
            FormMsg::NoticeDismissed => {
                self.status = SubmitStatus::Idle;
            }
        }
    }

    /// The submission record to send: the current values as entered
    pub fn submission(&self) -> &SubmissionValues {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn template() -> FormTemplate {
        FormTemplate {
            name: "site-safety".to_string(),
            elements: vec![
                FieldDescriptor::new("name", FieldKind::Text, "Inspector Name"),
                FieldDescriptor::new("pass", FieldKind::Checkbox, "Pass"),
                FieldDescriptor::new("date", FieldKind::Date, "Inspected On"),
                FieldDescriptor::new("sig", FieldKind::Signature, "Signature"),
            ],
        }
    }

    #[test]
    fn test_render_dispatches_on_type() {
        let fields = FormViewModel::new(template()).rendered_fields();
        assert_eq!(
            fields,
            vec![
                RenderedField::TextInput {
                    id: "name".to_string(),
                    placeholder: "Inspector Name".to_string()
                },
                RenderedField::Checkbox {
                    id: "pass".to_string(),
                    label: "Pass".to_string()
                },
                RenderedField::DatePicker {
                    id: "date".to_string(),
                    label: "Inspected On".to_string()
                },
                RenderedField::SignaturePad {
                    id: "sig".to_string(),
                    label: "Signature".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unknown_type_renders_nothing() {
        let unknown = FieldDescriptor::new("x", FieldKind::Unknown, "Mystery");
        assert_eq!(render_field(&unknown), None);

        let mut t = template();
        t.elements.insert(1, unknown);
        let vm = FormViewModel::new(t);
        // Four known fields survive; the unknown one is silently skipped.
        assert_eq!(vm.rendered_fields().len(), 4);
    }

    #[test]
    fn test_values_collect_by_field_id() {
        let mut vm = FormViewModel::new(template());
        vm.update(FormMsg::ValueChanged {
            id: "name".to_string(),
            value: serde_json::json!("R. Vance"),
        });
        vm.update(FormMsg::ValueChanged {
            id: "pass".to_string(),
            value: serde_json::json!(true),
        });
        // Re-entering a value replaces the previous one
        vm.update(FormMsg::ValueChanged {
            id: "name".to_string(),
            value: serde_json::json!("R. Vance Jr."),
        });

        let submission = vm.submission();
        assert_eq!(submission.len(), 2);
        assert_eq!(submission["name"], serde_json::json!("R. Vance Jr."));
        assert_eq!(submission["pass"], serde_json::json!(true));
    }

    #[test]
    fn test_submit_lifecycle_success() {
        let mut vm = FormViewModel::new(template());
        assert_eq!(vm.status, SubmitStatus::Idle);
        vm.update(FormMsg::SubmitStarted);
        assert_eq!(vm.status, SubmitStatus::InFlight);
        vm.update(FormMsg::SubmitFinished { success: true });
        assert_eq!(vm.status, SubmitStatus::Confirmed);
        vm.update(FormMsg::NoticeDismissed);
        assert_eq!(vm.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_submit_failure_prompts_retry() {
        let mut vm = FormViewModel::new(template());
        vm.update(FormMsg::SubmitStarted);
        vm.update(FormMsg::SubmitFinished { success: false });
        assert_eq!(vm.status, SubmitStatus::Failed);
        // Values survive a failed submit so the user can retry as-is.
        vm.update(FormMsg::ValueChanged {
            id: "pass".to_string(),
            value: serde_json::json!(false),
        });
        assert_eq!(vm.submission().len(), 1);
    }

    #[test]
    fn test_view_model_is_serializable() {
        let mut vm = FormViewModel::new(template());
        vm.update(FormMsg::ValueChanged {
            id: "pass".to_string(),
            value: serde_json::json!(true),
        });
        let json = serde_json::to_string(&vm).unwrap();
        let back: FormViewModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.form_name, vm.form_name);
        assert_eq!(back.values, vm.values);
        assert_eq!(back.status, vm.status);
    }
}

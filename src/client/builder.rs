/**
 * Form Builder / Reorder Engine
 *
 * Client-side state for editing one template's field order. The builder
 * owns the ordered element sequence while the user drags fields around;
 * persistence is an explicit separate save that sends the full sequence.
 *
 * # Drag Interaction Model
 *
 * A drag names a source index; hovering over another element reorders
 * immediately (optimistic reorder), not only on drop, so the visible order
 * tracks the pointer continuously. After each move the dragged item's
 * recorded index is updated so subsequent hover events operate on its
 * current position, not the original one.
 *
 * The engine is deliberately decoupled from any pointer-event library:
 * `begin_drag` / `hover` / `end_drag` are plain functions a UI shell calls.
 */
use serde::{Deserialize, Serialize};

use crate::shared::forms::FieldDescriptor;

/// Builder state for one template being edited
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormBuilderState {
    /// Template name the sequence belongs to
    pub form_name: String,
    /// The ordered field sequence being edited
    pub elements: Vec<FieldDescriptor>,
    /// Index of the element currently being dragged, if any
    pub dragging: Option<usize>,
    /// Whether the order differs from the last saved state
    pub dirty: bool,
}

impl FormBuilderState {
    pub fn new(form_name: impl Into<String>, elements: Vec<FieldDescriptor>) -> Self {
        Self {
            form_name: form_name.into(),
            elements,
            dragging: None,
            dirty: false,
        }
    }

    /// Move the element at `from` so it ends up at position `to`.
    ///
    /// Every other element shifts accordingly; the result is a permutation
    /// of the input (nothing duplicated, nothing lost). A move onto itself
    /// or with an out-of-range index is a no-op.
    pub fn move_element(&mut self, from: usize, to: usize) {
        if from == to || from >= self.elements.len() || to >= self.elements.len() {
            return;
        }
        let element = self.elements.remove(from);
        self.elements.insert(to, element);
        self.dirty = true;
    }

    /// Start dragging the element at `index`
    pub fn begin_drag(&mut self, index: usize) {
        if index < self.elements.len() {
            self.dragging = Some(index);
        }
    }

    /// The pointer crossed onto the element at `target` during a drag.
    ///
    /// Reorders immediately and rebooks the dragged index so the next hover
    /// works from the element's current position.
    pub fn hover(&mut self, target: usize) {
        if let Some(source) = self.dragging {
            self.move_element(source, target);
            if target < self.elements.len() {
                self.dragging = Some(target);
            }
        }
    }

    /// The drag ended (drop or cancel); order stays as last hovered
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    /// Mark the current order as persisted
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::FieldKind;
    use std::collections::HashSet;

    fn sample() -> FormBuilderState {
        FormBuilderState::new(
            "site-safety",
            vec![
                FieldDescriptor::new("f1", FieldKind::Text, "Name"),
                FieldDescriptor::new("f2", FieldKind::Checkbox, "Pass"),
                FieldDescriptor::new("f3", FieldKind::Date, "Inspected On"),
            ],
        )
    }

    fn ids(state: &FormBuilderState) -> Vec<&str> {
        state.elements.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn test_move_first_to_last() {
        // ["text:Name", "checkbox:Pass", "date:Inspected On"], move(0, 2)
        // => ["checkbox:Pass", "date:Inspected On", "text:Name"]
        let mut state = sample();
        state.move_element(0, 2);
        assert_eq!(ids(&state), vec!["f2", "f3", "f1"]);
    }

    #[test]
    fn test_move_is_a_permutation() {
        let mut state = sample();
        let before: HashSet<String> = state.elements.iter().map(|e| e.id.clone()).collect();
        for (from, to) in [(0, 2), (2, 1), (1, 0), (0, 1)] {
            state.move_element(from, to);
            let after: HashSet<String> = state.elements.iter().map(|e| e.id.clone()).collect();
            assert_eq!(after, before, "after move({}, {})", from, to);
            assert_eq!(state.elements.len(), 3);
        }
    }

    #[test]
    fn test_moved_element_lands_at_target() {
        let mut state = sample();
        state.move_element(2, 0);
        assert_eq!(state.elements[0].id, "f3");
    }

    #[test]
    fn test_move_same_index_is_noop() {
        let mut state = sample();
        state.move_element(1, 1);
        assert_eq!(ids(&state), vec!["f1", "f2", "f3"]);
        assert!(!state.dirty);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut state = sample();
        state.move_element(5, 0);
        state.move_element(0, 5);
        assert_eq!(ids(&state), vec!["f1", "f2", "f3"]);
        assert!(!state.dirty);
    }

    #[test]
    fn test_hover_reorders_continuously_and_rebooks_index() {
        let mut state = sample();
        state.begin_drag(0);

        // Pointer crosses onto index 1: f1 moves there and the drag now
        // tracks position 1.
        state.hover(1);
        assert_eq!(ids(&state), vec!["f2", "f1", "f3"]);
        assert_eq!(state.dragging, Some(1));

        // Crossing onto index 2 moves the same element again from its
        // current position.
        state.hover(2);
        assert_eq!(ids(&state), vec!["f2", "f3", "f1"]);
        assert_eq!(state.dragging, Some(2));

        state.end_drag();
        assert_eq!(state.dragging, None);
        assert_eq!(ids(&state), vec!["f2", "f3", "f1"]);
    }

    #[test]
    fn test_hover_back_to_origin_restores_order() {
        let mut state = sample();
        state.begin_drag(0);
        state.hover(2);
        state.hover(0);
        assert_eq!(ids(&state), vec!["f1", "f2", "f3"]);
    }

    #[test]
    fn test_hover_without_drag_is_noop() {
        let mut state = sample();
        state.hover(2);
        assert_eq!(ids(&state), vec!["f1", "f2", "f3"]);
    }

    #[test]
    fn test_dirty_until_saved() {
        let mut state = sample();
        assert!(!state.dirty);
        state.move_element(0, 1);
        assert!(state.dirty);
        state.mark_saved();
        assert!(!state.dirty);
    }
}

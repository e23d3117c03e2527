//! Pending-input state owned by the presentation side.
//!
//! # Invariants
//! - At most one parent is selected for subtask entry at a time.
//! - Cancelling entry clears both the selection and the subtask text.

use crate::model::task::TaskId;

/// Draft text and subtask-entry target, kept apart from the task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    task_draft: String,
    subtask_draft: String,
    selected_parent: Option<TaskId>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task_draft(&self) -> &str {
        &self.task_draft
    }

    pub fn subtask_draft(&self) -> &str {
        &self.subtask_draft
    }

    pub fn selected_parent(&self) -> Option<TaskId> {
        self.selected_parent
    }

    pub fn set_task_draft(&mut self, text: impl Into<String>) {
        self.task_draft = text.into();
    }

    pub fn set_subtask_draft(&mut self, text: impl Into<String>) {
        self.subtask_draft = text.into();
    }

    /// Selects `parent_id` for subtask entry, closing any other open entry.
    ///
    /// Pending subtask text is kept when switching targets.
    pub fn open_subtask_entry(&mut self, parent_id: TaskId) {
        self.selected_parent = Some(parent_id);
    }

    /// Closes subtask entry and discards its pending text.
    pub fn cancel_subtask_entry(&mut self) {
        self.selected_parent = None;
        self.subtask_draft.clear();
    }

    pub fn is_entry_open_for(&self, parent_id: TaskId) -> bool {
        self.selected_parent == Some(parent_id)
    }

    pub(crate) fn clear_task_draft(&mut self) {
        self.task_draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::InteractionState;
    use uuid::Uuid;

    #[test]
    fn opening_entry_replaces_previous_selection() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let mut state = InteractionState::new();
        state.set_subtask_draft("half typed");

        state.open_subtask_entry(a);
        state.open_subtask_entry(b);

        assert!(!state.is_entry_open_for(a));
        assert!(state.is_entry_open_for(b));
        assert_eq!(state.subtask_draft(), "half typed");
    }

    #[test]
    fn cancel_clears_selection_and_text() {
        let mut state = InteractionState::new();
        state.open_subtask_entry(Uuid::new_v4());
        state.set_subtask_draft("draft");

        state.cancel_subtask_entry();

        assert_eq!(state.selected_parent(), None);
        assert_eq!(state.subtask_draft(), "");
    }
}

//! Task list session service.
//!
//! # Responsibility
//! - Route UI intents (submit, open, cancel, toggle) to store commands.
//! - Replace the current snapshot after every successful command.
//!
//! # Invariants
//! - Interaction state resets only after a successful submit or a cancel.
//! - Subtask submission goes through the strict store path, so the selected
//!   parent must still be an existing top-level task.

use crate::model::task::TaskId;
use crate::service::interaction::InteractionState;
use crate::store::task_store::{StoreResult, TaskStore};
use crate::view::projection::ViewProjection;
use log::{info, warn};

/// Current snapshot plus the interaction state driving it.
#[derive(Debug, Clone, Default)]
pub struct TaskSession {
    store: TaskStore,
    interaction: InteractionState,
}

impl TaskSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> &TaskStore {
        &self.store
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.interaction
    }

    /// Projects the current snapshot.
    pub fn project(&self) -> ViewProjection<'_> {
        ViewProjection::project(&self.store)
    }

    /// Lenient top-level creation. Returns the resulting snapshot.
    pub fn add_task(&mut self, title: &str) -> &TaskStore {
        let before = self.store.len();
        self.store = self.store.add_task(title);
        if self.store.len() > before {
            info!("event=task_added module=session status=ok kind=top_level");
        }
        &self.store
    }

    /// Lenient subtask creation. Returns the resulting snapshot.
    pub fn add_subtask(&mut self, parent_id: TaskId, title: &str) -> &TaskStore {
        let before = self.store.len();
        self.store = self.store.add_subtask(parent_id, title);
        if self.store.len() > before {
            info!("event=task_added module=session status=ok kind=subtask");
        }
        &self.store
    }

    /// Lenient toggle. Returns the resulting snapshot.
    pub fn toggle_completion(&mut self, id: TaskId) -> &TaskStore {
        let known = self.store.get(id).is_some();
        self.store = self.store.toggle_completion(id);
        if known {
            info!("event=task_toggled module=session status=ok");
        }
        &self.store
    }

    /// Strict top-level creation, used by callers that report failures.
    pub fn try_add_task(&mut self, title: &str) -> StoreResult<TaskId> {
        let (next, id) = self.store.try_add_task(title)?;
        self.store = next;
        info!("event=task_added module=session status=ok kind=top_level");
        Ok(id)
    }

    /// Strict subtask creation, used by callers that report failures.
    pub fn try_add_subtask(&mut self, parent_id: TaskId, title: &str) -> StoreResult<TaskId> {
        let (next, id) = self.store.try_add_subtask(parent_id, title)?;
        self.store = next;
        info!("event=task_added module=session status=ok kind=subtask");
        Ok(id)
    }

    /// Strict toggle, used by callers that report failures.
    pub fn try_toggle_completion(&mut self, id: TaskId) -> StoreResult<()> {
        self.store = self.store.try_toggle_completion(id)?;
        info!("event=task_toggled module=session status=ok");
        Ok(())
    }

    /// Adds the pending top-level draft.
    ///
    /// Clears the draft on success; blank drafts leave everything unchanged.
    pub fn submit_task(&mut self) -> Option<TaskId> {
        let draft = self.interaction.task_draft().to_string();
        match self.try_add_task(&draft) {
            Ok(id) => {
                self.interaction.clear_task_draft();
                Some(id)
            }
            Err(_) => None,
        }
    }

    /// Opens subtask entry for `parent_id`.
    ///
    /// Only incomplete top-level tasks accept subtasks; any other id is
    /// ignored and `false` is returned.
    pub fn open_subtask_entry(&mut self, parent_id: TaskId) -> bool {
        let accepts = self
            .store
            .get(parent_id)
            .is_some_and(|task| task.is_top_level() && !task.completed);
        if accepts {
            self.interaction.open_subtask_entry(parent_id);
        }
        accepts
    }

    /// Adds the pending subtask draft under the parent whose entry form is
    /// visible.
    ///
    /// On success the selection and the subtask draft are cleared. With no
    /// visible entry (nothing selected, or the selected parent is completed),
    /// a blank draft, or a parent that is no longer a top-level task, nothing
    /// changes and `None` is returned.
    pub fn submit_subtask(&mut self) -> Option<TaskId> {
        let parent_id = self.visible_entry_target()?;
        let draft = self.interaction.subtask_draft().to_string();
        // Why: the selection is plain UI state and can outlive its parent's
        // shape; the strict path re-checks the parent against the snapshot.
        match self.try_add_subtask(parent_id, &draft) {
            Ok(id) => {
                self.interaction.cancel_subtask_entry();
                Some(id)
            }
            Err(err) => {
                warn!("event=subtask_submit module=session status=rejected reason={err}");
                None
            }
        }
    }

    /// Closes subtask entry and discards its pending text.
    pub fn cancel_subtask_entry(&mut self) {
        self.interaction.cancel_subtask_entry();
    }

    /// Returns the parent whose entry form should be shown.
    ///
    /// A selection survives its parent being completed, but the form is
    /// hidden until the parent is incomplete again.
    pub fn visible_entry_target(&self) -> Option<TaskId> {
        let selected = self.interaction.selected_parent()?;
        self.store
            .get(selected)
            .filter(|task| !task.completed)
            .map(|task| task.id)
    }
}

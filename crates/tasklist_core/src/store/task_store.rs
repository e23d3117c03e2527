//! Copy-on-write task store.
//!
//! # Responsibility
//! - Append top-level tasks and subtasks, toggle completion, list children.
//! - Offer a lenient command set (silent no-op on bad input) and a strict
//!   one that reports why a command was rejected.
//!
//! # Invariants
//! - Each command clones the collection and returns a new `TaskStore`; the
//!   receiver is left untouched, so old snapshots stay comparable.
//! - Lenient commands never fail; rejected input returns an equal snapshot.
//! - Strict subtask creation only accepts existing top-level parents.

use crate::model::task::{Task, TaskId, TaskValidationError};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, TaskStoreError>;

/// Rejection reasons reported by strict store commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskStoreError {
    Validation(TaskValidationError),
    /// No task with this id exists in the snapshot.
    TaskNotFound(TaskId),
    /// Subtask parent does not exist in the snapshot.
    ParentNotFound(TaskId),
    /// Subtask parent is itself a subtask.
    ParentNotTopLevel(TaskId),
}

impl Display for TaskStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::ParentNotFound(id) => write!(f, "parent task not found: {id}"),
            Self::ParentNotTopLevel(id) => write!(f, "parent task is not top-level: {id}"),
        }
    }
}

impl Error for TaskStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for TaskStoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Snapshot of the whole task collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Top-level tasks in insertion order.
    pub fn top_level(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(|task| task.is_top_level())
    }

    /// Tasks whose `parent_id` equals `parent_id`, in insertion order.
    pub fn children_of(&self, parent_id: TaskId) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.parent_id == Some(parent_id))
            .collect()
    }

    /// Appends a top-level task. Blank titles leave the snapshot unchanged.
    pub fn add_task(&self, title: &str) -> TaskStore {
        match self.try_add_task(title) {
            Ok((next, _)) => next,
            Err(err) => self.rejected("add_task", &err),
        }
    }

    /// Appends a subtask under `parent_id` without checking that the parent
    /// exists. Blank titles leave the snapshot unchanged.
    pub fn add_subtask(&self, parent_id: TaskId, title: &str) -> TaskStore {
        match Task::subtask(parent_id, title) {
            Ok(task) => self.appended(task),
            Err(err) => self.rejected("add_subtask", &TaskStoreError::from(err)),
        }
    }

    /// Flips `completed` on the matching task. Unknown ids are ignored.
    pub fn toggle_completion(&self, id: TaskId) -> TaskStore {
        self.try_toggle_completion(id)
            .unwrap_or_else(|err| self.rejected("toggle_completion", &err))
    }

    /// Appends a top-level task and returns the new snapshot with its id.
    ///
    /// # Errors
    /// - `Validation(BlankTitle)` when `title` trims to empty.
    pub fn try_add_task(&self, title: &str) -> StoreResult<(TaskStore, TaskId)> {
        let task = Task::top_level(title)?;
        let id = task.id;
        Ok((self.appended(task), id))
    }

    /// Appends a subtask under an existing top-level parent.
    ///
    /// # Errors
    /// - `ParentNotFound` when no task has id `parent_id`.
    /// - `ParentNotTopLevel` when the parent is itself a subtask.
    /// - `Validation(BlankTitle)` when `title` trims to empty.
    pub fn try_add_subtask(
        &self,
        parent_id: TaskId,
        title: &str,
    ) -> StoreResult<(TaskStore, TaskId)> {
        let parent = self
            .get(parent_id)
            .ok_or(TaskStoreError::ParentNotFound(parent_id))?;
        if !parent.is_top_level() {
            return Err(TaskStoreError::ParentNotTopLevel(parent_id));
        }

        let task = Task::subtask(parent_id, title)?;
        let id = task.id;
        Ok((self.appended(task), id))
    }

    /// Flips `completed` on the matching task.
    ///
    /// # Errors
    /// - `TaskNotFound` when no task has id `id`.
    pub fn try_toggle_completion(&self, id: TaskId) -> StoreResult<TaskStore> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(TaskStoreError::TaskNotFound(id))?;

        let mut tasks = self.tasks.clone();
        tasks[index].toggle();
        Ok(Self { tasks })
    }

    fn appended(&self, task: Task) -> TaskStore {
        let mut tasks = Vec::with_capacity(self.tasks.len() + 1);
        tasks.extend_from_slice(&self.tasks);
        tasks.push(task);
        Self { tasks }
    }

    fn rejected(&self, command: &str, err: &TaskStoreError) -> TaskStore {
        debug!("event=command_ignored module=store command={command} reason={err}");
        self.clone()
    }
}

//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record for top-level tasks and subtasks.
//! - Normalize and validate titles at construction and deserialization.
//!
//! # Invariants
//! - `id` is non-nil and immutable.
//! - `title` is trimmed and never blank once stored.
//! - `parent_id == None` marks a top-level task.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Validation failures for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
    /// Nil UUID is not accepted as task identity.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::NilId => write!(f, "task id must not be nil"),
        }
    }
}

impl Error for TaskValidationError {}

/// One unit of work. Subtasks reference their parent through `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    /// `None` for top-level tasks.
    pub parent_id: Option<TaskId>,
}

/// Unvalidated wire shape; converted through `Task::try_from`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    parent_id: Option<TaskId>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Self::with_id(record.id, record.parent_id, record.title)?;
        task.completed = record.completed;
        Ok(task)
    }
}

impl Task {
    /// Creates an incomplete top-level task with a fresh id.
    pub fn top_level(title: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), None, title)
    }

    /// Creates an incomplete subtask of `parent_id` with a fresh id.
    ///
    /// Does not check that the parent exists; that is a store concern.
    pub fn subtask(parent_id: TaskId, title: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), Some(parent_id), title)
    }

    /// Creates an incomplete task with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `BlankTitle` when `title` trims to an empty string.
    pub fn with_id(
        id: TaskId,
        parent_id: Option<TaskId>,
        title: impl AsRef<str>,
    ) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        Ok(Self {
            id,
            title: normalize_title(title.as_ref())?,
            completed: false,
            parent_id,
        })
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Trims surrounding whitespace and rejects blank titles.
pub fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::BlankTitle);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{normalize_title, Task, TaskValidationError};
    use uuid::Uuid;

    #[test]
    fn normalize_title_trims_and_rejects_blank() {
        assert_eq!(normalize_title("  Buy milk \n").unwrap(), "Buy milk");
        assert_eq!(
            normalize_title(" \t ").unwrap_err(),
            TaskValidationError::BlankTitle
        );
    }

    #[test]
    fn toggle_flips_completed() {
        let mut task = Task::top_level("write report").unwrap();
        task.toggle();
        assert!(task.completed);
        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn with_id_rejects_nil() {
        let err = Task::with_id(Uuid::nil(), None, "x").unwrap_err();
        assert_eq!(err, TaskValidationError::NilId);
    }
}

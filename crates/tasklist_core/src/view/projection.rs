//! Completed/incomplete partitioning of a task snapshot.
//!
//! # Responsibility
//! - Split top-level tasks by completion state.
//! - Split each top-level task's children by completion state.
//!
//! # Invariants
//! - Every top-level task lands in exactly one top-level group.
//! - Every child of a top-level task lands in exactly one of its two groups.
//! - Group order follows store insertion order.
//! - Projection is recomputed per snapshot and never mutates it.

use crate::model::task::{Task, TaskId};
use crate::store::task_store::TaskStore;

/// One top-level task together with its partitioned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup<'a> {
    pub task: &'a Task,
    pub incomplete_children: Vec<&'a Task>,
    pub completed_children: Vec<&'a Task>,
    /// Subtask entry is offered only while the task is incomplete.
    pub accepts_subtasks: bool,
}

impl<'a> TaskGroup<'a> {
    fn build(store: &'a TaskStore, task: &'a Task) -> Self {
        let (completed_children, incomplete_children) = store
            .children_of(task.id)
            .into_iter()
            .partition(|child| child.completed);
        Self {
            task,
            incomplete_children,
            completed_children,
            accepts_subtasks: !task.completed,
        }
    }

    pub fn child_count(&self) -> usize {
        self.incomplete_children.len() + self.completed_children.len()
    }
}

/// Display grouping derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewProjection<'a> {
    pub incomplete_top_level: Vec<TaskGroup<'a>>,
    pub completed_top_level: Vec<TaskGroup<'a>>,
    /// True when the snapshot holds no tasks at all.
    pub is_empty: bool,
}

impl<'a> ViewProjection<'a> {
    /// Derives the grouping for `store`.
    pub fn project(store: &'a TaskStore) -> Self {
        let (completed_top_level, incomplete_top_level) = store
            .top_level()
            .map(|task| TaskGroup::build(store, task))
            .partition(|group| group.task.completed);
        Self {
            incomplete_top_level,
            completed_top_level,
            is_empty: store.is_empty(),
        }
    }

    pub fn incomplete_count(&self) -> usize {
        self.incomplete_top_level.len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed_top_level.len()
    }

    /// Finds the group for top-level task `id` in either partition.
    pub fn group(&self, id: TaskId) -> Option<&TaskGroup<'a>> {
        self.incomplete_top_level
            .iter()
            .chain(self.completed_top_level.iter())
            .find(|group| group.task.id == id)
    }
}

//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the task list command/query surface to Dart via FRB.
//! - Own the single process-wide `TaskSession` behind a mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Task ids cross the boundary as hyphenated UUID strings.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tasklist_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    StoreResult, Task, TaskGroup, TaskId, TaskSession,
};
use uuid::Uuid;

static SESSION: OnceLock<Mutex<TaskSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling log files.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    init_logging_inner(level.as_str(), log_dir.as_str()).err().unwrap_or_default()
}

/// One task as shown by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: String,
    pub title: String,
    pub completed: bool,
}

/// Top-level task with its partitioned subtasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroupView {
    pub task: TaskItem,
    pub incomplete_children: Vec<TaskItem>,
    pub completed_children: Vec<TaskItem>,
    /// Whether the "add subtask" affordance is offered.
    pub accepts_subtasks: bool,
    /// Whether this group's subtask entry form is currently open.
    pub entry_open: bool,
}

/// Whole board grouped by completion state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoardView {
    pub incomplete: Vec<TaskGroupView>,
    pub completed: Vec<TaskGroupView>,
    /// True when no task exists yet.
    pub is_empty: bool,
}

/// Generic action response envelope for task commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    pub ok: bool,
    /// Affected task id on success.
    pub task_id: Option<String>,
    pub message: String,
}

impl TaskActionResponse {
    fn success(message: impl Into<String>, task_id: TaskId) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }

    fn from_result(command: &str, done: &str, result: StoreResult<TaskId>) -> Self {
        match result {
            Ok(id) => Self::success(done, id),
            Err(err) => Self::failure(format!("{command} failed: {err}")),
        }
    }
}

/// Adds a top-level task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_add(title: String) -> TaskActionResponse {
    let result = lock_session().try_add_task(&title);
    TaskActionResponse::from_result("task_add", "Task added.", result)
}

/// Adds a subtask under an existing top-level task.
#[flutter_rust_bridge::frb(sync)]
pub fn subtask_add(parent_id: String, title: String) -> TaskActionResponse {
    let parent_id = match parse_task_id(&parent_id) {
        Ok(id) => id,
        Err(message) => return TaskActionResponse::failure(message),
    };
    let result = lock_session().try_add_subtask(parent_id, &title);
    TaskActionResponse::from_result("subtask_add", "Subtask added.", result)
}

/// Flips completion on one task.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle(task_id: String) -> TaskActionResponse {
    let id = match parse_task_id(&task_id) {
        Ok(id) => id,
        Err(message) => return TaskActionResponse::failure(message),
    };
    let result = lock_session().try_toggle_completion(id).map(|()| id);
    TaskActionResponse::from_result("task_toggle", "Task toggled.", result)
}

/// Opens the subtask entry form for `parent_id`, closing any other one.
///
/// Returns `false` when the id is not an incomplete top-level task.
#[flutter_rust_bridge::frb(sync)]
pub fn subtask_entry_open(parent_id: String) -> bool {
    parse_task_id(&parent_id)
        .map(|id| lock_session().open_subtask_entry(id))
        .unwrap_or(false)
}

/// Closes the subtask entry form and discards its text.
#[flutter_rust_bridge::frb(sync)]
pub fn subtask_entry_cancel() {
    lock_session().cancel_subtask_entry();
}

/// Submits `title` as a subtask of the parent whose entry form is open.
#[flutter_rust_bridge::frb(sync)]
pub fn subtask_entry_submit(title: String) -> TaskActionResponse {
    let mut session = lock_session();
    session.interaction_mut().set_subtask_draft(title);
    match session.submit_subtask() {
        Some(id) => TaskActionResponse::success("Subtask added.", id),
        None => TaskActionResponse::failure(
            "subtask_entry_submit ignored: no open entry or blank title",
        ),
    }
}

/// Returns the current board grouped for display.
#[flutter_rust_bridge::frb(sync)]
pub fn task_board() -> TaskBoardView {
    let session = lock_session();
    let entry_target = session.visible_entry_target();
    let view = session.project();
    let to_groups = |groups: &[TaskGroup<'_>]| {
        groups
            .iter()
            .map(|group| to_group_view(group, entry_target))
            .collect::<Vec<_>>()
    };
    TaskBoardView {
        incomplete: to_groups(&view.incomplete_top_level),
        completed: to_groups(&view.completed_top_level),
        is_empty: view.is_empty,
    }
}

fn lock_session() -> MutexGuard<'static, TaskSession> {
    SESSION
        .get_or_init(|| Mutex::new(TaskSession::new()))
        .lock()
        .unwrap_or_else(|poisoned| {
            warn!("event=session_lock module=ffi status=recovered reason=poisoned");
            poisoned.into_inner()
        })
}

fn parse_task_id(raw: &str) -> Result<TaskId, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid task id `{raw}`: {err}"))
}

fn to_item(task: &Task) -> TaskItem {
    TaskItem {
        task_id: task.id.to_string(),
        title: task.title.clone(),
        completed: task.completed,
    }
}

fn to_group_view(group: &TaskGroup<'_>, entry_target: Option<TaskId>) -> TaskGroupView {
    TaskGroupView {
        task: to_item(group.task),
        incomplete_children: group.incomplete_children.iter().map(|t| to_item(t)).collect(),
        completed_children: group.completed_children.iter().map(|t| to_item(t)).collect(),
        accepts_subtasks: group.accepts_subtasks,
        entry_open: entry_target == Some(group.task.id),
    }
}

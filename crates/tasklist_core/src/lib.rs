//! Core domain logic for the hierarchical task list.
//! This crate is the single source of truth for task invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{normalize_title, Task, TaskId, TaskValidationError};
pub use service::interaction::InteractionState;
pub use service::task_session::TaskSession;
pub use store::task_store::{StoreResult, TaskStore, TaskStoreError};
pub use view::projection::{TaskGroup, ViewProjection};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

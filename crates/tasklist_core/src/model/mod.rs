//! Domain model for the hierarchical task list.
//!
//! # Responsibility
//! - Define the single `Task` entity shared by store, projection and FFI.
//!
//! # Invariants
//! - Every task is identified by a stable, never reused `TaskId`.
//! - Tasks are never removed; only `completed` changes after creation.

pub mod task;

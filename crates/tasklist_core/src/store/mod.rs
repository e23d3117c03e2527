//! In-memory task storage.
//!
//! # Responsibility
//! - Own the ordered task collection as an immutable snapshot value.
//! - Expose creation and toggle commands that yield new snapshots.
//!
//! # Invariants
//! - Insertion order is preserved; tasks are never removed.
//! - Commands never mutate a snapshot the caller already holds.

pub mod task_store;

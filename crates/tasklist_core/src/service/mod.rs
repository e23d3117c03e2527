//! Use-case services over the task store.
//!
//! # Responsibility
//! - Hold the current snapshot and interaction state for one UI session.
//! - Keep UI/FFI layers decoupled from snapshot bookkeeping.

pub mod interaction;
pub mod task_session;

//! Read-side projections over task snapshots.
//!
//! # Responsibility
//! - Derive display groupings without touching the store.

pub mod projection;

//! Ordered task collection and its announcement contract.
//!
//! # Responsibility
//! - Own the in-memory list of tasks and its mutation API.
//! - Announce user-visible mutations through the injected presenter.
//!
//! # Invariants
//! - User-facing indices are 1-based and bounds-checked; out-of-range
//!   references are errors, never silent no-ops.
//! - Insertion order equals display order equals persisted order.

pub mod task_list;

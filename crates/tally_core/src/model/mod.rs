//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task shape shared by the list, the store and
//!   the command interpreter.
//!
//! # Invariants
//! - A task's description is non-empty, enforced at construction.
//! - Task identity is positional; no stable ID survives reordering.

pub mod task;

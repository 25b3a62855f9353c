//! Core domain logic for Tally.
//! This crate is the single source of truth for business invariants.

pub mod command;
pub mod list;
pub mod logging;
pub mod model;
pub mod present;
pub mod store;

pub use command::interpreter::{Flow, Interpreter};
pub use command::parse::{parse_line, Command};
pub use command::CommandError;
pub use list::task_list::{ListError, ListResult, TaskList};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{DueDate, Task, TaskDetail, TaskError};
pub use present::Presenter;
pub use store::flat_file::FlatFileStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Flat-file persistence for the task list.
//!
//! # Responsibility
//! - Rebuild the task list from the pipe-delimited data file at
//!   startup.
//! - Rewrite the full file after mutating commands.
//!
//! # Invariants
//! - Loading never fails the program; malformed records are skipped
//!   with a logged diagnostic.
//! - Write failures surface as `StoreError` for the caller to log; they
//!   are never shown to the user.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod flat_file;

pub use flat_file::FlatFileStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for data directory and file operations.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

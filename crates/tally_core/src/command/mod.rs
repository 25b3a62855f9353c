//! Command interpretation: line classification, argument extraction and
//! dispatch.
//!
//! # Responsibility
//! - Turn free-text input lines into validated task mutations.
//! - Keep the interpreter loop alive across every handled failure.
//!
//! # Invariants
//! - Each validation failure names the missing or malformed piece and
//!   is distinct from the list's range error.
//! - Malformed input never terminates the process.

use crate::list::task_list::ListError;
use crate::model::task::TaskError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod interpreter;
pub mod parse;

/// User-facing failure of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand,
    /// A delimiter-bounded field (`deadline`, `start time`, `end time`)
    /// is absent or empty.
    MissingField(&'static str),
    /// The index argument of mark/unmark/delete is missing or not an
    /// integer. Distinct from `List(OutOfRange)`.
    InvalidIndex,
    EmptyKeyword,
    Task(TaskError),
    List(ListError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand => write!(
                f,
                "Unknown command. Try: todo, deadline, event, list, mark, unmark, delete, find or bye."
            ),
            Self::MissingField(name) => write!(f, "Please fill in {name}."),
            Self::InvalidIndex => write!(f, "Please put a number."),
            Self::EmptyKeyword => write!(f, "Please enter a keyword to search for."),
            Self::Task(err) => write!(f, "{err}"),
            Self::List(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Task(err) => Some(err),
            Self::List(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskError> for CommandError {
    fn from(value: TaskError) -> Self {
        Self::Task(value)
    }
}

impl From<ListError> for CommandError {
    fn from(value: ListError) -> Self {
        Self::List(value)
    }
}

//! Task sum type and its variant payloads.
//!
//! # Responsibility
//! - Represent plain to-dos, deadlines and time-ranged events in one
//!   tagged union.
//! - Validate variant payloads at construction time.
//!
//! # Invariants
//! - `description` is non-empty after trimming.
//! - A structured-looking due value (`yyyy-MM-dd` shape) is either a
//!   valid calendar date or the construction fails; it is never kept as
//!   free text.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shape check for structured due values. Calendar validity is decided
/// by the date parse, not by this pattern.
static STRUCTURED_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape pattern is valid"));

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
const DUE_RENDER_FORMAT: &str = "%b %-d %Y";

/// Validation error raised by task constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    EmptyDescription,
    /// A due value matched the structured date shape but is not a
    /// valid calendar date.
    InvalidDate { value: String },
}

impl Display for TaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty."),
            Self::InvalidDate { value } => write!(
                f,
                "Cannot read `{value}` as a date. Please enter date in the format yyyy-MM-dd."
            ),
        }
    }
}

impl Error for TaskError {}

/// Due value of a deadline: a parsed calendar date or free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DueDate {
    Date(NaiveDate),
    Text(String),
}

impl DueDate {
    /// Resolves a raw due value.
    ///
    /// # Contract
    /// - A value matching `yyyy-MM-dd` must parse as a calendar date,
    ///   otherwise `TaskError::InvalidDate` is returned.
    /// - Any other value is stored verbatim as free text.
    pub fn parse(value: &str) -> Result<Self, TaskError> {
        let value = value.trim();
        if STRUCTURED_DATE.is_match(value) {
            return NaiveDate::parse_from_str(value, DUE_DATE_FORMAT)
                .map(Self::Date)
                .map_err(|_| TaskError::InvalidDate {
                    value: value.to_string(),
                });
        }
        Ok(Self::Text(value.to_string()))
    }

    /// Human-readable rendering, e.g. `Dec 1 2024` for parsed dates.
    pub fn render(&self) -> String {
        match self {
            Self::Date(date) => date.format(DUE_RENDER_FORMAT).to_string(),
            Self::Text(text) => text.clone(),
        }
    }

    /// Persisted-record field value; parsed dates round-trip as ISO.
    pub fn storage_value(&self) -> String {
        match self {
            Self::Date(date) => date.format(DUE_DATE_FORMAT).to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Variant payload of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetail {
    Todo,
    Deadline { due: DueDate },
    Event { start: String, end: String },
}

/// One task: description, completion flag and variant payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    detail: TaskDetail,
}

impl Task {
    /// Creates a plain to-do.
    pub fn todo(description: &str) -> Result<Self, TaskError> {
        Self::with_detail(description, TaskDetail::Todo)
    }

    /// Creates a deadline; the due value resolves to a date or free
    /// text per `DueDate::parse`.
    pub fn deadline(description: &str, due: &str) -> Result<Self, TaskError> {
        let due = DueDate::parse(due)?;
        Self::with_detail(description, TaskDetail::Deadline { due })
    }

    /// Creates a time-ranged event. Start and end are free text and the
    /// range ordering is not validated.
    pub fn event(
        description: &str,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self, TaskError> {
        Self::with_detail(
            description,
            TaskDetail::Event {
                start: start.into(),
                end: end.into(),
            },
        )
    }

    fn with_detail(description: &str, detail: TaskDetail) -> Result<Self, TaskError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        Ok(Self {
            description: description.to_string(),
            done: false,
            detail,
        })
    }

    pub fn mark_done(&mut self) {
        self.done = true;
    }

    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn detail(&self) -> &TaskDetail {
        &self.detail
    }

    /// Persisted-record type code.
    pub fn type_code(&self) -> char {
        match self.detail {
            TaskDetail::Todo => 'T',
            TaskDetail::Deadline { .. } => 'D',
            TaskDetail::Event { .. } => 'E',
        }
    }

    /// Status icon + description + variant suffix, e.g.
    /// `[D][X] submit (by: Dec 1 2024)`.
    pub fn render(&self) -> String {
        let icon = if self.done { 'X' } else { ' ' };
        let base = format!("[{}][{}] {}", self.type_code(), icon, self.description);
        match &self.detail {
            TaskDetail::Todo => base,
            TaskDetail::Deadline { due } => format!("{base} (by: {})", due.render()),
            TaskDetail::Event { start, end } => {
                format!("{base} (from: {start} to: {end})")
            }
        }
    }

    /// Trailing persisted-record field, absent for plain to-dos. Event
    /// start/end are dash-joined into one composite field.
    pub fn time_field(&self) -> Option<String> {
        match &self.detail {
            TaskDetail::Todo => None,
            TaskDetail::Deadline { due } => Some(due.storage_value()),
            TaskDetail::Event { start, end } => Some(format!("{start}-{end}")),
        }
    }
}

//! Task list operations: add, mark, unmark, delete, find, serialize.
//!
//! # Responsibility
//! - Bounds-check every 1-based index before touching a task.
//! - Compose the persisted-record text for full-file rewrites.
//!
//! # Invariants
//! - Failed operations leave the list unmodified.
//! - `find` preserves the original relative order of matches.

use crate::model::task::Task;
use crate::present::Presenter;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ListResult<T> = Result<T, ListError>;

/// Range error for 1-based list indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    OutOfRange { index: i64, len: usize },
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { index, len } => write!(
                f,
                "Task number {index} is out of range; the list has {len} task(s)."
            ),
        }
    }
}

impl Error for ListError {}

/// Ordered mutable collection of tasks.
///
/// Announcements go through the presenter injected at construction,
/// mirroring how the store and interpreter receive their collaborators.
pub struct TaskList<P: Presenter> {
    tasks: Vec<Task>,
    presenter: P,
}

impl<P: Presenter> TaskList<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            tasks: Vec::new(),
            presenter,
        }
    }

    /// Appends a task. Adds are announced by the caller, which also
    /// knows the originating command.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Marks the task at 1-based `index` as done.
    ///
    /// `announce` is false during file load so bulk reconstruction stays
    /// silent.
    pub fn mark(&mut self, index: i64, announce: bool) -> ListResult<()> {
        let slot = self.checked_slot(index)?;
        self.tasks[slot].mark_done();
        if announce {
            let rendering = self.tasks[slot].render();
            self.presenter
                .show(&format!("Nice! I've marked this task as done:\n  {rendering}"));
        }
        Ok(())
    }

    /// Marks the task at 1-based `index` as not done.
    pub fn unmark(&mut self, index: i64, announce: bool) -> ListResult<()> {
        let slot = self.checked_slot(index)?;
        self.tasks[slot].mark_not_done();
        if announce {
            let rendering = self.tasks[slot].render();
            self.presenter.show(&format!(
                "OK, I've marked this task as not done yet:\n  {rendering}"
            ));
        }
        Ok(())
    }

    /// Removes the task at 1-based `index`; later tasks shift down by
    /// one. Announces the removed rendering and the new length.
    pub fn delete(&mut self, index: i64) -> ListResult<()> {
        let slot = self.checked_slot(index)?;
        let removed = self.tasks.remove(slot);
        self.presenter.show(&format!(
            "Noted. I've removed this task:\n  {}\nNow you have {} task(s) in the list.",
            removed.render(),
            self.tasks.len()
        ));
        Ok(())
    }

    /// Case-insensitive substring search over descriptions.
    ///
    /// Announces the numbered matches, or a distinct empty-result
    /// message, and returns the matches in original order.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|task| task.description().to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            self.presenter.show("I can't find any matching tasks.");
        } else {
            let mut message = String::from("Here are the matching tasks in your list:");
            for (position, task) in matches.iter().enumerate() {
                message.push_str(&format!("\n  {}.{}", position + 1, task.render()));
            }
            self.presenter.show(&message);
        }

        matches
    }

    /// Announces the full numbered list.
    pub fn print_list(&self) {
        let mut message = String::from("Here are the tasks in your list:");
        for (position, task) in self.tasks.iter().enumerate() {
            message.push_str(&format!("\n  {}.{}", position + 1, task.render()));
        }
        self.presenter.show(&message);
    }

    /// Full persisted-record text, one pipe-delimited line per task in
    /// current order, each line newline-terminated.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (position, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!(
                "{} | {} | {} | {}",
                position + 1,
                task.type_code(),
                if task.is_done() { 1 } else { 0 },
                task.description()
            ));
            if let Some(time) = task.time_field() {
                out.push_str(&format!(" | {time}"));
            }
            out.push('\n');
        }
        out
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn checked_slot(&self, index: i64) -> ListResult<usize> {
        if index < 1 || index > self.tasks.len() as i64 {
            return Err(ListError::OutOfRange {
                index,
                len: self.tasks.len(),
            });
        }
        Ok((index - 1) as usize)
    }
}

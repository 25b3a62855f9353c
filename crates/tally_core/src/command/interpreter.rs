//! Interpreter loop: parse, dispatch, announce, persist.
//!
//! # Responsibility
//! - Drive one command through parse, mutation and persistence before
//!   the next line is read.
//! - Report every handled failure through the presenter and keep
//!   looping.
//!
//! # Invariants
//! - The list is persisted after every successfully handled command,
//!   including read-only ones; never after a failed one.
//! - Persistence failures are logged, never presented, never fatal.
//! - `bye` ends the loop without another persistence pass.

use crate::command::parse::{parse_line, Command};
use crate::command::CommandError;
use crate::list::task_list::TaskList;
use crate::model::task::Task;
use crate::present::Presenter;
use crate::store::flat_file::FlatFileStore;
use log::{debug, error};
use std::io::BufRead;

const FAREWELL: &str = "Bye. Hope to see you again soon!";
const DEADLINE_USAGE: &str = "Example: deadline assignment /by 2pm";
const EVENT_USAGE: &str = "Example: event meeting /from 2pm /to 4pm";

/// Loop control decision for one handled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Command interpreter over an injected list, store and presenter.
///
/// All collaborators arrive at construction; there is no process-wide
/// state.
pub struct Interpreter<P: Presenter> {
    tasks: TaskList<P>,
    store: FlatFileStore,
    presenter: P,
}

impl<P: Presenter> Interpreter<P> {
    pub fn new(tasks: TaskList<P>, store: FlatFileStore, presenter: P) -> Self {
        Self {
            tasks,
            store,
            presenter,
        }
    }

    pub fn tasks(&self) -> &TaskList<P> {
        &self.tasks
    }

    /// Reads lines until `bye` or end of input.
    ///
    /// # Errors
    /// - Returns the underlying read error when the input source fails;
    ///   command-level failures never surface here.
    pub fn run<R: BufRead>(&mut self, input: R) -> std::io::Result<()> {
        for line in input.lines() {
            if self.handle_line(&line?) == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Handles one input line end to end.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        match parse_line(line).and_then(|command| self.execute(command)) {
            Ok(Flow::Exit) => Flow::Exit,
            Ok(Flow::Continue) => {
                self.persist();
                Flow::Continue
            }
            Err(err) => {
                debug!("event=command module=command status=rejected error={err}");
                self.present_error(&err);
                Flow::Continue
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<Flow, CommandError> {
        match command {
            Command::Exit => {
                self.presenter.show(FAREWELL);
                return Ok(Flow::Exit);
            }
            Command::List => self.tasks.print_list(),
            Command::AddTodo { description } => {
                self.add_task(Task::todo(&description)?);
            }
            Command::AddDeadline { description, due } => {
                self.add_task(Task::deadline(&description, &due)?);
            }
            Command::AddEvent {
                description,
                start,
                end,
            } => {
                self.add_task(Task::event(&description, start, end)?);
            }
            Command::Mark(index) => self.tasks.mark(index, true)?,
            Command::Unmark(index) => self.tasks.unmark(index, true)?,
            Command::Delete(index) => self.tasks.delete(index)?,
            Command::Find { keyword } => {
                self.tasks.find(&keyword);
            }
        }
        Ok(Flow::Continue)
    }

    fn add_task(&mut self, task: Task) {
        let rendering = task.render();
        self.tasks.add(task);
        self.presenter.show(&format!(
            "Got it. I've added this task:\n  {rendering}\nNow you have {} task(s) in the list.",
            self.tasks.len()
        ));
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.tasks) {
            error!("event=persist module=command status=error error={err}");
        }
    }

    fn present_error(&self, err: &CommandError) {
        match usage_hint(err) {
            Some(example) => self.presenter.show(&format!("{err}\n{example}")),
            None => self.presenter.show(&err.to_string()),
        }
    }
}

/// Usage example appended to delimiter-field failures.
fn usage_hint(err: &CommandError) -> Option<&'static str> {
    match err {
        CommandError::MissingField("deadline") => Some(DEADLINE_USAGE),
        CommandError::MissingField("start time") | CommandError::MissingField("end time") => {
            Some(EVENT_USAGE)
        }
        _ => None,
    }
}

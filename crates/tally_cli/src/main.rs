//! Console entry point.
//!
//! # Responsibility
//! - Wire the store, list and interpreter together over stdin/stdout.
//! - Keep all framing/greeting glue out of `tally_core`.

use std::io;
use tally_core::{default_log_level, init_logging, FlatFileStore, Interpreter, Presenter, TaskList};

const DATA_DIR: &str = "data";
const DATA_FILE: &str = "tally.txt";
const GREETING: &str = "Hello! I'm Tally.\nWhat can I do for you?";
const RULE: &str = "    ____________________________________________________";

/// Frames each message between horizontal rules, indented, one console
/// block per announcement.
#[derive(Clone)]
struct ConsolePresenter;

impl Presenter for ConsolePresenter {
    fn show(&self, message: &str) {
        println!("{RULE}");
        for line in message.lines() {
            println!("      {line}");
        }
        println!("{RULE}");
    }
}

fn main() -> io::Result<()> {
    // Logging trouble must never keep the conversation from starting.
    if let Some(log_dir) = resolve_log_dir() {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("tally: logging disabled: {err}");
        }
    }

    let presenter = ConsolePresenter;
    let store = FlatFileStore::new(DATA_DIR, DATA_FILE);
    let tasks: TaskList<ConsolePresenter> = store.load(presenter.clone());

    presenter.show(GREETING);

    let stdin = io::stdin();
    let mut interpreter = Interpreter::new(tasks, store, presenter);
    interpreter.run(stdin.lock())
}

fn resolve_log_dir() -> Option<String> {
    let dir = std::env::current_dir().ok()?.join(DATA_DIR).join("logs");
    dir.to_str().map(str::to_string)
}

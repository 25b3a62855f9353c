//! Input line classification and argument extraction.
//!
//! # Responsibility
//! - Map the first whitespace token, uppercased, onto the fixed command
//!   enumeration.
//! - Extract positional and delimiter-bounded arguments exactly as the
//!   console contract defines them.
//!
//! # Invariants
//! - Description emptiness is checked before delimiter-bounded time
//!   fields are extracted.
//! - Extraction is pure over the input line; no state is touched here.

use crate::command::CommandError;
use crate::model::task::TaskError;

const BY: &str = "/by";
const FROM: &str = "/from";
const TO: &str = "/to";

/// One classified input line with its extracted arguments.
///
/// Add commands carry raw strings; date resolution happens in the task
/// constructors so load-time and interactive-add validation share one
/// path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    List,
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        due: String,
    },
    AddEvent {
        description: String,
        start: String,
        end: String,
    },
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    Find {
        keyword: String,
    },
}

/// Classifies one input line and extracts its arguments.
pub fn parse_line(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let mut parts = line.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("");

    match word.to_ascii_uppercase().as_str() {
        "BYE" => Ok(Command::Exit),
        "LIST" => Ok(Command::List),
        "TODO" => {
            let description = rest.trim();
            if description.is_empty() {
                return Err(TaskError::EmptyDescription.into());
            }
            Ok(Command::AddTodo {
                description: description.to_string(),
            })
        }
        "DEADLINE" => {
            let description = description_before(rest, BY)?;
            let due = field_after(rest, BY, "deadline")?;
            Ok(Command::AddDeadline { description, due })
        }
        "EVENT" => {
            let description = description_before(rest, FROM)?;
            let start = field_between(rest, FROM, TO, "start time")?;
            let end = field_after(rest, TO, "end time")?;
            Ok(Command::AddEvent {
                description,
                start,
                end,
            })
        }
        "MARK" => Ok(Command::Mark(parse_index(rest)?)),
        "UNMARK" => Ok(Command::Unmark(parse_index(rest)?)),
        "DELETE" => Ok(Command::Delete(parse_index(rest)?)),
        "FIND" => {
            let keyword = rest.trim();
            if keyword.is_empty() {
                return Err(CommandError::EmptyKeyword);
            }
            Ok(Command::Find {
                keyword: keyword.to_string(),
            })
        }
        _ => Err(CommandError::UnknownCommand),
    }
}

/// Text between the command keyword and the first delimiter token; the
/// whole remainder when the delimiter is absent.
fn description_before(rest: &str, delimiter: &str) -> Result<String, CommandError> {
    let text = match rest.split_once(delimiter) {
        Some((before, _)) => before,
        None => rest,
    };
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyDescription.into());
    }
    Ok(text.to_string())
}

/// Trimmed text after `delimiter`; absent or empty means the named
/// field is missing.
fn field_after(rest: &str, delimiter: &str, name: &'static str) -> Result<String, CommandError> {
    let (_, after) = rest
        .split_once(delimiter)
        .ok_or(CommandError::MissingField(name))?;
    let value = after.trim();
    if value.is_empty() {
        return Err(CommandError::MissingField(name));
    }
    Ok(value.to_string())
}

/// Trimmed text between `open` and `close`; everything after `open`
/// when `close` is absent (the missing `close` surfaces later as its
/// own field error).
fn field_between(
    rest: &str,
    open: &str,
    close: &str,
    name: &'static str,
) -> Result<String, CommandError> {
    let (_, after) = rest
        .split_once(open)
        .ok_or(CommandError::MissingField(name))?;
    let inner = match after.split_once(close) {
        Some((inner, _)) => inner,
        None => after,
    };
    let value = inner.trim();
    if value.is_empty() {
        return Err(CommandError::MissingField(name));
    }
    Ok(value.to_string())
}

/// First token of the remainder parsed as a signed integer. Range
/// checking is the list's job; negative values flow through.
fn parse_index(rest: &str) -> Result<i64, CommandError> {
    let token = rest
        .split_whitespace()
        .next()
        .ok_or(CommandError::InvalidIndex)?;
    token.parse().map_err(|_| CommandError::InvalidIndex)
}

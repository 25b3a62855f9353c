//! Pipe-delimited data file reader/writer.
//!
//! # Responsibility
//! - Ensure the data directory and file exist before the first read.
//! - Decode persisted records back into task model variants.
//!
//! # Invariants
//! - Record shape is `index | type | done | description [| time]`.
//! - A record with an unrecognized type code is skipped without a
//!   diagnostic; every other malformed record is skipped with one.
//! - Done flags are applied with the index recorded on the file line,
//!   not the task's position in the list under construction. The two
//!   diverge once an earlier line was skipped.

use crate::list::task_list::TaskList;
use crate::model::task::Task;
use crate::present::Presenter;
use crate::store::StoreResult;
use log::{debug, error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Full-rewrite persistence over one flat text file.
pub struct FlatFileStore {
    data_dir: PathBuf,
    file_path: PathBuf,
}

impl FlatFileStore {
    /// Creates a store rooted at `data_dir`, writing to `file_name`
    /// inside it. Nothing is touched until `load` or `save` runs.
    pub fn new(data_dir: impl Into<PathBuf>, file_name: &str) -> Self {
        let data_dir = data_dir.into();
        let file_path = data_dir.join(file_name);
        Self {
            data_dir,
            file_path,
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Loads the task list from the data file.
    ///
    /// # Contract
    /// - Creates the directory and file when absent.
    /// - Never fails the program: bootstrap and read errors are logged
    ///   and an empty (or partially loaded) list is returned.
    /// - Reconstruction is silent; done flags are applied with
    ///   `announce = false`.
    pub fn load<P: Presenter>(&self, presenter: P) -> TaskList<P> {
        let started_at = Instant::now();
        let mut tasks = TaskList::new(presenter);

        if let Err(err) = fs::create_dir_all(&self.data_dir) {
            error!(
                "event=store_bootstrap module=store status=error dir={} error={err}",
                self.data_dir.display()
            );
            return tasks;
        }
        if !self.file_path.exists() {
            if let Err(err) = fs::File::create(&self.file_path) {
                error!(
                    "event=store_bootstrap module=store status=error file={} error={err}",
                    self.file_path.display()
                );
                return tasks;
            }
            info!(
                "event=store_bootstrap module=store status=created file={}",
                self.file_path.display()
            );
        }

        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) => {
                error!(
                    "event=store_load module=store status=error file={} error={err}",
                    self.file_path.display()
                );
                return tasks;
            }
        };

        let mut skipped = 0usize;
        for (position, line) in content.lines().enumerate() {
            let line_no = position + 1;
            if line.trim().is_empty() {
                continue;
            }
            match decode_record(line) {
                Ok(Some((recorded_index, done, task))) => {
                    tasks.add(task);
                    if done {
                        if let Err(err) = tasks.mark(recorded_index, false) {
                            warn!(
                                "event=store_load_done module=store status=skipped line_no={line_no} error={err}"
                            );
                        }
                    }
                }
                Ok(None) => {
                    // Unrecognized type code: not loaded, not an error.
                    debug!(
                        "event=store_load_skip module=store reason=unknown_type line_no={line_no}"
                    );
                    skipped += 1;
                }
                Err(reason) => {
                    warn!(
                        "event=store_load_skip module=store reason={reason} line_no={line_no}"
                    );
                    skipped += 1;
                }
            }
        }

        info!(
            "event=store_load module=store status=ok count={} skipped={skipped} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        tasks
    }

    /// Rewrites the entire data file with the list's serialized records.
    ///
    /// Not atomic: a crash mid-write can truncate the file. Cheap and
    /// idempotent, so it runs after every handled command.
    pub fn save<P: Presenter>(&self, tasks: &TaskList<P>) -> StoreResult<()> {
        let started_at = Instant::now();
        match fs::write(&self.file_path, tasks.serialize()) {
            Ok(()) => {
                debug!(
                    "event=store_save module=store status=ok count={} duration_ms={}",
                    tasks.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error file={} error={err}",
                    self.file_path.display()
                );
                Err(err.into())
            }
        }
    }
}

/// Decodes one persisted record.
///
/// Returns `Ok(None)` for an unrecognized type code (silently skipped
/// by contract) and `Err(reason)` for every other malformed line.
fn decode_record(line: &str) -> Result<Option<(i64, bool, Task)>, String> {
    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < 4 {
        return Err(format!("short_record fields={}", fields.len()));
    }

    let recorded_index: i64 = fields[0]
        .parse()
        .map_err(|_| format!("bad_index value=`{}`", fields[0]))?;
    let done = match fields[2] {
        "0" => false,
        "1" => true,
        other => return Err(format!("bad_done_flag value=`{other}`")),
    };
    let description = fields[3];

    let task = match fields[1] {
        "T" => Task::todo(description).map_err(|err| format!("bad_todo error=`{err}`"))?,
        "D" => {
            let time = fields.get(4).ok_or("missing_deadline_time".to_string())?;
            Task::deadline(description, time)
                .map_err(|err| format!("bad_deadline error=`{err}`"))?
        }
        "E" => {
            let time = fields.get(4).ok_or("missing_event_time".to_string())?;
            let (start, end) = time
                .split_once('-')
                .ok_or_else(|| format!("bad_event_time value=`{time}`"))?;
            Task::event(description, start, end)
                .map_err(|err| format!("bad_event error=`{err}`"))?
        }
        _ => return Ok(None),
    };

    Ok(Some((recorded_index, done, task)))
}

use std::fs;
use std::path::{Path, PathBuf};
use tally_core::{FlatFileStore, Presenter, Task, TaskList};

#[derive(Clone)]
struct SilentPresenter;

impl Presenter for SilentPresenter {
    fn show(&self, _message: &str) {}
}

fn store_in(root: &Path) -> (FlatFileStore, PathBuf) {
    let data_dir = root.join("data");
    let file_path = data_dir.join("tally.txt");
    (FlatFileStore::new(data_dir, "tally.txt"), file_path)
}

fn write_data_file(file_path: &Path, content: &str) {
    fs::create_dir_all(file_path.parent().expect("data file has a parent"))
        .expect("data dir should be creatable");
    fs::write(file_path, content).expect("data file should be writable");
}

#[test]
fn load_creates_directory_and_file_and_returns_empty_list() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, file_path) = store_in(root.path());

    let tasks = store.load(SilentPresenter);
    assert!(tasks.is_empty());
    assert!(file_path.exists());

    // A second load over the freshly created file is a no-op.
    let tasks = store.load(SilentPresenter);
    assert!(tasks.is_empty());
}

#[test]
fn save_then_load_round_trips_descriptions_types_and_done_flags() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, _) = store_in(root.path());
    store.load(SilentPresenter);

    let mut tasks = TaskList::new(SilentPresenter);
    tasks.add(Task::todo("read book").unwrap());
    tasks.add(Task::deadline("submit report", "2024-12-01").unwrap());
    tasks.add(Task::deadline("call mum", "next tuesday").unwrap());
    tasks.add(Task::event("camp trip", "mon", "fri").unwrap());
    tasks.mark(2, false).unwrap();
    store.save(&tasks).expect("save should succeed");

    let reloaded = store.load(SilentPresenter);
    assert_eq!(reloaded.len(), 4);

    let expected = [
        ("read book", 'T', false),
        ("submit report", 'D', true),
        ("call mum", 'D', false),
        ("camp trip", 'E', false),
    ];
    for (task, (description, type_code, done)) in reloaded.tasks().iter().zip(expected) {
        assert_eq!(task.description(), description);
        assert_eq!(task.type_code(), type_code);
        assert_eq!(task.is_done(), done);
    }

    // Reloaded deadline renders from the parsed date again.
    assert_eq!(
        reloaded.tasks()[1].render(),
        "[D][X] submit report (by: Dec 1 2024)"
    );
}

#[test]
fn unknown_type_codes_are_skipped_silently() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, file_path) = store_in(root.path());
    write_data_file(
        &file_path,
        "1 | T | 0 | alpha\n2 | X | 0 | mystery\n3 | T | 0 | beta\n",
    );

    let tasks = store.load(SilentPresenter);
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks.tasks()[0].description(), "alpha");
    assert_eq!(tasks.tasks()[1].description(), "beta");
}

#[test]
fn malformed_records_are_skipped_without_aborting_the_load() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, file_path) = store_in(root.path());
    write_data_file(
        &file_path,
        "1 | T | 0\n\
         one | T | 0 | bad index\n\
         2 | D | 0 | submit | 2024-13-40\n\
         3 | E | 0 | trip | no dash here\n\
         4 | T | 0 | survivor\n",
    );

    let tasks = store.load(SilentPresenter);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.tasks()[0].description(), "survivor");
}

#[test]
fn done_flags_follow_the_recorded_index_not_the_list_position() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, file_path) = store_in(root.path());
    // Line 2 is skipped, so `beta` lands at position 2 while its done
    // flag was recorded under index 3. At that point the list under
    // construction only holds two tasks, so the flag is dropped.
    write_data_file(
        &file_path,
        "1 | T | 0 | alpha\n\
         2 | X | 0 | mystery\n\
         3 | T | 1 | beta\n",
    );

    let tasks = store.load(SilentPresenter);
    assert_eq!(tasks.len(), 2);
    assert!(!tasks.tasks()[0].is_done());
    assert!(!tasks.tasks()[1].is_done());
}

#[test]
fn recorded_done_index_can_mark_an_earlier_task() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, file_path) = store_in(root.path());
    // Duplicate recorded indices: beta's done flag lands on alpha.
    write_data_file(&file_path, "1 | T | 0 | alpha\n1 | T | 1 | beta\n");

    let tasks = store.load(SilentPresenter);
    assert_eq!(tasks.len(), 2);
    assert!(tasks.tasks()[0].is_done());
    assert!(!tasks.tasks()[1].is_done());
}

#[test]
fn out_of_range_recorded_done_index_is_ignored() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, file_path) = store_in(root.path());
    write_data_file(&file_path, "1 | X | 0 | mystery\n2 | T | 1 | alpha\n");

    let tasks = store.load(SilentPresenter);
    assert_eq!(tasks.len(), 1);
    assert!(!tasks.tasks()[0].is_done());
}

#[test]
fn free_text_deadline_round_trips_verbatim() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, file_path) = store_in(root.path());
    write_data_file(&file_path, "1 | D | 0 | call mum | next tuesday\n");

    let tasks = store.load(SilentPresenter);
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.serialize(), "1 | D | 0 | call mum | next tuesday\n");
}

#[test]
fn blank_lines_are_ignored() {
    let root = tempfile::tempdir().expect("temp dir should be creatable");
    let (store, file_path) = store_in(root.path());
    write_data_file(&file_path, "\n1 | T | 0 | alpha\n\n");

    let tasks = store.load(SilentPresenter);
    assert_eq!(tasks.len(), 1);
}

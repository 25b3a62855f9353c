use std::cell::RefCell;
use std::rc::Rc;
use tally_core::{ListError, Presenter, Task, TaskList};

#[derive(Clone, Default)]
struct RecordingPresenter {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingPresenter {
    fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    fn last(&self) -> String {
        self.messages.borrow().last().cloned().unwrap_or_default()
    }
}

impl Presenter for RecordingPresenter {
    fn show(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn sample_list(presenter: RecordingPresenter) -> TaskList<RecordingPresenter> {
    let mut list = TaskList::new(presenter);
    list.add(Task::todo("read book").unwrap());
    list.add(Task::deadline("submit report", "2024-12-01").unwrap());
    list.add(Task::event("camp trip", "mon", "fri").unwrap());
    list
}

#[test]
fn mark_then_unmark_restores_state_without_cross_task_effects() {
    let presenter = RecordingPresenter::default();
    let mut list = sample_list(presenter.clone());

    list.mark(2, true).unwrap();
    assert!(list.tasks()[1].is_done());
    assert!(!list.tasks()[0].is_done());
    assert!(!list.tasks()[2].is_done());

    list.unmark(2, true).unwrap();
    assert!(list.tasks().iter().all(|task| !task.is_done()));
}

#[test]
fn mark_announces_only_when_asked() {
    let presenter = RecordingPresenter::default();
    let mut list = sample_list(presenter.clone());

    list.mark(1, false).unwrap();
    assert!(presenter.messages().is_empty());

    list.mark(2, true).unwrap();
    let announcement = presenter.last();
    assert!(announcement.contains("marked this task as done"));
    assert!(announcement.contains("[D][X] submit report (by: Dec 1 2024)"));
}

#[test]
fn delete_shifts_later_tasks_down_by_one() {
    let presenter = RecordingPresenter::default();
    let mut list = sample_list(presenter.clone());

    list.delete(1).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list.tasks()[0].description(), "submit report");
    assert_eq!(list.tasks()[1].description(), "camp trip");

    let announcement = presenter.last();
    assert!(announcement.contains("[T][ ] read book"));
    assert!(announcement.contains("2 task(s)"));
}

#[test]
fn out_of_range_indices_fail_and_leave_the_list_unmodified() {
    let presenter = RecordingPresenter::default();
    let mut list = sample_list(presenter.clone());

    assert_eq!(
        list.mark(0, true),
        Err(ListError::OutOfRange { index: 0, len: 3 })
    );
    assert_eq!(
        list.mark(4, true),
        Err(ListError::OutOfRange { index: 4, len: 3 })
    );
    assert_eq!(
        list.delete(-1),
        Err(ListError::OutOfRange { index: -1, len: 3 })
    );
    assert_eq!(
        list.unmark(4, true),
        Err(ListError::OutOfRange { index: 4, len: 3 })
    );

    assert_eq!(list.len(), 3);
    assert!(list.tasks().iter().all(|task| !task.is_done()));
    assert!(presenter.messages().is_empty());
}

#[test]
fn find_is_case_insensitive_and_preserves_order() {
    let presenter = RecordingPresenter::default();
    let mut list = TaskList::new(presenter.clone());
    list.add(Task::todo("Read Book").unwrap());
    list.add(Task::todo("buy milk").unwrap());
    list.add(Task::todo("reread notes").unwrap());

    let matches = list.find("READ");
    let descriptions: Vec<&str> = matches.iter().map(|task| task.description()).collect();
    assert_eq!(descriptions, vec!["Read Book", "reread notes"]);
    assert!(presenter.last().contains("matching tasks"));
}

#[test]
fn find_reports_empty_results_distinctly() {
    let presenter = RecordingPresenter::default();
    let list = sample_list(presenter.clone());

    let matches = list.find("spaceship");
    assert!(matches.is_empty());
    assert_eq!(presenter.last(), "I can't find any matching tasks.");
}

#[test]
fn serialize_writes_one_record_per_task_in_order() {
    let presenter = RecordingPresenter::default();
    let mut list = sample_list(presenter);
    list.mark(3, false).unwrap();

    assert_eq!(
        list.serialize(),
        "1 | T | 0 | read book\n\
         2 | D | 0 | submit report | 2024-12-01\n\
         3 | E | 1 | camp trip | mon-fri\n"
    );
}

#[test]
fn serialize_of_empty_list_is_empty() {
    let list = TaskList::new(RecordingPresenter::default());
    assert!(list.is_empty());
    assert_eq!(list.serialize(), "");
}

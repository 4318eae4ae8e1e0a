//! Domain-focused tests for task value types and the aggregate.

use crate::task::domain::{Task, TaskDomainError, TaskStatus, TaskTitle};
use eyre::ensure;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn task_title_accepts_and_trims_valid_values() {
    let title = TaskTitle::new("  Build login page  ").expect("valid title");
    assert_eq!(title.as_str(), "Build login page");
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_title_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn task_title_rejects_values_over_100_characters() {
    let raw = "t".repeat(101);
    assert_eq!(
        TaskTitle::new(raw),
        Err(TaskDomainError::TitleTooLong { limit: 100 })
    );
}

#[rstest]
fn task_title_accepts_exactly_100_characters() {
    let raw = "t".repeat(100);
    assert!(TaskTitle::new(raw).is_ok());
}

#[rstest]
#[case("To-do", TaskStatus::ToDo)]
#[case("In Progress", TaskStatus::InProgress)]
#[case("Done", TaskStatus::Done)]
fn task_status_parses_canonical_strings(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
    assert_eq!(expected.as_str(), raw);
}

#[rstest]
#[case("to-do")]
#[case("done")]
#[case("Blocked")]
#[case("")]
fn task_status_rejects_unknown_strings(#[case] raw: &str) {
    assert!(TaskStatus::try_from(raw).is_err());
}

#[rstest]
fn task_new_starts_in_todo_with_equal_timestamps(clock: DefaultClock) {
    let title = TaskTitle::new("Wire up telemetry").expect("valid title");
    let task = Task::new(title, Vec::new(), None, None, &clock);

    assert_eq!(task.status(), TaskStatus::ToDo);
    assert_eq!(task.created_at(), task.updated_at());
    assert!(task.developer_id().is_none());
    assert!(task.parent_task_id().is_none());
}

#[rstest]
fn task_mutations_touch_updated_at(clock: DefaultClock) -> eyre::Result<()> {
    let title = TaskTitle::new("Harden rate limiter")?;
    let mut task = Task::new(title, Vec::new(), None, None, &clock);
    let created_at = task.created_at();

    task.set_status(TaskStatus::InProgress, &clock);
    ensure!(task.status() == TaskStatus::InProgress);
    ensure!(task.updated_at() >= created_at);

    task.assign_developer(None, &clock);
    ensure!(task.created_at() == created_at);
    Ok(())
}

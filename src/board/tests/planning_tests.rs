//! Unit tests for the due-date and time-tracking dashboard queries.

use crate::board::services::{
    CALENDAR_DAYS, NO_DUE_DATE_DAYS, Priority, PriorityMatrix, TIMELINE_DAYS, TOP_TRACKED_LIMIT,
    TaskEntry, calendar, days_until, timeline, top_tracked, upcoming_deadlines,
};
use crate::task::domain::{PersistedTaskData, Project, Task, TaskId, TaskStatus};
use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc, Weekday};
use eyre::ensure;
use rstest::{fixture, rstest};

/// Monday 10 March 2025.
#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

fn due_in(now: DateTime<Utc>, days: Option<u64>) -> Option<NaiveDate> {
    days.and_then(|offset| now.date_naive().checked_add_days(Days::new(offset)))
}

fn task(title: &str, status: TaskStatus, due: Option<NaiveDate>, seconds: u64) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: title.to_owned(),
        assignee: None,
        status,
        due,
        subtasks: Vec::new(),
        tracked_seconds: seconds,
        running: false,
        running_since: None,
        created_at: None,
    })
}

fn project(name: &str, tasks: Vec<Task>) -> Project {
    let document = serde_json::json!({
        "id": name,
        "name": name,
        "color": "bg-blue-500",
        "tasks": tasks,
    });
    serde_json::from_value(document).expect("valid project document")
}

fn titles(entries: &[TaskEntry]) -> Vec<&str> {
    entries.iter().map(|entry| entry.title.as_str()).collect()
}

#[rstest]
#[case(Some(1), true, false, true, false, Priority::High)]
#[case(Some(2), true, false, false, false, Priority::High)]
#[case(Some(3), false, true, false, false, Priority::Medium)]
#[case(Some(6), false, true, false, false, Priority::Medium)]
#[case(Some(7), false, false, false, true, Priority::Medium)]
#[case(Some(8), false, false, false, true, Priority::Low)]
#[case(None, false, false, false, true, Priority::Low)]
fn backlog_task_lands_in_quadrants_by_days_until_due(
    now: DateTime<Utc>,
    #[case] offset: Option<u64>,
    #[case] urgent_important: bool,
    #[case] important: bool,
    #[case] urgent: bool,
    #[case] neither: bool,
    #[case] priority: Priority,
) {
    let projects = [project(
        "Site",
        vec![task("Card", TaskStatus::Backlog, due_in(now, offset), 0)],
    )];

    let matrix = PriorityMatrix::build(&projects, now);

    assert_eq!(matrix.urgent_important.len() == 1, urgent_important);
    assert_eq!(matrix.important.len() == 1, important);
    assert_eq!(matrix.urgent.len() == 1, urgent);
    assert_eq!(matrix.neither.len() == 1, neither);
    let entry = matrix
        .urgent_important
        .iter()
        .chain(&matrix.important)
        .chain(&matrix.neither)
        .next()
        .expect("every backlog case lands in some quadrant");
    assert_eq!(entry.priority(), priority);
}

#[rstest]
fn done_tasks_leave_the_matrix(now: DateTime<Utc>) {
    let projects = [project(
        "Site",
        vec![
            task("Shipped", TaskStatus::Done, due_in(now, Some(1)), 0),
            task("Archived", TaskStatus::Done, None, 0),
        ],
    )];

    let matrix = PriorityMatrix::build(&projects, now);

    assert_eq!(matrix, PriorityMatrix::default());
}

#[rstest]
fn started_tasks_are_never_urgent_only_or_neither(now: DateTime<Utc>) {
    let projects = [project(
        "Site",
        vec![
            task("Soon", TaskStatus::InProgress, due_in(now, Some(0)), 0),
            task("Later", TaskStatus::Review, None, 0),
        ],
    )];

    let matrix = PriorityMatrix::build(&projects, now);

    assert_eq!(titles(&matrix.urgent_important), ["Soon"]);
    assert!(matrix.urgent.is_empty());
    assert!(matrix.neither.is_empty());
}

#[rstest]
fn overdue_dates_count_negative_days(now: DateTime<Utc>) {
    let today = now.date_naive();

    assert_eq!(days_until(today.checked_sub_days(Days::new(3)), today), -3);
    assert_eq!(days_until(Some(today), today), 0);
    assert_eq!(days_until(None, today), NO_DUE_DATE_DAYS);
}

#[rstest]
fn top_tracked_keeps_five_busiest_tasks(now: DateTime<Utc>) -> eyre::Result<()> {
    let projects = [
        project(
            "Site",
            vec![
                task("Idle", TaskStatus::Backlog, None, 0),
                task("Copy", TaskStatus::Done, None, 300),
                task("Layout", TaskStatus::Review, None, 900),
                task("Images", TaskStatus::InProgress, None, 120),
            ],
        ),
        project(
            "App",
            vec![
                task("Login", TaskStatus::Done, None, 600),
                task("Payments", TaskStatus::InProgress, None, 1_800),
                task("Push", TaskStatus::Backlog, None, 60),
                task("Themes", TaskStatus::Backlog, None, 300),
            ],
        ),
    ];

    let top = top_tracked(&projects, now, TOP_TRACKED_LIMIT);

    ensure!(titles(&top) == ["Payments", "Layout", "Login", "Copy", "Themes"]);
    ensure!(top.iter().all(|entry| entry.tracked_seconds > 0));
    Ok(())
}

#[rstest]
fn top_tracked_skips_untracked_tasks(now: DateTime<Utc>) {
    let projects = [project(
        "Site",
        vec![task("Idle", TaskStatus::Backlog, None, 0)],
    )];

    assert!(top_tracked(&projects, now, TOP_TRACKED_LIMIT).is_empty());
}

#[rstest]
fn upcoming_deadlines_are_open_and_earliest_first(now: DateTime<Utc>) {
    let projects = [project(
        "Site",
        vec![
            task("Late", TaskStatus::Backlog, due_in(now, Some(9)), 0),
            task("Finished", TaskStatus::Done, due_in(now, Some(1)), 0),
            task("Undated", TaskStatus::Backlog, None, 0),
            task("Next", TaskStatus::Review, due_in(now, Some(2)), 0),
        ],
    )];

    let upcoming = upcoming_deadlines(&projects, now, 1);

    assert_eq!(titles(&upcoming), ["Next"]);
}

#[rstest]
fn timeline_groups_the_next_seven_days(now: DateTime<Utc>) -> eyre::Result<()> {
    let projects = [project(
        "Site",
        vec![
            task("Today", TaskStatus::Backlog, due_in(now, Some(0)), 0),
            task("Friday", TaskStatus::Done, due_in(now, Some(4)), 0),
            task("Also Friday", TaskStatus::Review, due_in(now, Some(4)), 0),
            task("Next week", TaskStatus::Backlog, due_in(now, Some(7)), 0),
            task("Undated", TaskStatus::Backlog, None, 0),
        ],
    )];

    let days = timeline(&projects, now);

    ensure!(days.len() == TIMELINE_DAYS);
    ensure!(days.first().map(|day| day.date) == Some(now.date_naive()));
    let counts: Vec<usize> = days.iter().map(|day| day.tasks.len()).collect();
    ensure!(counts == [1, 0, 0, 0, 2, 0, 0]);
    let friday = days
        .get(4)
        .ok_or_else(|| eyre::eyre!("timeline is missing day 4"))?;
    ensure!(titles(&friday.tasks) == ["Friday", "Also Friday"]);
    Ok(())
}

#[rstest]
fn calendar_starts_on_sunday_of_the_current_week(now: DateTime<Utc>) -> eyre::Result<()> {
    let sunday = NaiveDate::from_ymd_opt(2025, 3, 9);
    let projects = [project(
        "Site",
        vec![task("Retro", TaskStatus::Backlog, sunday, 0)],
    )];

    let grid = calendar(&projects, now);

    ensure!(grid.len() == CALENDAR_DAYS);
    let first = grid
        .first()
        .ok_or_else(|| eyre::eyre!("calendar is empty"))?;
    ensure!(Some(first.date) == sunday);
    ensure!(first.date.weekday() == Weekday::Sun);
    ensure!(titles(&first.tasks) == ["Retro"]);
    ensure!(grid.last().map(|day| day.date) == NaiveDate::from_ymd_opt(2025, 4, 12));
    Ok(())
}

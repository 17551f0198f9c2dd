//! Due-date and time-tracking queries behind the dashboard views.
//!
//! Every query is pure: it takes the projects and the current instant and
//! returns task entries in display order.

use crate::task::domain::{Project, ProjectId, Task, TaskId, TaskStatus};
use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use serde::Serialize;

/// Days-until-due value used for tasks without a due date.
pub const NO_DUE_DATE_DAYS: i64 = 999;

/// Number of entries in the time-tracking leaderboard.
pub const TOP_TRACKED_LIMIT: usize = 5;

/// Number of entries in the upcoming-deadline list.
pub const UPCOMING_DEADLINE_LIMIT: usize = 6;

/// Number of days shown on the timeline, starting today.
pub const TIMELINE_DAYS: usize = 7;

/// Number of days in the calendar grid: five weeks starting on Sunday.
pub const CALENDAR_DAYS: usize = 35;

/// Flattened view of one task for dashboard lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskEntry {
    /// Owning project.
    pub project_id: ProjectId,
    /// Task identifier.
    pub task_id: TaskId,
    /// Task title.
    pub title: String,
    /// Canonical status.
    pub status: TaskStatus,
    /// Assignee, if any.
    pub assignee: Option<String>,
    /// Due date, if any.
    pub due: Option<NaiveDate>,
    /// Tracked seconds including a running timer.
    pub tracked_seconds: u64,
    /// Whole days from today until the due date.
    pub days_until_due: i64,
}

impl TaskEntry {
    fn new(project: &Project, task: &Task, now: DateTime<Utc>) -> Self {
        Self {
            project_id: project.id().clone(),
            task_id: task.id().clone(),
            title: task.title().to_owned(),
            status: task.status(),
            assignee: task.assignee().map(str::to_owned),
            due: task.due(),
            tracked_seconds: task.tracked_seconds_at(now),
            days_until_due: days_until(task.due(), now.date_naive()),
        }
    }

    /// Returns the scheduling priority derived from the due date.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        Priority::from_days_until_due(self.days_until_due)
    }
}

/// Returns the whole calendar days from `today` until `due`.
///
/// Overdue dates are negative; a missing date yields [`NO_DUE_DATE_DAYS`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use projectboard::board::services::{NO_DUE_DATE_DAYS, days_until};
///
/// let today = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
/// assert_eq!(days_until(NaiveDate::from_ymd_opt(2025, 3, 12), today), 2);
/// assert_eq!(days_until(None, today), NO_DUE_DATE_DAYS);
/// ```
#[must_use]
pub fn days_until(due: Option<NaiveDate>, today: NaiveDate) -> i64 {
    due.map_or(NO_DUE_DATE_DAYS, |date| {
        date.signed_duration_since(today).num_days()
    })
}

/// Scheduling priority from the resource allocation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Priority {
    /// Due within two days or overdue.
    High,
    /// Due within a week.
    Medium,
    /// Due later or undated.
    Low,
}

impl Priority {
    /// Classifies a days-until-due value.
    #[must_use]
    pub const fn from_days_until_due(days: i64) -> Self {
        if days <= 2 {
            Self::High
        } else if days <= 7 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Urgency/importance matrix.
///
/// The quadrants are independent filters, so a task may appear in more than
/// one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityMatrix {
    /// Open tasks due within two days (including overdue ones).
    pub urgent_important: Vec<TaskEntry>,
    /// Open tasks due in three to six days.
    pub important: Vec<TaskEntry>,
    /// Backlog tasks due within a day (including overdue ones).
    pub urgent: Vec<TaskEntry>,
    /// Backlog tasks due in a week or later, or undated.
    pub neither: Vec<TaskEntry>,
}

impl PriorityMatrix {
    /// Sorts the tasks of `projects` into quadrants as of `now`.
    #[must_use]
    pub fn build(projects: &[Project], now: DateTime<Utc>) -> Self {
        let mut matrix = Self::default();
        for entry in entries(projects, now) {
            let days = entry.days_until_due;
            let open = !entry.status.is_done();
            let backlog = entry.status == TaskStatus::Backlog;
            if days <= 2 && open {
                matrix.urgent_important.push(entry.clone());
            }
            if days > 2 && days < 7 && open {
                matrix.important.push(entry.clone());
            }
            if days <= 1 && backlog {
                matrix.urgent.push(entry.clone());
            }
            if days >= 7 && backlog {
                matrix.neither.push(entry);
            }
        }
        matrix
    }
}

/// Tasks due on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAgenda {
    /// The calendar day.
    pub date: NaiveDate,
    /// Tasks due that day, in project and task order.
    pub tasks: Vec<TaskEntry>,
}

/// Returns the tasks with tracked time, most tracked first, at most `limit`.
///
/// Ties keep project and task order.
#[must_use]
pub fn top_tracked(projects: &[Project], now: DateTime<Utc>, limit: usize) -> Vec<TaskEntry> {
    let mut tracked: Vec<_> = entries(projects, now)
        .filter(|entry| entry.tracked_seconds > 0)
        .collect();
    tracked.sort_by(|left, right| right.tracked_seconds.cmp(&left.tracked_seconds));
    tracked.truncate(limit);
    tracked
}

/// Returns open tasks with a due date, earliest first, at most `limit`.
#[must_use]
pub fn upcoming_deadlines(
    projects: &[Project],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<TaskEntry> {
    let mut upcoming: Vec<_> = entries(projects, now)
        .filter(|entry| entry.due.is_some() && !entry.status.is_done())
        .collect();
    upcoming.sort_by_key(|entry| entry.due);
    upcoming.truncate(limit);
    upcoming
}

/// Returns the next [`TIMELINE_DAYS`] days starting today with the tasks due
/// on each.
#[must_use]
pub fn timeline(projects: &[Project], now: DateTime<Utc>) -> Vec<DayAgenda> {
    agenda(projects, now, now.date_naive(), TIMELINE_DAYS)
}

/// Returns the [`CALENDAR_DAYS`]-day grid starting on the Sunday of the
/// current week with the tasks due on each day.
#[must_use]
pub fn calendar(projects: &[Project], now: DateTime<Utc>) -> Vec<DayAgenda> {
    let today = now.date_naive();
    let since_sunday = Days::new(u64::from(today.weekday().num_days_from_sunday()));
    let start = today.checked_sub_days(since_sunday).unwrap_or(today);
    agenda(projects, now, start, CALENDAR_DAYS)
}

fn agenda(
    projects: &[Project],
    now: DateTime<Utc>,
    start: NaiveDate,
    days: usize,
) -> Vec<DayAgenda> {
    let dated: Vec<_> = entries(projects, now)
        .filter(|entry| entry.due.is_some())
        .collect();
    start
        .iter_days()
        .take(days)
        .map(|date| DayAgenda {
            date,
            tasks: dated
                .iter()
                .filter(|entry| entry.due == Some(date))
                .cloned()
                .collect(),
        })
        .collect()
}

fn entries(projects: &[Project], now: DateTime<Utc>) -> impl Iterator<Item = TaskEntry> + '_ {
    projects.iter().flat_map(move |project| {
        project
            .tasks()
            .iter()
            .map(move |task| TaskEntry::new(project, task, now))
    })
}

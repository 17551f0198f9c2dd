//! Task aggregate, subtask checklist entries, and time tracking.

use super::{SubtaskId, TaskDomainError, TaskId, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// Checklist entry attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    id: SubtaskId,
    title: String,
    done: bool,
}

impl Subtask {
    /// Creates an open subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySubtaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let validated = non_empty(title.into()).ok_or(TaskDomainError::EmptySubtaskTitle)?;
        Ok(Self {
            id: SubtaskId::new(),
            title: validated,
            done: false,
        })
    }

    /// Returns the subtask identifier.
    #[must_use]
    pub const fn id(&self) -> &SubtaskId {
        &self.id
    }

    /// Returns the subtask title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the subtask has been ticked off.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }
}

/// Task record tracked inside a project.
///
/// The `status` field is the single source of truth for the task lifecycle.
/// Time tracking accumulates whole seconds; while the timer runs the start
/// instant is kept in `running_since` and folded into `tracked_seconds` when
/// the timer stops.
///
/// Documents from older clients carry only a `running` flag. Such a timer
/// counts as running but accrues nothing until [`Task::resume_timer`] anchors
/// it to a start instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignee: Option<String>,
    status: TaskStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_due"
    )]
    due: Option<NaiveDate>,
    #[serde(default)]
    subtasks: Vec<Subtask>,
    #[serde(default, rename = "seconds")]
    tracked_seconds: u64,
    #[serde(default)]
    running: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    running_since: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted assignee, if any.
    pub assignee: Option<String>,
    /// Persisted canonical status.
    pub status: TaskStatus,
    /// Persisted due date, if any.
    pub due: Option<NaiveDate>,
    /// Persisted subtasks.
    pub subtasks: Vec<Subtask>,
    /// Seconds accumulated by completed timer runs.
    pub tracked_seconds: u64,
    /// Whether the timer was running when the task was stored.
    pub running: bool,
    /// Start of the running timer, if known.
    pub running_since: Option<DateTime<Utc>>,
    /// Persisted creation timestamp, absent for tasks from older clients.
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new task in [`TaskStatus::Backlog`] with no tracked time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn new(title: impl Into<String>, clock: &impl Clock) -> Result<Self, TaskDomainError> {
        let validated = non_empty(title.into()).ok_or(TaskDomainError::EmptyTaskTitle)?;
        Ok(Self {
            id: TaskId::new(),
            title: validated,
            assignee: None,
            status: TaskStatus::Backlog,
            due: None,
            subtasks: Vec::new(),
            tracked_seconds: 0,
            running: false,
            running_since: None,
            created_at: Some(clock.utc()),
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            assignee: data.assignee,
            status: data.status,
            due: data.due,
            subtasks: data.subtasks,
            tracked_seconds: data.tracked_seconds,
            running: data.running || data.running_since.is_some(),
            running_since: data.running_since,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the canonical status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due(&self) -> Option<NaiveDate> {
        self.due
    }

    /// Returns the subtask checklist.
    #[must_use]
    pub fn subtasks(&self) -> &[Subtask] {
        &self.subtasks
    }

    /// Returns the creation timestamp, if it was recorded.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns whether the timer is currently running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running || self.running_since.is_some()
    }

    /// Returns the seconds accumulated by completed timer runs.
    #[must_use]
    pub const fn tracked_seconds(&self) -> u64 {
        self.tracked_seconds
    }

    /// Returns the tracked seconds including the running timer up to `now`.
    #[must_use]
    pub fn tracked_seconds_at(&self, now: DateTime<Utc>) -> u64 {
        let running = self
            .running_since
            .map_or(0, |since| elapsed_seconds(since, now));
        self.tracked_seconds.saturating_add(running)
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskTitle`] when the title is empty
    /// after trimming.
    pub fn rename(&mut self, title: impl Into<String>) -> Result<(), TaskDomainError> {
        self.title = non_empty(title.into()).ok_or(TaskDomainError::EmptyTaskTitle)?;
        Ok(())
    }

    /// Sets or clears the assignee. Blank names clear it.
    pub fn assign(&mut self, assignee: Option<String>) {
        self.assignee = assignee.and_then(non_empty);
    }

    /// Sets or clears the due date.
    pub const fn set_due(&mut self, due: Option<NaiveDate>) {
        self.due = due;
    }

    /// Stores a new canonical status, returning whether it changed.
    pub fn set_status(&mut self, status: TaskStatus) -> bool {
        let changed = self.status != status;
        self.status = status;
        changed
    }

    /// Appends an open subtask and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptySubtaskTitle`] when the title is empty
    /// after trimming.
    pub fn add_subtask(&mut self, title: impl Into<String>) -> Result<SubtaskId, TaskDomainError> {
        let subtask = Subtask::new(title)?;
        let id = subtask.id().clone();
        self.subtasks.push(subtask);
        Ok(id)
    }

    /// Flips the completion flag of a subtask and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SubtaskNotFound`] when the subtask does not
    /// belong to this task.
    pub fn toggle_subtask(&mut self, subtask_id: &SubtaskId) -> Result<bool, TaskDomainError> {
        let subtask = self
            .subtasks
            .iter_mut()
            .find(|subtask| subtask.id == *subtask_id)
            .ok_or_else(|| TaskDomainError::SubtaskNotFound(subtask_id.clone()))?;
        subtask.done = !subtask.done;
        Ok(subtask.done)
    }

    /// Removes a subtask.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::SubtaskNotFound`] when the subtask does not
    /// belong to this task.
    pub fn remove_subtask(&mut self, subtask_id: &SubtaskId) -> Result<Subtask, TaskDomainError> {
        let position = self
            .subtasks
            .iter()
            .position(|subtask| subtask.id == *subtask_id)
            .ok_or_else(|| TaskDomainError::SubtaskNotFound(subtask_id.clone()))?;
        Ok(self.subtasks.remove(position))
    }

    /// Starts the timer. Returns `false` when it was already running.
    pub fn start_timer(&mut self, clock: &impl Clock) -> bool {
        if self.is_running() {
            return false;
        }
        self.running = true;
        self.running_since = Some(clock.utc());
        true
    }

    /// Stops the timer and folds the elapsed whole seconds into the total.
    ///
    /// Returns `false` when the timer was not running.
    pub fn stop_timer(&mut self, clock: &impl Clock) -> bool {
        if !self.is_running() {
            return false;
        }
        self.running = false;
        if let Some(since) = self.running_since.take() {
            self.tracked_seconds = self
                .tracked_seconds
                .saturating_add(elapsed_seconds(since, clock.utc()));
        }
        true
    }

    /// Anchors a running timer that has no start instant at `now`.
    ///
    /// Returns `true` when the timer was anchored.
    pub fn resume_timer(&mut self, now: DateTime<Utc>) -> bool {
        if !self.running || self.running_since.is_some() {
            return false;
        }
        self.running_since = Some(now);
        true
    }

    /// Starts a stopped timer or stops a running one. Returns whether the
    /// timer is running afterwards.
    pub fn toggle_timer(&mut self, clock: &impl Clock) -> bool {
        if self.is_running() {
            self.stop_timer(clock);
            false
        } else {
            self.start_timer(clock)
        }
    }
}

/// Renders a second count as `HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use projectboard::task::domain::format_hms;
///
/// assert_eq!(format_hms(3_725), "01:02:05");
/// ```
#[must_use]
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds.div_euclid(3_600);
    let minutes = seconds.rem_euclid(3_600).div_euclid(60);
    let remainder = seconds.rem_euclid(60);
    format!("{hours:02}:{minutes:02}:{remainder:02}")
}

/// Reads a stored due date, accepting blank strings (cleared date inputs) and
/// full ISO timestamps, of which only the date part is kept.
fn deserialize_due<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(D::Error::custom)
}

fn elapsed_seconds(since: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    u64::try_from((now - since).num_seconds()).unwrap_or(0)
}

pub(super) fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

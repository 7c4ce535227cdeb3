//! Task Creation Workflow
//!
//! Form state for a new task, local validation, payload building, and the
//! create-then-refresh round trip.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::api::TaskApi;
use crate::error::ApiError;
use crate::models::{Id, NewTask, Priority, Task, TaskQuery, TaskStatus, TaskUpdate};

/// Raw form fields, as the inputs hold them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Selected user id; empty means "Select a user..."
    pub assignee: String,
    /// `YYYY-MM-DD` from a date input, or empty
    pub due_date: String,
}

impl TaskDraft {
    /// Reset after a successful create; priority carries over
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.assignee.clear();
        self.due_date.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateTaskError {
    MissingAssignee,
    MissingProject,
    MissingTitle,
    InvalidDueDate(String),
    Request(ApiError),
}

impl std::fmt::Display for CreateTaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateTaskError::MissingAssignee => write!(f, "Please assign the task to a user."),
            CreateTaskError::MissingProject => write!(f, "No project found. Please refresh the page."),
            CreateTaskError::MissingTitle => write!(f, "Please enter a task title."),
            CreateTaskError::InvalidDueDate(_) | CreateTaskError::Request(_) => {
                write!(f, "Failed to create task")
            }
        }
    }
}

impl std::error::Error for CreateTaskError {}

/// ISO-8601 UTC instant with millisecond precision, `Z` suffix
pub fn iso_instant(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert the due-date field to an instant; blank falls back to `now`
pub fn due_instant(raw: &str, now: DateTime<Utc>) -> Result<String, CreateTaskError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(iso_instant(now));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        // Date-only input means UTC midnight
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CreateTaskError::InvalidDueDate(raw.to_string()))?;
        return Ok(iso_instant(midnight.and_utc()));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| iso_instant(dt.with_timezone(&Utc)))
        .map_err(|_| CreateTaskError::InvalidDueDate(raw.to_string()))
}

/// Validate the draft and build the create payload, without touching the network
pub fn prepare_task(
    draft: &TaskDraft,
    project_id: Option<Id>,
    now: DateTime<Utc>,
) -> Result<NewTask, CreateTaskError> {
    let assigned_user_id = draft
        .assignee
        .trim()
        .parse::<Id>()
        .map_err(|_| CreateTaskError::MissingAssignee)?;
    let project_id = project_id.ok_or(CreateTaskError::MissingProject)?;
    if draft.title.trim().is_empty() {
        return Err(CreateTaskError::MissingTitle);
    }
    let due_date = due_instant(&draft.due_date, now)?;

    Ok(NewTask {
        title: draft.title.clone(),
        description: draft.description.clone(),
        priority: draft.priority,
        assigned_user_id,
        project_id,
        due_date,
    })
}

/// Outcome of a confirmed create
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCreated {
    pub task: Task,
    /// Full list for the project, or why it could not be re-read
    pub refreshed: Result<Vec<Task>, ApiError>,
}

/// Create the task, then re-read the whole project list
///
/// The list is only re-read after the server confirmed the create.
pub async fn create_task<A: TaskApi + ?Sized>(
    api: &A,
    token: &str,
    draft: &TaskDraft,
    project_id: Option<Id>,
    now: DateTime<Utc>,
) -> Result<TaskCreated, CreateTaskError> {
    let new_task = prepare_task(draft, project_id, now)?;
    let task = api.create_task(token, &new_task).await.map_err(|e| {
        log::error!("failed to create task: {}", e);
        CreateTaskError::Request(e)
    })?;
    let refreshed = api
        .list_tasks(token, &TaskQuery::for_project(new_task.project_id))
        .await;
    if let Err(e) = &refreshed {
        log::error!("task {} created but refresh failed: {}", task.id, e);
    }
    Ok(TaskCreated { task, refreshed })
}

/// A confirmed update or delete, plus the re-read project list
#[derive(Debug, Clone, PartialEq)]
pub struct TaskChanged {
    /// Full list for the project, or why it could not be re-read
    pub refreshed: Result<Vec<Task>, ApiError>,
}

async fn refresh_after<A: TaskApi + ?Sized>(
    api: &A,
    token: &str,
    task_id: Id,
    project_id: Id,
) -> TaskChanged {
    let refreshed = api.list_tasks(token, &TaskQuery::for_project(project_id)).await;
    if let Err(e) = &refreshed {
        log::error!("task {} changed but refresh failed: {}", task_id, e);
    }
    TaskChanged { refreshed }
}

/// Flip a task between pending and completed, then re-read the project's list
///
/// The direction follows what the card shows. When the API carries an
/// `is_completed` flag it is written alongside `status` so both agree.
pub async fn toggle_completed<A: TaskApi + ?Sized>(
    api: &A,
    token: &str,
    task: &Task,
    project_id: Id,
) -> Result<TaskChanged, ApiError> {
    let complete = !task.is_completed();
    let status = if complete {
        TaskStatus::Completed
    } else {
        TaskStatus::Pending
    };
    let update = TaskUpdate {
        status: Some(status),
        is_completed: task.is_completed.map(|_| complete),
        ..Default::default()
    };
    api.update_task(token, task.id, &update).await?;
    Ok(refresh_after(api, token, task.id, project_id).await)
}

/// Delete a task, then re-read the project's list
pub async fn delete_task<A: TaskApi + ?Sized>(
    api: &A,
    token: &str,
    task_id: Id,
    project_id: Id,
) -> Result<TaskChanged, ApiError> {
    api.delete_task(token, task_id).await?;
    Ok(refresh_after(api, token, task_id, project_id).await)
}

//! Wire Models
//!
//! Data structures matching the remote API's JSON payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier shared by users, projects and tasks
pub type Id = u64;

/// Task priority, serialized lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Unknown values fall back to the form default
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "high" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
    /// Any status this client does not know yet
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
            TaskStatus::Unknown => "unknown",
        }
    }
}

/// Directory entry from `/auth/users` and `/auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Kept as the server sent it; the API returns naive timestamps
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assigned_user_id: Option<Id>,
    #[serde(default)]
    pub project_id: Option<Id>,
    #[serde(default)]
    pub is_completed: Option<bool>,
}

impl Task {
    /// `is_completed` wins when the API sends it, otherwise the status decides
    pub fn is_completed(&self) -> bool {
        self.is_completed
            .unwrap_or(self.status == Some(TaskStatus::Completed))
    }
}

/// Form body for `POST /auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// JSON body for `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
}

/// JSON body for `POST /tasks/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assigned_user_id: Id,
    pub project_id: Id,
    /// ISO-8601 UTC instant, millisecond precision
    pub due_date: String,
}

/// Partial body for `PATCH /tasks/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<Id>,
    /// Only sent when the API exposes the flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    Priority,
    DueDate,
}

/// Query string for `GET /tasks/`; unset filters are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TaskQuery {
    pub fn for_project(project_id: Id) -> Self {
        Self {
            project_id: Some(project_id),
            ..Default::default()
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_decodes_api_shape_with_nulls() {
        let json = r#"{
            "id": 7,
            "title": null,
            "description": null,
            "due_date": "2024-05-01T00:00:00",
            "status": "in_progress",
            "priority": "high",
            "project_id": 3,
            "assigned_user_id": null
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "");
        assert_eq!(task.status, Some(TaskStatus::InProgress));
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.assigned_user_id, None);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_is_completed_flag_overrides_status() {
        let task: Task = serde_json::from_str(
            r#"{"id": 1, "title": "A", "status": "completed", "is_completed": false}"#,
        )
        .unwrap();
        assert!(!task.is_completed());

        let task: Task = serde_json::from_str(r#"{"id": 2, "title": "B", "status": "completed"}"#).unwrap();
        assert!(task.is_completed());
    }

    #[test]
    fn test_project_ignores_nested_tasks() {
        let project: Project = serde_json::from_str(
            r#"{"id": 42, "title": "My Tasks", "description": "Default personal project", "owner_id": 1, "tasks": []}"#,
        )
        .unwrap();
        assert_eq!(project.id, 42);
        assert_eq!(project.owner_id, Some(1));
    }

    #[test]
    fn test_task_update_omits_unset_fields() {
        let update = TaskUpdate {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"status":"completed"}"#);
    }

    #[test]
    fn test_full_task_update_body() {
        let update = TaskUpdate {
            title: Some("Renamed".to_string()),
            description: Some("Moved".to_string()),
            status: Some(TaskStatus::InProgress),
            priority: Some(Priority::Low),
            assigned_user_id: Some(3),
            is_completed: Some(false),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({
                "title": "Renamed",
                "description": "Moved",
                "status": "in_progress",
                "priority": "low",
                "assigned_user_id": 3,
                "is_completed": false
            })
        );
    }

    #[test]
    fn test_unknown_status_does_not_break_the_list() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[{"id": 1, "title": "A", "status": "done"}, {"id": 2, "title": "B", "status": "completed"}]"#,
        )
        .unwrap();
        assert_eq!(tasks[0].status, Some(TaskStatus::Unknown));
        assert!(!tasks[0].is_completed());
        assert!(tasks[1].is_completed());
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!(Priority::from_str("low"), Priority::Low);
        assert_eq!(Priority::from_str("urgent"), Priority::Medium);
        assert_eq!(Priority::High.as_str(), "high");
    }
}

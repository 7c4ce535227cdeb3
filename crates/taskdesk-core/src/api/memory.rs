//! In-Memory API
//!
//! `TaskApi` backed by plain vectors, recording every call for assertions.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use super::TaskApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Credentials, Id, NewProject, NewTask, NewUser, Project, Task, TaskQuery, TaskStatus,
    TaskUpdate, TokenResponse, User,
};

pub const TOKEN: &str = "token-ada";
pub const USERNAME: &str = "ada";
pub const PASSWORD: &str = "lovelace";

#[derive(Default)]
struct State {
    users: Vec<User>,
    projects: Vec<Project>,
    tasks: Vec<Task>,
    next_id: Id,
    calls: Vec<String>,
    failing: HashSet<&'static str>,
}

pub struct MemoryApi {
    state: Mutex<State>,
}

impl MemoryApi {
    pub fn new() -> Self {
        let api = Self {
            state: Mutex::new(State {
                next_id: 100,
                ..Default::default()
            }),
        };
        api.with_user(1, USERNAME, "ada@example.com")
    }

    pub fn with_user(self, id: Id, username: &str, email: &str) -> Self {
        self.state.lock().unwrap().users.push(User {
            id,
            username: username.to_string(),
            email: email.to_string(),
        });
        self
    }

    pub fn with_project(self, id: Id, title: &str) -> Self {
        self.state.lock().unwrap().projects.push(Project {
            id,
            title: title.to_string(),
            description: None,
            owner_id: Some(1),
        });
        self
    }

    pub fn with_task(self, task: Task) -> Self {
        self.state.lock().unwrap().tasks.push(task);
        self
    }

    /// Ids handed out by create calls start here
    pub fn with_next_id(self, id: Id) -> Self {
        self.state.lock().unwrap().next_id = id;
        self
    }

    /// Make the named call fail with a 500
    pub fn failing(self, call: &'static str) -> Self {
        self.state.lock().unwrap().failing.insert(call);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.state.lock().unwrap().projects.clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().unwrap().tasks.clone()
    }

    fn record(&self, call: &'static str, detail: String) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(if detail.is_empty() {
            call.to_string()
        } else {
            format!("{} {}", call, detail)
        });
        if state.failing.contains(call) {
            return Err(ApiError::Status { status: 500, detail: None });
        }
        Ok(())
    }

    fn authorize(&self, call: &'static str, token: &str, detail: String) -> ApiResult<()> {
        self.record(call, detail)?;
        if token != TOKEN {
            return Err(ApiError::Status {
                status: 401,
                detail: Some("Could not validate credentials".to_string()),
            });
        }
        Ok(())
    }

    fn next_id(&self) -> Id {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        id
    }
}

pub fn task(id: Id, title: &str, is_completed: Option<bool>) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: None,
        status: None,
        priority: None,
        due_date: None,
        assigned_user_id: None,
        project_id: None,
        is_completed,
    }
}

#[async_trait(?Send)]
impl TaskApi for MemoryApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        self.record("login", credentials.username.clone())?;
        if credentials.username == USERNAME && credentials.password == PASSWORD {
            Ok(TokenResponse {
                access_token: TOKEN.to_string(),
                token_type: Some("bearer".to_string()),
            })
        } else {
            Err(ApiError::Status {
                status: 401,
                detail: Some("Invalid credentials".to_string()),
            })
        }
    }

    async fn register(&self, user: &NewUser) -> ApiResult<User> {
        self.record("register", user.username.clone())?;
        let taken = self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email);
        if taken {
            return Err(ApiError::Status {
                status: 400,
                detail: Some("Email or username already registered".to_string()),
            });
        }
        let created = User {
            id: self.next_id(),
            username: user.username.clone(),
            email: user.email.clone(),
        };
        self.state.lock().unwrap().users.push(created.clone());
        Ok(created)
    }

    async fn current_user(&self, token: &str) -> ApiResult<User> {
        self.authorize("current_user", token, String::new())?;
        let state = self.state.lock().unwrap();
        let user = state.users.iter().find(|u| u.username == USERNAME).cloned();
        user.ok_or(ApiError::Status { status: 404, detail: None })
    }

    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>> {
        self.authorize("list_users", token, String::new())?;
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn list_projects(&self, token: &str) -> ApiResult<Vec<Project>> {
        self.authorize("list_projects", token, String::new())?;
        Ok(self.projects())
    }

    async fn create_project(&self, token: &str, project: &NewProject) -> ApiResult<Project> {
        self.authorize("create_project", token, project.title.clone())?;
        let created = Project {
            id: self.next_id(),
            title: project.title.clone(),
            description: project.description.clone(),
            owner_id: Some(1),
        };
        self.state.lock().unwrap().projects.push(created.clone());
        Ok(created)
    }

    async fn list_tasks(&self, token: &str, query: &TaskQuery) -> ApiResult<Vec<Task>> {
        let detail = query
            .project_id
            .map(|id| format!("project_id={}", id))
            .unwrap_or_default();
        self.authorize("list_tasks", token, detail)?;
        Ok(self
            .tasks()
            .into_iter()
            .filter(|t| query.project_id.is_none() || t.project_id == query.project_id)
            .collect())
    }

    async fn create_task(&self, token: &str, new_task: &NewTask) -> ApiResult<Task> {
        self.authorize("create_task", token, format!("project_id={}", new_task.project_id))?;
        let created = Task {
            id: self.next_id(),
            title: new_task.title.clone(),
            description: Some(new_task.description.clone()),
            status: Some(TaskStatus::Pending),
            priority: Some(new_task.priority),
            due_date: Some(new_task.due_date.clone()),
            assigned_user_id: Some(new_task.assigned_user_id),
            project_id: Some(new_task.project_id),
            is_completed: None,
        };
        self.state.lock().unwrap().tasks.push(created.clone());
        Ok(created)
    }

    async fn update_task(&self, token: &str, id: Id, update: &TaskUpdate) -> ApiResult<Task> {
        self.authorize("update_task", token, id.to_string())?;
        let mut state = self.state.lock().unwrap();
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ApiError::Status { status: 404, detail: Some("Task not found".to_string()) })?;
        if let Some(title) = &update.title {
            task.title = title.clone();
        }
        if let Some(description) = &update.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = update.status {
            task.status = Some(status);
        }
        if let Some(priority) = update.priority {
            task.priority = Some(priority);
        }
        if let Some(user_id) = update.assigned_user_id {
            task.assigned_user_id = Some(user_id);
        }
        if let Some(flag) = update.is_completed {
            task.is_completed = Some(flag);
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, token: &str, id: Id) -> ApiResult<()> {
        self.authorize("delete_task", token, id.to_string())?;
        let mut state = self.state.lock().unwrap();
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(ApiError::Status { status: 404, detail: Some("Task not found".to_string()) });
        }
        Ok(())
    }
}

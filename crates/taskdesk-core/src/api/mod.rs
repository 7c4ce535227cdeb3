//! API Client Layer
//!
//! The `TaskApi` seam and its implementations.
//! `HttpApi` talks to the real server; tests use an in-memory double.

mod http;

#[cfg(test)]
pub(crate) mod memory;

pub use http::HttpApi;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    Credentials, Id, NewProject, NewTask, NewUser, Project, Task, TaskQuery, TaskUpdate,
    TokenResponse, User,
};

/// Remote task-management API
///
/// Every authenticated call takes the bearer token explicitly; the client
/// itself holds no session. Futures are `?Send` since browser fetch
/// futures are not.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `POST /auth/login` (form-encoded)
    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse>;

    /// `POST /auth/register`
    async fn register(&self, user: &NewUser) -> ApiResult<User>;

    /// `GET /auth/me`
    async fn current_user(&self, token: &str) -> ApiResult<User>;

    /// `GET /auth/users`
    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>>;

    /// `GET /projects/`
    async fn list_projects(&self, token: &str) -> ApiResult<Vec<Project>>;

    /// `POST /projects/`
    async fn create_project(&self, token: &str, project: &NewProject) -> ApiResult<Project>;

    /// `GET /tasks/`
    async fn list_tasks(&self, token: &str, query: &TaskQuery) -> ApiResult<Vec<Task>>;

    /// `POST /tasks/`
    async fn create_task(&self, token: &str, task: &NewTask) -> ApiResult<Task>;

    /// `PATCH /tasks/{id}`
    async fn update_task(&self, token: &str, id: Id, update: &TaskUpdate) -> ApiResult<Task>;

    /// `DELETE /tasks/{id}`
    async fn delete_task(&self, token: &str, id: Id) -> ApiResult<()>;
}

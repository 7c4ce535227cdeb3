//! HTTP Implementation
//!
//! `TaskApi` over `reqwest`. On wasm32 this goes through the browser's fetch.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::TaskApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Credentials, Id, NewProject, NewTask, NewUser, Project, Task, TaskQuery, TaskUpdate,
    TokenResponse, User,
};

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.client.get(self.config.endpoint(path)).bearer_auth(token)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.config.endpoint(path))
    }
}

/// Send a request and turn non-2xx responses into `ApiError::Status`
async fn send(request: RequestBuilder) -> ApiResult<Response> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::debug!("request failed with {}: {}", status, body);
    Err(ApiError::from_response(status.as_u16(), &body))
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = send(request).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TaskApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        send_json(self.post("/auth/login").form(credentials)).await
    }

    async fn register(&self, user: &NewUser) -> ApiResult<User> {
        send_json(self.post("/auth/register").json(user)).await
    }

    async fn current_user(&self, token: &str) -> ApiResult<User> {
        send_json(self.get("/auth/me", token)).await
    }

    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>> {
        send_json(self.get("/auth/users", token)).await
    }

    async fn list_projects(&self, token: &str) -> ApiResult<Vec<Project>> {
        send_json(self.get("/projects/", token)).await
    }

    async fn create_project(&self, token: &str, project: &NewProject) -> ApiResult<Project> {
        send_json(self.post("/projects/").bearer_auth(token).json(project)).await
    }

    async fn list_tasks(&self, token: &str, query: &TaskQuery) -> ApiResult<Vec<Task>> {
        send_json(self.get("/tasks/", token).query(query)).await
    }

    async fn create_task(&self, token: &str, task: &NewTask) -> ApiResult<Task> {
        send_json(self.post("/tasks/").bearer_auth(token).json(task)).await
    }

    async fn update_task(&self, token: &str, id: Id, update: &TaskUpdate) -> ApiResult<Task> {
        let url = self.config.endpoint(&format!("/tasks/{}", id));
        send_json(self.client.patch(url).bearer_auth(token).json(update)).await
    }

    async fn delete_task(&self, token: &str, id: Id) -> ApiResult<()> {
        let url = self.config.endpoint(&format!("/tasks/{}", id));
        send(self.client.delete(url).bearer_auth(token)).await?;
        Ok(())
    }
}

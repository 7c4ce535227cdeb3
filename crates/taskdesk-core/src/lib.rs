//! Taskdesk Client Core
//!
//! Everything the browser views need that is not rendering:
//! - api: the `TaskApi` seam and its HTTP implementation
//! - session: bearer-token lifecycle
//! - project: default-project resolution
//! - task_form: task creation and list actions
//! - stats: dashboard counters

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod project;
pub mod session;
pub mod stats;
pub mod task_form;

pub use api::{HttpApi, TaskApi};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, AuthError};
pub use models::{Id, Priority, Project, Task, TaskStatus, User};
pub use project::{load_task_board, ProjectResolver, ResolveError, TaskBoard};
pub use session::{MemoryTokenStore, Session, TokenStore};
pub use stats::TaskStats;
pub use task_form::{CreateTaskError, TaskChanged, TaskCreated, TaskDraft};

//! Default-Project Resolver
//!
//! Pins the one project that hosts the user's tasks. The first project the
//! server lists is taken as is; the server gives no uniqueness guarantee, so
//! this is best-effort. With no projects at all, "My Tasks" is created.

use crate::api::TaskApi;
use crate::error::ApiError;
use crate::models::{Id, NewProject, Task, TaskQuery};

pub const DEFAULT_PROJECT_TITLE: &str = "My Tasks";
pub const DEFAULT_PROJECT_DESCRIPTION: &str = "Default personal project";

#[derive(Debug, Clone, PartialEq)]
pub struct ResolveError(pub ApiError);

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load project data. Please try refreshing.")
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Resolves the default project once and caches the id
#[derive(Debug, Clone, Default)]
pub struct ProjectResolver {
    resolved: Option<Id>,
}

impl ProjectResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolved(&self) -> Option<Id> {
        self.resolved
    }

    /// Return the cached id, or list (and if needed create) to find one
    pub async fn resolve<A: TaskApi + ?Sized>(
        &mut self,
        api: &A,
        token: &str,
    ) -> Result<Id, ResolveError> {
        if let Some(id) = self.resolved {
            return Ok(id);
        }

        let projects = api.list_projects(token).await.map_err(|e| {
            log::error!("failed to list projects: {}", e);
            ResolveError(e)
        })?;

        let id = match projects.first() {
            Some(project) => project.id,
            None => {
                log::info!("no projects found, creating default '{}' project", DEFAULT_PROJECT_TITLE);
                let new_project = NewProject {
                    title: DEFAULT_PROJECT_TITLE.to_string(),
                    description: Some(DEFAULT_PROJECT_DESCRIPTION.to_string()),
                };
                let created = api.create_project(token, &new_project).await.map_err(|e| {
                    log::error!("failed to create default project: {}", e);
                    ResolveError(e)
                })?;
                created.id
            }
        };

        self.resolved = Some(id);
        Ok(id)
    }
}

/// Project id plus its tasks, as the task view first shows them
#[derive(Debug, Clone, PartialEq)]
pub struct TaskBoard {
    pub project_id: Id,
    pub tasks: Vec<Task>,
}

/// Resolve the default project, then fetch its tasks
///
/// The task fetch is only issued once resolution has finished.
pub async fn load_task_board<A: TaskApi + ?Sized>(
    api: &A,
    token: &str,
    resolver: &mut ProjectResolver,
) -> Result<TaskBoard, ResolveError> {
    let project_id = resolver.resolve(api, token).await?;
    let tasks = api
        .list_tasks(token, &TaskQuery::for_project(project_id))
        .await
        .map_err(|e| {
            log::error!("failed to load tasks for project {}: {}", project_id, e);
            ResolveError(e)
        })?;
    Ok(TaskBoard { project_id, tasks })
}

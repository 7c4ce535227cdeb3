//! Task Card Component
//!
//! One task in the list, with complete/reopen and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use taskdesk_core::task_form;
use taskdesk_core::{Priority, Task, TaskChanged};

use crate::components::DeleteConfirmButton;
use crate::context::{api_client, use_app_context};
use crate::store::{use_tasks_store, TasksStateStoreFields, TasksStore};

const REFRESH_FAILED: &str = "Task saved, but the task list could not be refreshed.";

fn apply_refresh(store: TasksStore, changed: TaskChanged) {
    match changed.refreshed {
        Ok(tasks) => {
            store.tasks().try_set(tasks);
        }
        Err(_) => {
            store.error().try_set(Some(REFRESH_FAILED.to_string()));
        }
    }
}

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge-high",
        Priority::Medium => "badge badge-medium",
        Priority::Low => "badge badge-low",
    }
}

#[component]
pub fn TaskCard(task: Task, #[prop(into)] assignee: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_tasks_store();

    let priority = task.priority.unwrap_or_default();
    let status = task.status.unwrap_or_default();
    let completed = task.is_completed();
    let task_id = task.id;

    let on_toggle = {
        let task = task.clone();
        move |_| {
            let (Some(token), Some(project_id)) = (ctx.current_token(), store.project_id().get_untracked()) else {
                return;
            };
            let task = task.clone();
            spawn_local(async move {
                match task_form::toggle_completed(&api_client(), &token, &task, project_id).await {
                    Ok(changed) => apply_refresh(store, changed),
                    Err(e) => {
                        log::error!("Failed to update task {}: {}", task.id, e);
                        store.error().try_set(Some("Failed to update task".to_string()));
                    }
                }
            });
        }
    };

    let on_delete = Callback::new(move |_| {
        let (Some(token), Some(project_id)) = (ctx.current_token(), store.project_id().get_untracked()) else {
            return;
        };
        spawn_local(async move {
            match task_form::delete_task(&api_client(), &token, task_id, project_id).await {
                Ok(changed) => apply_refresh(store, changed),
                Err(e) => {
                    log::error!("Failed to delete task {}: {}", task_id, e);
                    store.error().try_set(Some("Failed to delete task".to_string()));
                }
            }
        });
    });

    view! {
        <div class={if completed { "task-card done" } else { "task-card" }}>
            <div class="task-card-head">
                <div>
                    <h3>{task.title.clone()}</h3>
                    <p class="muted">{task.description.clone().unwrap_or_default()}</p>
                </div>
                <span class={priority_class(priority)}>{priority.as_str()}</span>
            </div>
            <div class="task-card-meta">
                <span>"Assignee: " {assignee}</span>
                <span>"Status: " {status.as_str()}</span>
            </div>
            <div class="task-card-actions">
                <button type="button" class="btn btn-outline small" on:click=on_toggle>
                    {if completed { "Reopen" } else { "Complete" }}
                </button>
                <DeleteConfirmButton button_class="btn btn-outline small" on_confirm=on_delete />
            </div>
        </div>
    }
}

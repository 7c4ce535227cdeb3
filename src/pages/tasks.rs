//! Tasks Page
//!
//! Resolves the default project, then lists and creates tasks in it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use taskdesk_core::{load_task_board, ProjectResolver, TaskApi};

use crate::components::{NewTaskForm, TaskCard};
use crate::context::{api_client, use_app_context};
use crate::routes::Page;
use crate::store::{assignee_name, TasksState, TasksStateStoreFields, TasksStore};

#[component]
pub fn TasksPage() -> impl IntoView {
    let ctx = use_app_context();
    let store: TasksStore = Store::new(TasksState::default());
    provide_context(store);

    // Users first, then the project, then its tasks
    Effect::new(move |_| {
        let Some(token) = ctx.token.get() else { return };
        spawn_local(async move {
            let api = api_client();
            match api.list_users(&token).await {
                Ok(users) => {
                    store.users().try_set(users);
                }
                Err(e) => log::error!("Failed to fetch users: {}", e),
            }

            let mut resolver = ProjectResolver::new();
            match load_task_board(&api, &token, &mut resolver).await {
                Ok(board) => {
                    store.project_id().try_set(Some(board.project_id));
                    store.tasks().try_set(board.tasks);
                }
                Err(e) => {
                    // Resolution may have succeeded before the task fetch failed
                    store.project_id().try_set(resolver.resolved());
                    store.error().try_set(Some(e.to_string()));
                }
            }
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Task Management"</h1>
                <div class="actions">
                    {move || store.project_id().get().map(|id| view! {
                        <span class="muted">"Project ID: " {id}</span>
                    })}
                    <button class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Dashboard)>
                        "Dashboard"
                    </button>
                </div>
            </div>

            <div class="two-column">
                <div class="card">
                    <h2 class="card-title">"Create New Task"</h2>
                    <NewTaskForm />
                </div>

                <div class="card">
                    <h2 class="card-title">"Existing Tasks"</h2>
                    <div class="task-list">
                        {move || {
                            let tasks = store.tasks().get();
                            if tasks.is_empty() {
                                return view! { <p class="muted">"No tasks found in project."</p> }.into_any();
                            }
                            let users = store.users().get();
                            tasks
                                .into_iter()
                                .map(|task| {
                                    let assignee = assignee_name(&users, task.assigned_user_id);
                                    view! { <TaskCard task=task assignee=assignee /> }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

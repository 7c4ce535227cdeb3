//! New Task Form Component
//!
//! Form for creating a task in the resolved project.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use taskdesk_core::task_form::{self, TaskDraft};
use taskdesk_core::Priority;

use crate::context::{api_client, use_app_context};
use crate::store::{use_tasks_store, TasksStateStoreFields};

const REFRESH_FAILED: &str = "Task created, but the task list could not be refreshed.";

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_tasks_store();

    let draft = RwSignal::new(TaskDraft::default());
    let (loading, set_loading) = signal(false);

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = ctx.current_token() else { return };
        let current = draft.get_untracked();
        let project_id = store.project_id().get_untracked();

        set_loading.set(true);
        store.error().set(None);

        spawn_local(async move {
            let api = api_client();
            match task_form::create_task(&api, &token, &current, project_id, Utc::now()).await {
                Ok(created) => {
                    log::info!("created task {}", created.task.id);
                    draft.try_update(TaskDraft::clear);
                    match created.refreshed {
                        Ok(tasks) => {
                            store.tasks().try_set(tasks);
                        }
                        Err(_) => {
                            store.error().try_set(Some(REFRESH_FAILED.to_string()));
                        }
                    }
                }
                Err(e) => {
                    store.error().try_set(Some(e.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    };

    view! {
        <form class="task-form" on:submit=create_task>
            <div class="field">
                <label>"Title"</label>
                <input
                    type="text"
                    placeholder="Task title"
                    required
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.title = value);
                    }
                />
            </div>

            <div class="field">
                <label>"Description"</label>
                <input
                    type="text"
                    placeholder="Task description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                />
            </div>

            <div class="field">
                <label>"Priority"</label>
                <select
                    prop:value=move || draft.with(|d| d.priority.as_str())
                    on:change=move |ev| {
                        let priority = Priority::from_str(&event_target_value(&ev));
                        draft.update(|d| d.priority = priority);
                    }
                >
                    {Priority::ALL.iter().map(|p| view! {
                        <option value={p.as_str()}>{p.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="field">
                <label>"Assign To"</label>
                <select
                    required
                    prop:value=move || draft.with(|d| d.assignee.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.assignee = value);
                    }
                >
                    <option value="">"Select a user..."</option>
                    {move || store.users().get().into_iter().map(|u| view! {
                        <option value={u.id.to_string()}>{format!("{} ({})", u.username, u.email)}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="field">
                <label>"Due Date"</label>
                <input
                    type="date"
                    required
                    prop:value=move || draft.with(|d| d.due_date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.due_date = value);
                    }
                />
            </div>

            {move || store.error().get().map(|msg| view! { <p class="error">{msg}</p> })}

            <button class="btn btn-primary wide" type="submit" disabled={move || loading.get()}>
                {move || if loading.get() { "Creating..." } else { "Create Task" }}
            </button>
        </form>
    }
}

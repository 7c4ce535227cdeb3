//! Dashboard Page
//!
//! Task counters aggregated client-side from the full task list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use taskdesk_core::models::TaskQuery;
use taskdesk_core::{TaskApi, TaskStats};

use crate::components::{BarChart, StatCard};
use crate::context::{api_client, use_app_context};
use crate::routes::Page;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();

    let (stats, set_stats) = signal(TaskStats::default());
    let (loading, set_loading) = signal(true);
    let (username, set_username) = signal::<Option<String>>(None);

    // Recompute on every mount while signed in
    Effect::new(move |_| {
        let Some(token) = ctx.token.get() else { return };
        spawn_local(async move {
            let api = api_client();
            match api.list_tasks(&token, &TaskQuery::default()).await {
                Ok(tasks) => {
                    log::debug!("dashboard loaded {} tasks", tasks.len());
                    set_stats.try_set(TaskStats::from_tasks(&tasks));
                }
                Err(e) => log::error!("Failed to fetch stats: {}", e),
            }
            set_loading.try_set(false);

            match api.current_user(&token).await {
                Ok(user) => {
                    set_username.try_set(Some(user.username));
                }
                Err(e) => log::warn!("Failed to fetch current user: {}", e),
            }
        });
    });

    let bars = Signal::derive(move || stats.get().bars().to_vec());

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    {move || username.get().map(|name| view! { <p class="muted">"Signed in as " {name}</p> })}
                </div>
                <div class="actions">
                    <button class="btn btn-outline" on:click=move |_| ctx.navigate(Page::Tasks)>
                        "Manage Tasks"
                    </button>
                    <button class="btn btn-danger" on:click=move |_| ctx.logout()>
                        "Logout"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard label="Total Tasks" value=Signal::derive(move || stats.get().total) loading=loading />
                <StatCard label="Completed" value=Signal::derive(move || stats.get().completed) loading=loading />
                <StatCard label="Pending" value=Signal::derive(move || stats.get().pending) loading=loading />
            </div>

            <div class="card">
                <h2 class="card-title">"Task Overview"</h2>
                <BarChart data=bars />
            </div>
        </div>
    }
}

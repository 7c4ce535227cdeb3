//! Taskdesk Frontend App
//!
//! Root component: provides the session context and switches pages.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::pages::{DashboardPage, LoginPage, RegisterPage, TasksPage};
use crate::routes::{self, Page};

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    // Browser back/forward
    let _ = window_event_listener(leptos::ev::popstate, move |_| ctx.sync_with_location());

    view! {
        <div class="app-layout">
            {move || {
                let signed_in = ctx.token.get().is_some();
                match routes::guard(ctx.page.get(), signed_in) {
                    Page::Login => view! { <LoginPage /> }.into_any(),
                    Page::Register => view! { <RegisterPage /> }.into_any(),
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::Tasks => view! { <TasksPage /> }.into_any(),
                }
            }}
        </div>
    }
}

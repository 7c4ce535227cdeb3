//! Register Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use taskdesk_core::session;

use crate::context::{api_client, use_app_context};
use crate::routes::Page;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get_untracked();
        let email = email.get_untracked();
        let password = password.get_untracked();
        set_error.set(String::new());

        spawn_local(async move {
            match session::register(&api_client(), &username, &email, &password).await {
                Ok(user) => {
                    log::info!("registered user {}", user.username);
                    ctx.notice.set(Some("Account created. Please sign in.".to_string()));
                    ctx.navigate(Page::Login);
                }
                Err(e) => {
                    set_error.try_set(e.to_string());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h2 class="card-title">"Register"</h2>
                <form on:submit=on_register>
                    <div class="field">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn-primary wide" type="submit">"Create account"</button>
                </form>
                <p class="card-footer">
                    "Already registered? "
                    <a
                        href=Page::Login.path()
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Login);
                        }
                    >
                        "Login"
                    </a>
                </p>
            </div>
        </div>
    }
}

//! Login Page
//!
//! Username/password form. A rejected login shows an inline error and
//! leaves the session untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use taskdesk_core::session;

use crate::context::{api_client, use_app_context};
use crate::routes::Page;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get_untracked();
        let password = password.get_untracked();
        set_submitting.set(true);
        set_error.set(String::new());
        ctx.notice.set(None);

        spawn_local(async move {
            match session::sign_in(&api_client(), &username, &password).await {
                Ok(token) => ctx.login(token),
                Err(e) => {
                    set_error.try_set(e.to_string());
                }
            }
            set_submitting.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h2 class="card-title">"Login"</h2>
                {move || ctx.notice.get().map(|msg| view! { <p class="notice">{msg}</p> })}
                <form on:submit=on_login>
                    <div class="field">
                        <label for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            placeholder="Username"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || !error.get().is_empty()>
                        <p class="error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn-primary wide" type="submit" disabled={move || submitting.get()}>
                        "Login"
                    </button>
                </form>
                <p class="card-footer">
                    "Don't have an account? "
                    <a
                        href=Page::Register.path()
                        on:click=move |ev| {
                            ev.prevent_default();
                            ctx.navigate(Page::Register);
                        }
                    >
                        "Register"
                    </a>
                </p>
            </div>
        </div>
    }
}

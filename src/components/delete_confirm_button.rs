//! Delete Confirm Button Component
//!
//! Inline delete button that asks once before firing.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows "Delete?" with Yes/No buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);

    view! {
        <Show when=move || !confirming.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |_| set_confirming.set(true)
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    type="button"
                    class="btn btn-danger small"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    type="button"
                    class="btn btn-outline small"
                    on:click=move |_| set_confirming.set(false)
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}

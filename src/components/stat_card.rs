//! Stat Card Component

use leptos::prelude::*;

/// Single counter with a label
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<usize>,
    loading: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-label">{label}</div>
            <div class="stat-value">
                {move || if loading.get() { "...".to_string() } else { value.get().to_string() }}
            </div>
        </div>
    }
}

//! "Nothing matched" panel shown under an empty filtered list.

use leptos::prelude::*;

#[component]
pub fn EmptyState(title: &'static str, hint: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3 class="empty-state__title">{title}</h3>
            <p class="empty-state__hint">{hint}</p>
        </div>
    }
}

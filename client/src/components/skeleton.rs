//! Grey placeholder rows shown while a page's data is loading.

use leptos::prelude::*;

#[component]
pub fn Skeleton(rows: usize) -> impl IntoView {
    view! {
        <div class="skeleton" aria-busy="true">
            <div class="skeleton__heading"></div>
            {(0..rows).map(|_| view! { <div class="skeleton__row"></div> }).collect::<Vec<_>>()}
        </div>
    }
}

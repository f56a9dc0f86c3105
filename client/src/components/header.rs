//! Top bar with the current page title.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shop::navigation::{ACCOUNT_NAME, title_for};

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let title = move || location.pathname.with(|path| title_for(path));

    view! {
        <header class="top-bar">
            <h2 class="top-bar__title">{title}</h2>
            <div class="top-bar__actions">
                <input class="top-bar__search" type="search" placeholder="Search..."/>
                <span class="top-bar__account">{ACCOUNT_NAME}</span>
            </div>
        </header>
    }
}

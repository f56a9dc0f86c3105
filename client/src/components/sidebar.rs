//! Collapsible navigation sidebar.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use shop::navigation::{ACCOUNT_EMAIL, ACCOUNT_NAME, APP_NAME, APP_TAGLINE, NAV_ITEMS};

use crate::components::icons::{Icon, nav_glyph};
use crate::state::ui::UiState;
use crate::util::preferences::{self, Preferences};

/// Brand block, one link per route, and the account footer.
///
/// The item whose href equals the current path is highlighted. Collapsing
/// hides labels and the account details and is remembered across visits.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let collapsed = move || ui.with(|u| u.sidebar_collapsed);

    let toggle = move |_| {
        let Some(sidebar_collapsed) = ui.try_update(UiState::toggle_sidebar) else {
            return;
        };
        preferences::save(Preferences { sidebar_collapsed });
    };

    let links = NAV_ITEMS
        .into_iter()
        .map(|item| {
            let active = move || location.pathname.with(|path| item.is_active(path));
            view! {
                <a
                    class="sidebar__link"
                    class:sidebar__link--active=active
                    href=item.href
                    title=item.name
                >
                    <Icon glyph=nav_glyph(item.icon)/>
                    <Show when=move || !collapsed()>
                        <span class="sidebar__label">{item.name}</span>
                    </Show>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__brand">
                <Show when=move || !collapsed()>
                    <div class="sidebar__brand-text">
                        <span class="sidebar__app-name">{APP_NAME}</span>
                        <span class="sidebar__tagline">{APP_TAGLINE}</span>
                    </div>
                </Show>
                <button class="sidebar__toggle" on:click=toggle>
                    {move || if collapsed() { "\u{25B6}" } else { "\u{25C0}" }}
                </button>
            </div>

            <nav class="sidebar__nav">{links}</nav>

            <div class="sidebar__account">
                <span class="sidebar__avatar">"RS"</span>
                <Show when=move || !collapsed()>
                    <div class="sidebar__account-text">
                        <span class="sidebar__account-name">{ACCOUNT_NAME}</span>
                        <span class="sidebar__account-email">{ACCOUNT_EMAIL}</span>
                    </div>
                </Show>
            </div>
        </aside>
    }
}

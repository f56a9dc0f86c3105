//! Customers page: searchable customer directory.

use leptos::prelude::*;
use shop::sample::{self, LOAD_DELAY_MS};

use crate::components::customer_card::CustomerCard;
use crate::components::empty_state::EmptyState;
use crate::components::placeholder_modal::PlaceholderModal;
use crate::components::skeleton::Skeleton;
use crate::state::customers::CustomersState;
use crate::util::delay::ScopeAlive;

#[component]
pub fn CustomersPage() -> impl IntoView {
    let state = RwSignal::new(CustomersState::default());
    let alive = ScopeAlive::register();
    alive.after(LOAD_DELAY_MS, move || {
        state.update(|s| s.finish_loading(sample::customers()));
    });

    let loading = move || state.with(|s| s.loading);
    let total = move || state.with(CustomersState::total);
    let close_modal = Callback::new(move |()| state.update(|s| s.show_new_customer_modal = false));

    view! {
        <Show when=move || !loading() fallback=|| view! { <Skeleton rows=6/> }>
            <div class="page customers">
                <div class="page__header">
                    <div>
                        <h1>"Customers"</h1>
                        <p class="page__subtitle">"Manage customer information and repair history"</p>
                    </div>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| state.update(|s| s.show_new_customer_modal = true)
                    >
                        "+ New Customer"
                    </button>
                </div>

                <div class="filters">
                    <div class="filters__total">
                        <span class="filters__total-count">{total}</span>
                        <span class="filters__total-label">"Total Customers"</span>
                    </div>
                    <input
                        class="filters__search"
                        type="text"
                        placeholder="Search customers by name, location, or scooter model..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                    />
                </div>

                <div class="customer-grid">
                    {move || {
                        state
                            .with(CustomersState::visible)
                            .into_iter()
                            .map(|customer| view! { <CustomerCard customer/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || state.with(CustomersState::shows_empty_state)>
                    <EmptyState title="No customers found" hint="Try adjusting your search criteria"/>
                </Show>

                <Show when=move || state.with(|s| s.show_new_customer_modal)>
                    <PlaceholderModal
                        title="Add New Customer"
                        body="Customer creation form will be implemented next."
                        on_close=close_modal
                    />
                </Show>
            </div>
        </Show>
    }
}

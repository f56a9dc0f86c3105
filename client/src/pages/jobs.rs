//! Jobs page: searchable, status-filtered list of repair jobs.

use leptos::prelude::*;
use shop::StatusFilter;
use shop::sample::{self, LOAD_DELAY_MS};

use crate::components::empty_state::EmptyState;
use crate::components::job_card::JobCard;
use crate::components::placeholder_modal::PlaceholderModal;
use crate::components::skeleton::Skeleton;
use crate::state::jobs::JobsState;
use crate::util::delay::ScopeAlive;

#[component]
pub fn JobsPage() -> impl IntoView {
    let state = RwSignal::new(JobsState::default());
    let alive = ScopeAlive::register();
    alive.after(LOAD_DELAY_MS, move || {
        state.update(|s| s.finish_loading(sample::jobs()));
    });

    let loading = move || state.with(|s| s.loading);
    let close_modal = Callback::new(move |()| state.update(|s| s.show_new_job_modal = false));

    let on_status = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        if let Some(Err(err)) = state.try_update(|s| s.set_status_filter(&raw)) {
            log::warn!("status filter unchanged: {err}");
        }
    };

    view! {
        <Show when=move || !loading() fallback=|| view! { <Skeleton rows=3/> }>
            <div class="page jobs">
                <div class="page__header">
                    <div>
                        <h1>"Repair Jobs"</h1>
                        <p class="page__subtitle">"Manage all scooter repair jobs and track progress"</p>
                    </div>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| state.update(|s| s.show_new_job_modal = true)
                    >
                        "+ New Job"
                    </button>
                </div>

                <div class="filters">
                    <input
                        class="filters__search"
                        type="text"
                        placeholder="Search jobs, customers, or scooter models..."
                        prop:value=move || state.with(|s| s.search.clone())
                        on:input=move |ev| state.update(|s| s.search = event_target_value(&ev))
                    />
                    <select
                        class="filters__status"
                        prop:value=move || state.with(|s| s.status_filter.as_str())
                        on:change=on_status
                    >
                        {StatusFilter::options()
                            .into_iter()
                            .map(|option| view! { <option value=option.as_str()>{option.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="job-list">
                    {move || {
                        state
                            .with(JobsState::visible)
                            .into_iter()
                            .map(|job| view! { <JobCard job/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || state.with(JobsState::shows_empty_state)>
                    <EmptyState title="No jobs found" hint="Try adjusting your search or filter criteria"/>
                </Show>

                <Show when=move || state.with(|s| s.show_new_job_modal)>
                    <PlaceholderModal
                        title="Create New Job"
                        body="Job creation form will be implemented next."
                        on_close=close_modal
                    />
                </Show>
            </div>
        </Show>
    }
}

//! One repair job on the Jobs page.

use leptos::prelude::*;
use shop::RepairJob;
use shop::format::short_date;

use crate::components::icons::{Icon, status_glyph};

/// Customer, scooter, and issue on top; technician, dates, time, and cost
/// below; special notes only when present.
#[component]
pub fn JobCard(job: RepairJob) -> impl IntoView {
    let status_class = format!("badge badge--status badge--{}", job.status.as_str());
    let priority_class = format!("badge badge--priority badge--{}", job.priority.as_str());
    let received = short_date(job.received_date);
    let time = job.time_display();
    let total = job.total_display();
    let notes = job.has_notes().then(|| {
        view! {
            <div class="job-card__notes">
                <span class="job-card__notes-label">"Notes: "</span>
                {job.special_notes.clone()}
            </div>
        }
    });

    view! {
        <article class="job-card">
            <div class="job-card__header">
                <div>
                    <h3 class="job-card__customer">{job.customer_name}</h3>
                    <p class="job-card__scooter">{job.scooter_model}</p>
                </div>
                <div class="job-card__badges">
                    <span class=status_class>
                        <Icon glyph=status_glyph(job.status.icon())/>
                        {job.status.label()}
                    </span>
                    <span class=priority_class>{job.priority.badge()}</span>
                </div>
            </div>

            <p class="job-card__issue">{job.issue_description}</p>

            <dl class="job-card__facts">
                <div><dt>"Technician"</dt><dd>{job.technician}</dd></div>
                <div><dt>"Received"</dt><dd>{received}</dd></div>
                <div><dt>"Time"</dt><dd>{time}</dd></div>
                <div><dt>"Total"</dt><dd>{total}</dd></div>
                <div><dt>"Location"</dt><dd>{job.location}</dd></div>
            </dl>

            {notes}
        </article>
    }
}

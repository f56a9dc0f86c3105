//! Dashboard page: headline stats, recent jobs, low stock, quick actions.

use leptos::prelude::*;
use shop::dashboard::{LOW_STOCK_PARTS, LowStockPart, QUICK_ACTIONS, RECENT_JOBS, RecentJob, STATS};

use crate::components::icons::{Icon, status_glyph};
use crate::components::stat_card::StatCard;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = STATS
        .into_iter()
        .map(|stat| view! { <StatCard stat/> })
        .collect::<Vec<_>>();
    let recent = RECENT_JOBS.into_iter().map(recent_job_row).collect::<Vec<_>>();
    let low_stock = LOW_STOCK_PARTS.into_iter().map(low_stock_row).collect::<Vec<_>>();
    let actions = QUICK_ACTIONS
        .into_iter()
        .map(|action| {
            view! {
                <a class="quick-action" href=action.href>
                    {action.label}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page dashboard">
            <div class="page__header">
                <h1>"Dashboard"</h1>
                <p class="page__subtitle">"Overview of your repair shop"</p>
            </div>

            <section class="dashboard__stats">{stats}</section>

            <div class="dashboard__columns">
                <section class="panel dashboard__recent">
                    <h2 class="panel__title">"Recent Jobs"</h2>
                    {recent}
                </section>

                <div class="dashboard__side">
                    <section class="panel dashboard__low-stock">
                        <h2 class="panel__title">"Low Stock Alert"</h2>
                        {low_stock}
                    </section>
                    <section class="panel dashboard__actions">
                        <h2 class="panel__title">"Quick Actions"</h2>
                        <div class="quick-actions">{actions}</div>
                    </section>
                </div>
            </div>
        </div>
    }
}

fn recent_job_row(job: RecentJob) -> impl IntoView {
    let priority_class = format!("badge badge--priority badge--{}", job.priority.as_str());
    let bar_width = format!("width: {}%", job.progress);
    let caption = job.progress_caption();

    view! {
        <div class="recent-job">
            <div class="recent-job__header">
                <span class="recent-job__id">{job.id}</span>
                <span class="recent-job__badges">
                    <span class=priority_class>{job.priority.as_str()}</span>
                    <Icon glyph=status_glyph(job.status.icon())/>
                </span>
            </div>
            <p class="recent-job__customer">{job.customer}" \u{2022} "{job.scooter}</p>
            <p class="recent-job__issue">{job.issue}</p>
            <div class="progress">
                <div class="progress__bar" style=bar_width></div>
            </div>
            <span class="recent-job__caption">{caption}</span>
        </div>
    }
}

fn low_stock_row(part: LowStockPart) -> impl IntoView {
    view! {
        <div class="low-stock" class:low-stock--out=part.is_out()>
            <span class="low-stock__name">{part.name}</span>
            <span class="low-stock__caption">{part.caption()}</span>
        </div>
    }
}

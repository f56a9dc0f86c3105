//! Headline number tile for the dashboard.

use leptos::prelude::*;
use shop::dashboard::{Stat, Trend};

use crate::components::icons::{Icon, stat_glyph};

#[component]
pub fn StatCard(stat: Stat) -> impl IntoView {
    let trend_class = match stat.trend {
        Trend::Up => "stat-card__change stat-card__change--up",
        Trend::Down => "stat-card__change stat-card__change--down",
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__top">
                <span class="stat-card__title">{stat.title}</span>
                <Icon glyph=stat_glyph(stat.icon)/>
            </div>
            <div class="stat-card__value">{stat.value}</div>
            <div class="stat-card__footer">
                <span class=trend_class>{stat.change}</span>
                <span class="stat-card__description">{stat.description}</span>
            </div>
        </div>
    }
}

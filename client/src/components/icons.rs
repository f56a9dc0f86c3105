//! Glyphs standing in for the icon set.
//!
//! Every icon renders as a single character inside an `.icon` span so the
//! stylesheet can size and tint them uniformly.

#[cfg(test)]
#[path = "icons_test.rs"]
mod icons_test;

use leptos::prelude::*;
use shop::dashboard::StatIcon;
use shop::job::StatusIcon;
use shop::navigation::NavIcon;

pub fn nav_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Dashboard => "\u{25A6}",
        NavIcon::Stethoscope => "\u{2695}",
        NavIcon::Book => "\u{1F4D6}",
        NavIcon::Package => "\u{1F4E6}",
        NavIcon::Users => "\u{1F465}",
        NavIcon::Briefcase => "\u{1F4BC}",
        NavIcon::FileText => "\u{1F4C4}",
        NavIcon::Calendar => "\u{1F4C5}",
        NavIcon::Chart => "\u{1F4CA}",
        NavIcon::Settings => "\u{2699}",
    }
}

pub fn status_glyph(icon: StatusIcon) -> &'static str {
    match icon {
        StatusIcon::Clock => "\u{23F1}",
        StatusIcon::Alert => "\u{26A0}",
        StatusIcon::Wrench => "\u{1F527}",
        StatusIcon::Check => "\u{2714}",
    }
}

pub fn stat_glyph(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Revenue => "$",
        StatIcon::Jobs => "\u{1F527}",
        StatIcon::Customers => "\u{1F465}",
        StatIcon::Clock => "\u{23F1}",
    }
}

#[component]
pub fn Icon(glyph: &'static str) -> impl IntoView {
    view! { <span class="icon" aria-hidden="true">{glyph}</span> }
}

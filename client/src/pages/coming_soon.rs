//! Stand-in page for routes that are listed in the sidebar but not built.

#[cfg(test)]
#[path = "coming_soon_test.rs"]
mod coming_soon_test;

use leptos::prelude::*;
use shop::navigation::placeholders;

/// Heading for `href`, if it names one of the unbuilt sidebar routes.
pub(crate) fn placeholder_title(href: &str) -> Option<&'static str> {
    placeholders().find(|item| item.href == href).map(|item| item.name)
}

#[component]
pub fn ComingSoonPage(href: &'static str) -> impl IntoView {
    let Some(title) = placeholder_title(href) else {
        log::warn!("{href} is not a placeholder route");
        return "Page not found.".into_any();
    };

    view! {
        <div class="page coming-soon">
            <h1>{title}</h1>
            <p class="coming-soon__text">"Coming soon..."</p>
        </div>
    }
    .into_any()
}

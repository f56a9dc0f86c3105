//! Root application component with routing and the shared layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use shop::navigation::APP_NAME;

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::pages::{
    coming_soon::ComingSoonPage, customers::CustomersPage, dashboard::DashboardPage,
    diagnostics::DiagnosticsPage, jobs::JobsPage,
};
use crate::state::ui::UiState;
use crate::util::preferences;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the layout state context and renders the sidebar, the header,
/// and the routed page body.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // The stored preference is only readable in the browser, so it is applied
    // after hydration rather than during the server render.
    Effect::new(move |_| {
        let stored = preferences::load();
        if stored.sidebar_collapsed {
            ui.update(|u| u.sidebar_collapsed = true);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/scooterpro.css"/>
        <Title text=APP_NAME/>

        <Router>
            <div class="app-shell">
                <Sidebar/>
                <div class="app-shell__main">
                    <Header/>
                    <main class="app-shell__content">
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=DashboardPage/>
                            <Route path=StaticSegment("diagnostics") view=DiagnosticsPage/>
                            <Route path=StaticSegment("customers") view=CustomersPage/>
                            <Route path=StaticSegment("jobs") view=JobsPage/>
                            <Route
                                path=StaticSegment("guides")
                                view=|| view! { <ComingSoonPage href="/guides"/> }
                            />
                            <Route
                                path=StaticSegment("parts")
                                view=|| view! { <ComingSoonPage href="/parts"/> }
                            />
                            <Route
                                path=StaticSegment("invoicing")
                                view=|| view! { <ComingSoonPage href="/invoicing"/> }
                            />
                            <Route
                                path=StaticSegment("scheduling")
                                view=|| view! { <ComingSoonPage href="/scheduling"/> }
                            />
                            <Route
                                path=StaticSegment("analytics")
                                view=|| view! { <ComingSoonPage href="/analytics"/> }
                            />
                            <Route
                                path=StaticSegment("settings")
                                view=|| view! { <ComingSoonPage href="/settings"/> }
                            />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}

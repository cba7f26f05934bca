//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    conferences::ConferencesPage, dashboard::DashboardPage, home::HomePage, login::LoginPage,
    new_conference::NewConferencePage,
};
use crate::state::{conferences::ConferencesState, session::GateState, ui::UiState};

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
/// Provides the session gate, UI, and listing contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The gate starts `Unknown`; only effects after hydration resolve it.
    provide_context(RwSignal::new(GateState::default()));
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ConferencesState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/conference-site.css"/>
        <Title text="Singapore MUN"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("dashboard")) view=DashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("conferences")) view=ConferencesPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("conferences"), StaticSegment("new"))
                    view=NewConferencePage
                />
            </Routes>
        </Router>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::desktop::DesktopPage;
use crate::state::desk::DeskState;

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
/// Provides the desk registry to the taskbar and window chrome.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let desk = RwSignal::new(DeskState::default());
    provide_context(desk);

    view! {
        <Stylesheet id="leptos" href="/pkg/unbias.css"/>
        <Title text="UNBIAS.AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DesktopPage/>
            </Routes>
        </Router>
    }
}

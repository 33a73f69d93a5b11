//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::portfolio::PortfolioPage;
use crate::state::site::SiteState;

/// Document title shown in the browser tab.
pub const PAGE_TITLE: &str = "Advanced Portfolio";
/// Content of the `description` meta tag.
pub const PAGE_DESCRIPTION: &str = "Leptos animated portfolio";

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
/// Provides the site state context and sets up client-side routing. The
/// portfolio is a single route; section switching happens inside it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = RwSignal::new(SiteState::default());
    provide_context(site);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>
        <Link rel="icon" href="/favicon.ico"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}

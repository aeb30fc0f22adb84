//! Root application component and SSR shell.
//!
//! ARCHITECTURE
//! ============
//! `App` provides the shared engine signal and the showcase catalogue as
//! context, then mounts the router. `shell` is the document template the host
//! renders around it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use stage::content::Catalogue;
use stage::engine::Engine;
use stage::layout::Viewport;

use crate::pages::home::HomePage;

/// HTML document wrapper used by the server renderer.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Replaced with a clock- and viewport-aware engine once hydrated.
    let engine = RwSignal::new(Engine::new(Viewport::default(), 0.0, 0));
    provide_context(engine);

    let catalogue = Catalogue::builtin().unwrap_or_else(|e| {
        log::error!("showcase catalogue unavailable: {e}");
        Catalogue::default()
    });
    provide_context(catalogue);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css" />
        <Title text="Portfolio" />
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

//! The single route: landing until confirmed, content afterwards.

use leptos::prelude::*;
use stage::engine::Engine;

use crate::pages::content::ContentPage;
use crate::pages::landing::LandingPage;
use crate::state::view::theme_class;
use crate::util::{clock, viewport};

#[component]
pub fn HomePage() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let hydrated = RwSignal::new(false);

    // The server has no clock or viewport; the session starts once the browser takes over.
    Effect::new(move || {
        if hydrated.get_untracked() {
            return;
        }
        engine.set(Engine::new(viewport::read(), clock::now_ms(), clock::seed()));
        hydrated.set(true);
    });
    clock::start_frame_loop(engine);
    viewport::install_listeners(engine);

    let confirmed = Memo::new(move |_| engine.with(|e| e.state().confirmed));
    let theme = Memo::new(move |_| engine.with(|e| theme_class(e.mode())));

    view! {
        <main class=move || theme.get()>
            <Show when=move || hydrated.get()>
                <Show when=move || confirmed.get() fallback=|| view! { <LandingPage /> }>
                    <ContentPage />
                </Show>
            </Show>
        </main>
    }
}

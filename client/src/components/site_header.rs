//! Persistent header shown after confirmation.

use leptos::prelude::*;
use stage::engine::Engine;
use stage::layout::Surface;

use crate::components::mode_toggle::ModeToggle;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let compact = Memo::new(move |_| engine.with(|e| e.header().is_some_and(|h| h.is_compact())));

    view! {
        <header class="site-header" class:site-header--compact=move || compact.get()>
            <ModeToggle surface=Surface::Header />
        </header>
    }
}

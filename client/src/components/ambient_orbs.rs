//! Blurred background orbs behind the landing screen.

use leptos::prelude::*;
use stage::engine::Engine;
use stage::reveal::Orb;

use crate::state::view::orb_style;

#[component]
pub fn AmbientOrbs() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let orbs = Memo::new(move |_| engine.with(|e| e.landing().map(|l| l.reveal().orbs().to_vec()).unwrap_or_default()));

    view! {
        <div class="orbs" aria-hidden="true">
            <For each=move || orbs.get() key=|orb: &Orb| (orb.id, orb.size_px.to_bits()) let:orb>
                <div class="orbs__orb" style=orb_style(&orb)></div>
            </For>
            <div class="orbs__vignette"></div>
            <div class="orbs__grain"></div>
        </div>
    }
}

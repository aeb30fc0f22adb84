//! Character sticker for the selected track.

use leptos::prelude::*;
use stage::engine::Engine;
use stage::landing::Landing;

use crate::state::view::sticker_src;

#[component]
pub fn Stickers() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let sticker = Memo::new(move |_| engine.with(|e| Landing::sticker(e.mode())));

    move || {
        sticker.get().and_then(|mode| {
            sticker_src(mode).map(|src| {
                view! {
                    <img
                        class=format!("sticker sticker--{}", mode.slug())
                        src=src
                        alt=format!("{} character", mode.label())
                    />
                }
            })
        })
    }
}

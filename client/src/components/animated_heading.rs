//! Landing heading with staggered words and the rotating slot.

use leptos::prelude::*;
use stage::engine::Engine;
use stage::reveal::{HEADING_WORD_COUNT, ROTATING_SLOT};

use crate::state::view::heading_view;

#[component]
pub fn AnimatedHeading() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let heading = Memo::new(move |_| engine.with(heading_view));

    let word = move |index: usize| {
        let visible = move || heading.with(|h| h.as_ref().is_some_and(|h| index < h.visible));
        let text = move || heading.with(|h| h.as_ref().map(|h| h.words[index]).unwrap_or_default());
        view! {
            <span
                class="heading__word"
                class:heading__word--visible=visible
                class:heading__word--rotating=index == ROTATING_SLOT
            >
                {text}
            </span>
        }
    };

    view! {
        <h1 class="heading">{(0..HEADING_WORD_COUNT).map(word).collect_view()}</h1>
    }
}

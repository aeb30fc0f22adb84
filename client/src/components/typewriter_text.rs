//! Typed landing description.

use leptos::prelude::*;
use stage::engine::Engine;

use crate::state::view::description_lines;

#[component]
pub fn TypewriterText() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let lines = Memo::new(move |_| engine.with(description_lines));

    view! {
        <p class="typewriter">
            {move || {
                lines
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| view! { {(i > 0).then(|| view! { <br /> })} {line} })
                    .collect_view()
            }}
            <span class="typewriter__caret" aria-hidden="true"></span>
        </p>
    }
}

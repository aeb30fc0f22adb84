//! Arrow button that confirms the landing selection.

use leptos::prelude::*;
use stage::engine::Engine;

use crate::util::{clock, log_actions};

#[component]
pub fn ProceedArrow(#[prop(into)] enabled: Signal<bool>) -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let on_click = move |_| {
        let now = clock::now_ms();
        engine.update(|e| log_actions(&e.proceed(now)));
    };

    view! {
        <button
            class="proceed-arrow"
            title="Continue"
            aria-label="Continue"
            disabled=move || !enabled.get()
            on:click=on_click
        >
            "→"
        </button>
    }
}

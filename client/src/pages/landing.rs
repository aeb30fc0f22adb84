//! Landing screen: orbs, staged heading, toggle with proceed arrow, typed
//! description, and the character sticker.

use leptos::prelude::*;
use stage::engine::Engine;
use stage::layout::Surface;

use crate::components::ambient_orbs::AmbientOrbs;
use crate::components::animated_heading::AnimatedHeading;
use crate::components::mode_toggle::ModeToggle;
use crate::components::proceed_arrow::ProceedArrow;
use crate::components::stickers::Stickers;
use crate::components::typewriter_text::TypewriterText;
use crate::state::view::landing_chrome;

#[component]
pub fn LandingPage() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let chrome = Memo::new(move |_| engine.with(landing_chrome).unwrap_or_default());
    let desktop = Memo::new(move |_| engine.with(|e| e.viewport().is_desktop()));

    view! {
        <div class="landing" class:landing--exiting=move || chrome.get().exiting>
            <AmbientOrbs />
            <div class="landing__stack">
                <AnimatedHeading />
                <div
                    class="landing__controls"
                    class:landing__controls--row=move || desktop.get()
                    class:landing__controls--visible=move || chrome.get().toggle_visible
                >
                    <ModeToggle surface=Surface::Landing />
                    <ProceedArrow enabled=Signal::derive(move || chrome.get().can_proceed) />
                </div>
                <div
                    class="landing__description"
                    class:landing__description--visible=move || chrome.get().description_visible
                >
                    <TypewriterText />
                </div>
            </div>
            <Stickers />
        </div>
    }
}

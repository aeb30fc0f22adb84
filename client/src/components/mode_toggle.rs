//! Two-way toggle used on the landing screen and in the header.
//!
//! The knob takes pointer drags; each label half takes clicks. The engine
//! decides which mode a gesture resolves to.

use leptos::prelude::*;
use stage::engine::Engine;
use stage::layout::Surface;
use stage::mode::Mode;

use crate::state::view::{ripple_style, toggle_view};
use crate::util::{clock, log_actions};

#[component]
pub fn ModeToggle(surface: Surface) -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let view = Memo::new(move |_| engine.with(|e| toggle_view(e, surface)));
    let selected = Memo::new(move |_| engine.with(Engine::mode));

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                if let Err(e) = el.set_pointer_capture(ev.pointer_id()) {
                    log::debug!("pointer capture failed: {e:?}");
                }
            }
        }
        let x = f64::from(ev.client_x());
        engine.update(|e| e.pointer_down(surface, x));
    };
    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let x = f64::from(ev.client_x());
        engine.maybe_update(|e| e.pointer_move(surface, x));
    };
    let on_pointer_up = move |_ev: leptos::ev::PointerEvent| {
        let now = clock::now_ms();
        engine.update(|e| log_actions(&e.pointer_up(surface, now)));
    };
    let on_pointer_cancel = move |_ev: leptos::ev::PointerEvent| {
        engine.update(|e| e.pointer_cancel(surface));
    };

    let click = move |mode: Mode, ev: leptos::ev::MouseEvent| {
        let now = clock::now_ms();
        let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        engine.update(|e| {
            if surface == Surface::Landing {
                e.ripple(x, y, now);
            }
            log_actions(&e.click(surface, mode, now));
        });
    };

    let ripple = move || {
        engine.with(|e| e.landing().and_then(|l| l.ripple()).map(|r| ripple_style(&r, clock::now_ms())))
    };

    let root_class = match surface {
        Surface::Landing => "mode-toggle mode-toggle--landing",
        Surface::Header => "mode-toggle mode-toggle--header",
    };

    view! {
        <Show when=move || view.with(Option::is_some)>
            <div
                class=root_class
                class:mode-toggle--dragging=move || view.with(|v| v.as_ref().is_some_and(|v| v.dragging))
                style=move || view.with(|v| v.as_ref().map(|v| v.track_style()).unwrap_or_default())
                role="radiogroup"
            >
                <Show when=move || ripple().is_some()>
                    <span class="mode-toggle__ripple" style=move || ripple().unwrap_or_default()></span>
                </Show>
                {Mode::TRACKS
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <button
                                class="mode-toggle__label"
                                data-mode=mode.slug()
                                role="radio"
                                aria-checked=move || (selected.get() == mode).to_string()
                                style=move || view.with(|v| v.as_ref().map(|v| v.label_style(mode)).unwrap_or_default())
                                on:click=move |ev| click(mode, ev)
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <div
                    class="mode-toggle__knob"
                    style=move || view.with(|v| v.as_ref().map(|v| v.knob_style()).unwrap_or_default())
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointercancel=on_pointer_cancel
                ></div>
            </div>
        </Show>
    }
}

//! Window size and scroll tracking.

use leptos::prelude::*;
use stage::engine::Engine;
use stage::layout::Viewport;

/// Current window metrics; the desktop default on the server.
pub fn read() -> Viewport {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or_default();
        let scroll_y = window.scroll_y().unwrap_or_default();
        Viewport::new(width, scroll_y)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Viewport::default()
    }
}

/// Forward resize and scroll events to the engine until the owner is cleaned up.
pub fn install_listeners(engine: RwSignal<Engine>) {
    #[cfg(feature = "hydrate")]
    {
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            let width = read().width;
            engine.maybe_update(|engine| engine.resize(width));
        });
        let scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = read().scroll_y;
            engine.maybe_update(|engine| {
                let actions = engine.scroll(scroll_y);
                crate::util::log_actions(&actions);
                !actions.is_empty()
            });
        });
        on_cleanup(move || {
            resize.remove();
            scroll.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = engine;
    }
}

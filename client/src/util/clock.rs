//! Monotonic clock and the engine frame loop.
//!
//! The loop runs while its owner is mounted: a liveness flag is cleared in
//! `on_cleanup`, and the task exits on its next wake.

use leptos::prelude::*;
use stage::engine::Engine;

/// Frame interval for the engine tick.
#[cfg(feature = "hydrate")]
const FRAME_MS: u64 = 16;

/// Milliseconds since page load; `0.0` on the server.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Per-session seed for the orb field.
pub fn seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        seed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Tick `engine` every frame until the calling owner is cleaned up.
///
/// Subscribers are only notified for frames that changed something.
pub fn start_frame_loop(engine: RwSignal<Engine>) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(FRAME_MS)).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let now = now_ms();
                engine.maybe_update(|engine| {
                    let frame = engine.tick(now);
                    crate::util::log_actions(&frame.actions);
                    frame.dirty
                });
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = engine;
    }
}

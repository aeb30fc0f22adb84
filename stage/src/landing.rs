//! Landing screen aggregate.
//!
//! Owns everything that exists only while the selection is unconfirmed: the
//! large toggle, the reveal timeline, the description typewriter, and the click
//! ripple. Dropped as a whole when the controller confirms, so none of its
//! timers outlive it.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use crate::consts::{DESCRIPTION_REVEAL_MS, RIPPLE_DURATION_MS};
use crate::layout::{Surface, ToggleLayout, Viewport};
use crate::mode::Mode;
use crate::reveal::{RevealPhase, RevealSequencer, RevealStage, RevealUpdate};
use crate::selector::ModeSelector;
use crate::typewriter::Typewriter;

/// Expanding highlight from the last toggle click, in toggle-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub x: f64,
    pub y: f64,
    pub started_ms: f64,
}

impl Ripple {
    /// 0 at the click, 1 once fully expanded.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.started_ms) / RIPPLE_DURATION_MS).clamp(0.0, 1.0)
    }
}

/// What one [`Landing::tick`] changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandingUpdate {
    pub reveal: RevealUpdate,
    pub knob_moving: bool,
    pub typed: bool,
    pub ripple_moving: bool,
}

impl LandingUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reveal.is_empty() && !self.knob_moving && !self.typed && !self.ripple_moving
    }
}

#[derive(Clone, Debug)]
pub struct Landing {
    selector: ModeSelector,
    reveal: RevealSequencer,
    typewriter: Typewriter,
    ripple: Option<Ripple>,
    mounted_at: f64,
}

impl Landing {
    #[must_use]
    pub fn mount(now_ms: f64, seed: u64, viewport: &Viewport, mode: Mode) -> Self {
        let layout = ToggleLayout::for_surface(Surface::Landing, viewport);
        Self {
            selector: ModeSelector::new(layout, mode),
            reveal: RevealSequencer::mount(now_ms, seed, viewport.is_desktop()),
            typewriter: Typewriter::new(mode.description()),
            ripple: None,
            mounted_at: now_ms,
        }
    }

    #[must_use]
    pub fn selector(&self) -> &ModeSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut ModeSelector {
        &mut self.selector
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealSequencer {
        &self.reveal
    }

    #[must_use]
    pub fn typewriter(&self) -> &Typewriter {
        &self.typewriter
    }

    #[must_use]
    pub fn ripple(&self) -> Option<Ripple> {
        self.ripple
    }

    /// Character sticker to show for `mode`: exactly one per chosen track, none when unset.
    #[must_use]
    pub fn sticker(mode: Mode) -> Option<Mode> {
        mode.is_set().then_some(mode)
    }

    /// The proceed arrow accepts clicks once it is visible and a track is chosen.
    #[must_use]
    pub fn can_proceed(&self, mode: Mode) -> bool {
        mode.is_set() && self.reveal.toggle_visible() && !self.is_exiting()
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.reveal.phase() == RevealPhase::Exiting
    }

    /// Record a toggle click for the ripple.
    pub fn start_ripple(&mut self, x: f64, y: f64, now_ms: f64) {
        self.ripple = Some(Ripple { x, y, started_ms: now_ms });
    }

    /// Selection changed: retype the description and move the knob if the
    /// pointer is not holding it. The description is frozen once exiting.
    pub fn on_mode_changed(&mut self, mode: Mode, now_ms: f64) {
        if !self.is_exiting() {
            self.typewriter.set_text(mode.description(), now_ms);
        }
        if !self.selector.is_dragging() {
            self.selector.retarget(mode);
        }
    }

    /// Viewport changed: re-derive toggle geometry and the orb field.
    pub fn on_resize(&mut self, viewport: &Viewport, mode: Mode) -> bool {
        let layout = ToggleLayout::for_surface(Surface::Landing, viewport);
        let mut changed = false;
        if layout != *self.selector.layout() {
            self.selector.relayout(layout, mode);
            changed = true;
        }
        changed |= self.reveal.set_desktop(viewport.is_desktop());
        changed
    }

    /// The visitor proceeded: cancel the reveal and fade out.
    pub fn begin_exit(&mut self) {
        self.reveal.exit();
    }

    pub fn tick(&mut self, now_ms: f64, elapsed_ms: f64) -> LandingUpdate {
        let reveal = self.reveal.advance(now_ms);
        if reveal.stages.contains(&RevealStage::Description) {
            self.typewriter.start(self.mounted_at + DESCRIPTION_REVEAL_MS);
        }
        let typed = !self.is_exiting() && self.typewriter.advance(now_ms);
        let knob_moving = self.selector.tick(elapsed_ms);
        let ripple_moving = match self.ripple {
            Some(ripple) if ripple.progress(now_ms) >= 1.0 => {
                self.ripple = None;
                true
            }
            Some(_) => true,
            None => false,
        };
        LandingUpdate { reveal, knob_moving, typed, ripple_moving }
    }

    /// Absolute time of the next scheduled change (stage, word, or character).
    #[must_use]
    pub fn next_wake_ms(&self, now_ms: f64) -> Option<f64> {
        let next_char = if self.is_exiting() { None } else { self.typewriter.next_char_ms() };
        [self.reveal.next_wake_ms(now_ms), next_char].into_iter().flatten().reduce(f64::min)
    }
}

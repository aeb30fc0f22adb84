//! Toggle selector: continuous knob drag resolved to a discrete [`Mode`].
//!
//! DESIGN
//! ======
//! The knob offset is a rendering value only. Callers observe a [`Mode`] when a
//! drag ends or a half is clicked; everything in between is the knob spring
//! and the label crossfade weights derived from it.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use crate::consts::LABEL_DIM_WEIGHT;
use crate::layout::ToggleLayout;
use crate::mode::Mode;
use crate::spring::Spring;

/// Opacity weight of each toggle label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelWeights {
    pub storytelling: f64,
    pub uiux: f64,
}

/// Pointer context captured on drag start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Pointer x minus knob offset at drag start; keeps the grab point under the pointer.
    pub origin: f64,
}

/// One toggle instance (landing or header).
#[derive(Clone, Debug, PartialEq)]
pub struct ModeSelector {
    layout: ToggleLayout,
    knob: Spring,
    drag: Option<DragState>,
}

impl ModeSelector {
    /// A selector whose knob rests on the extreme for `mode`.
    #[must_use]
    pub fn new(layout: ToggleLayout, mode: Mode) -> Self {
        Self { layout, knob: Spring::at_rest(mode.knob_target(layout.max_drag())), drag: None }
    }

    #[must_use]
    pub fn layout(&self) -> &ToggleLayout {
        &self.layout
    }

    #[must_use]
    pub fn knob_offset(&self) -> f64 {
        self.knob.position()
    }

    /// Where the knob is heading (equal to the offset once settled).
    #[must_use]
    pub fn knob_target(&self) -> f64 {
        self.knob.target()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the knob is still travelling toward its target.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.knob.is_settled()
    }

    /// Begin a drag at `pointer_x` (track-relative). Stops any snap in flight.
    pub fn on_drag_start(&mut self, pointer_x: f64) {
        let offset = self.knob.position();
        self.knob.hold(offset);
        self.drag = Some(DragState { origin: pointer_x - offset });
    }

    /// Move the knob under the pointer, clamped to the track.
    ///
    /// Ignored when no drag is in progress.
    pub fn on_drag_update(&mut self, pointer_x: f64) -> LabelWeights {
        if let Some(drag) = self.drag {
            let raw = pointer_x - drag.origin;
            let offset = if raw.is_finite() { raw.clamp(0.0, self.layout.max_drag()) } else { 0.0 };
            self.knob.hold(offset);
        }
        self.label_weights()
    }

    /// Release the knob: resolve to a mode and snap to its extreme.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn on_drag_end(&mut self) -> Option<Mode> {
        self.drag.take()?;
        let mode = resolve_offset(self.knob.position(), self.layout.midpoint());
        self.knob.retarget(mode.knob_target(self.layout.max_drag()));
        Some(mode)
    }

    /// Abandon a drag without resolving (pointer cancelled). The knob returns to `mode`.
    pub fn cancel_drag(&mut self, mode: Mode) {
        if self.drag.take().is_some() {
            self.retarget(mode);
        }
    }

    /// Direct selection of one half. `Unset` is not clickable.
    pub fn on_click(&mut self, mode: Mode) -> Option<Mode> {
        if !mode.is_set() {
            return None;
        }
        self.drag = None;
        self.retarget(mode);
        Some(mode)
    }

    /// Animate the knob toward the extreme for `mode` (selection changed elsewhere).
    pub fn retarget(&mut self, mode: Mode) {
        self.knob.retarget(mode.knob_target(self.layout.max_drag()));
    }

    /// Apply new container geometry and re-derive the knob target from `mode`.
    ///
    /// Any drag in progress is dropped; its pixel origin belonged to the old layout.
    pub fn relayout(&mut self, layout: ToggleLayout, mode: Mode) {
        self.layout = layout;
        self.drag = None;
        self.knob.clamp_into(0.0, layout.max_drag());
        self.retarget(mode);
    }

    /// Advance the knob spring. Returns `true` while it is moving.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        if self.drag.is_some() {
            return false;
        }
        self.knob.step(elapsed_ms)
    }

    /// Label crossfade weights for the current knob offset.
    #[must_use]
    pub fn label_weights(&self) -> LabelWeights {
        label_weights(self.knob.position(), self.layout.max_drag())
    }
}

/// Discrete mode for a knob offset. The exact midpoint resolves to storytelling.
#[must_use]
pub fn resolve_offset(offset: f64, midpoint: f64) -> Mode {
    if offset <= midpoint { Mode::Storytelling } else { Mode::Uiux }
}

/// Label weights pinned at `(0, midpoint, max_drag)`.
///
/// Storytelling goes `1 → 0.3 → 0.3`, UI/UX goes `0.3 → 0.3 → 1`; both labels
/// are dimmed at the boundary.
#[must_use]
pub fn label_weights(offset: f64, max_drag: f64) -> LabelWeights {
    let stops = [0.0, max_drag / 2.0, max_drag];
    LabelWeights {
        storytelling: interpolate(offset, stops, [1.0, LABEL_DIM_WEIGHT, LABEL_DIM_WEIGHT]),
        uiux: interpolate(offset, stops, [LABEL_DIM_WEIGHT, LABEL_DIM_WEIGHT, 1.0]),
    }
}

/// Piecewise-linear interpolation, clamped outside the stops.
fn interpolate(x: f64, stops: [f64; 3], values: [f64; 3]) -> f64 {
    if x.is_nan() || x <= stops[0] {
        return values[0];
    }
    if x >= stops[2] {
        return values[2];
    }
    for (i, pair) in stops.windows(2).enumerate() {
        let (x0, x1) = (pair[0], pair[1]);
        if x <= x1 {
            let span = x1 - x0;
            if span <= 0.0 {
                return values[i + 1];
            }
            let t = (x - x0) / span;
            return values[i] + (values[i + 1] - values[i]) * t;
        }
    }
    values[2]
}

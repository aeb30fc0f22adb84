//! Toggle geometry and viewport breakpoints.
//!
//! DESIGN
//! ======
//! Every pixel the knob may travel is derived here from the container size.
//! Nothing downstream caches a pixel offset across a layout change: selectors
//! receive a fresh [`ToggleLayout`] and re-derive the knob target from the
//! current mode.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::consts::{COMPACT_SCROLL_THRESHOLD_PX, DESKTOP_BREAKPOINT_PX, TOGGLE_PADDING_PX};

/// Which toggle instance an input or layout belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The large toggle on the landing screen.
    Landing,
    /// The persistent toggle in the content header.
    Header,
}

/// Window metrics relevant to toggle sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Inner window width in CSS pixels.
    pub width: f64,
    /// Vertical scroll offset in CSS pixels.
    pub scroll_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: DESKTOP_BREAKPOINT_PX, scroll_y: 0.0 }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, scroll_y: f64) -> Self {
        Self { width, scroll_y }
    }

    /// Desktop presets apply at and above the breakpoint.
    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.width >= DESKTOP_BREAKPOINT_PX
    }

    /// The header compacts strictly past the scroll threshold.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.scroll_y > COMPACT_SCROLL_THRESHOLD_PX
    }
}

/// Resolved toggle geometry for one container size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToggleLayout {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub knob_width: f64,
    pub knob_height: f64,
    max_drag: f64,
}

impl ToggleLayout {
    /// Derive geometry from a container size.
    ///
    /// The knob fills half of the padded track; `floor_knob` rounds its width
    /// down to a whole pixel (the header does this). Degenerate sizes clamp to
    /// zero instead of going negative.
    #[must_use]
    pub fn from_container(width: f64, height: f64, padding: f64, floor_knob: bool) -> Self {
        let width = finite_or_zero(width).max(0.0);
        let height = finite_or_zero(height).max(0.0);
        let padding = finite_or_zero(padding).max(0.0);
        let available = (width - padding * 2.0).max(0.0);
        let half = available / 2.0;
        let knob_width = if floor_knob { half.floor() } else { half };
        let knob_height = (height - padding * 2.0).max(0.0);
        let max_drag = (width - padding * 2.0 - knob_width).max(0.0);
        Self { width, height, padding, knob_width, knob_height, max_drag }
    }

    /// Preset geometry for a toggle surface at the given viewport.
    #[must_use]
    pub fn for_surface(surface: Surface, viewport: &Viewport) -> Self {
        let (width, height) = preset_size(surface, viewport.is_desktop(), viewport.is_compact());
        Self::from_container(width, height, TOGGLE_PADDING_PX, surface == Surface::Header)
    }

    /// Width of the padded track both halves share.
    #[must_use]
    pub fn available_width(&self) -> f64 {
        (self.width - self.padding * 2.0).max(0.0)
    }

    /// Maximum knob offset from the left edge.
    #[must_use]
    pub fn max_drag(&self) -> f64 {
        self.max_drag
    }

    /// Decision boundary between the two tracks.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.max_drag / 2.0
    }

    /// Whether both extremes coincide (the track is too narrow to travel).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max_drag <= 0.0
    }
}

/// Container size `(width, height)` for a surface.
///
/// The landing toggle only distinguishes desktop from mobile; the header also
/// shrinks once the page has scrolled past the compact threshold.
#[must_use]
pub fn preset_size(surface: Surface, desktop: bool, compact: bool) -> (f64, f64) {
    match (surface, desktop, compact) {
        (Surface::Landing, true, _) => (480.0, 80.0),
        (Surface::Landing, false, _) => (320.0, 64.0),
        (Surface::Header, true, false) => (400.0, 60.0),
        (Surface::Header, true, true) => (340.0, 52.0),
        (Surface::Header, false, false) => (280.0, 56.0),
        (Surface::Header, false, true) => (240.0, 48.0),
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

//! Header toggle mounted after confirmation.
//!
//! A second [`ModeSelector`] whose resolutions go straight to the controller
//! without another confirmation. Its size depends on the viewport breakpoint
//! and on whether the page has scrolled past the compact threshold; every
//! size change re-derives the knob from the current mode.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::layout::{Surface, ToggleLayout, Viewport};
use crate::mode::Mode;
use crate::selector::ModeSelector;

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderSync {
    selector: ModeSelector,
    compact: bool,
    desktop: bool,
}

impl HeaderSync {
    #[must_use]
    pub fn mount(viewport: &Viewport, mode: Mode) -> Self {
        let layout = ToggleLayout::for_surface(Surface::Header, viewport);
        Self { selector: ModeSelector::new(layout, mode), compact: viewport.is_compact(), desktop: viewport.is_desktop() }
    }

    #[must_use]
    pub fn selector(&self) -> &ModeSelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut ModeSelector {
        &mut self.selector
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.desktop
    }

    /// Scroll moved. Returns `Some(compact)` when the preset flipped.
    pub fn on_scroll(&mut self, viewport: &Viewport, mode: Mode) -> Option<bool> {
        let compact = viewport.is_compact();
        if compact == self.compact {
            return None;
        }
        log::debug!("header {}", if compact { "compacted" } else { "expanded" });
        self.compact = compact;
        self.relayout(viewport, mode);
        Some(compact)
    }

    /// Window resized. Returns `true` when the geometry changed.
    pub fn on_resize(&mut self, viewport: &Viewport, mode: Mode) -> bool {
        self.desktop = viewport.is_desktop();
        self.compact = viewport.is_compact();
        self.relayout(viewport, mode)
    }

    /// The controller's mode changed elsewhere; move the knob to match.
    pub fn sync(&mut self, mode: Mode) {
        if !self.selector.is_dragging() {
            self.selector.retarget(mode);
        }
    }

    fn relayout(&mut self, viewport: &Viewport, mode: Mode) -> bool {
        let layout = ToggleLayout::for_surface(Surface::Header, viewport);
        if layout == *self.selector.layout() {
            return false;
        }
        self.selector.relayout(layout, mode);
        true
    }
}

//! Content view selection after confirmation.
//!
//! DESIGN
//! ======
//! Exactly one view is *current* at any time. When the mode changes, the old
//! view stays mounted for [`CONTENT_EXIT_MS`] so it can animate out while the
//! new view enters; a further change during that window replaces the entering
//! view and keeps the one already leaving.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::consts::CONTENT_EXIT_MS;
use crate::controller::SelectionState;
use crate::mode::Mode;

/// One of the two content pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentView {
    Storytelling,
    Uiux,
}

impl ContentView {
    /// View for a mode; `Unset` has none.
    #[must_use]
    pub fn for_mode(mode: Mode) -> Option<Self> {
        match mode {
            Mode::Storytelling => Some(Self::Storytelling),
            Mode::Uiux => Some(Self::Uiux),
            Mode::Unset => None,
        }
    }

    #[must_use]
    pub fn mode(self) -> Mode {
        match self {
            Self::Storytelling => Mode::Storytelling,
            Self::Uiux => Mode::Uiux,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum RoutePhase {
    Empty,
    Showing(ContentView),
    Leaving { from: ContentView, to: ContentView, until_ms: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentRouter {
    phase: RoutePhase,
}

impl Default for ContentRouter {
    fn default() -> Self {
        Self { phase: RoutePhase::Empty }
    }
}

impl ContentRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile with the selection. Returns `true` when the current view changed.
    pub fn update(&mut self, state: &SelectionState, now_ms: f64) -> bool {
        let wanted = if state.confirmed { ContentView::for_mode(state.selected_mode) } else { None };
        let Some(wanted) = wanted else {
            let changed = self.phase != RoutePhase::Empty;
            self.phase = RoutePhase::Empty;
            return changed;
        };
        let next = match self.phase {
            RoutePhase::Empty => RoutePhase::Showing(wanted),
            RoutePhase::Showing(current) if current == wanted => return false,
            RoutePhase::Showing(current) => {
                RoutePhase::Leaving { from: current, to: wanted, until_ms: now_ms + CONTENT_EXIT_MS }
            }
            RoutePhase::Leaving { to, .. } if to == wanted => return false,
            RoutePhase::Leaving { from, .. } if from == wanted => RoutePhase::Showing(wanted),
            RoutePhase::Leaving { from, until_ms, .. } => RoutePhase::Leaving { from, to: wanted, until_ms },
        };
        log::debug!("content route: {:?} -> {next:?}", self.phase);
        self.phase = next;
        true
    }

    /// Retire the leaving view once its exit has run. Returns `true` when it was dropped.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if let RoutePhase::Leaving { to, until_ms, .. } = self.phase {
            if now_ms >= until_ms {
                self.phase = RoutePhase::Showing(to);
                return true;
            }
        }
        false
    }

    /// The view that is (or is becoming) current.
    #[must_use]
    pub fn mounted(&self) -> Option<ContentView> {
        match self.phase {
            RoutePhase::Empty => None,
            RoutePhase::Showing(view) | RoutePhase::Leaving { to: view, .. } => Some(view),
        }
    }

    /// The view animating out, if any.
    #[must_use]
    pub fn leaving(&self) -> Option<ContentView> {
        match self.phase {
            RoutePhase::Leaving { from, .. } => Some(from),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.leaving().is_some()
    }

    #[must_use]
    pub fn next_wake_ms(&self) -> Option<f64> {
        match self.phase {
            RoutePhase::Leaving { until_ms, .. } => Some(until_ms),
            _ => None,
        }
    }
}

//! Single owner of the selection state.
//!
//! DESIGN
//! ======
//! Every write to [`SelectionState`] goes through [`ViewTransitionController`].
//! Toggles never set `confirmed` themselves; they call [`select_mode`], and the
//! proceed arrow calls [`proceed`], which arms one deadline that [`poll`] turns
//! into the confirmation.
//!
//! ```text
//!            select_mode(m)             proceed()               poll(now ≥ due)
//!   browsing ───────────────▶ browsing ──────────▶ transitioning ───────────────▶ confirmed
//!      ▲  (unset → mode)          │                   │ proceed(): ignored           │ select_mode(m):
//!      └──────────────────────────┘                   │ select_mode(m): allowed      │ header switches
//! ```
//!
//! [`select_mode`]: ViewTransitionController::select_mode
//! [`proceed`]: ViewTransitionController::proceed
//! [`poll`]: ViewTransitionController::poll

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::consts::PROCEED_DELAY_MS;
use crate::mode::Mode;

/// Session-wide selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_mode: Mode,
    /// Flips to `true` once and stays there.
    pub confirmed: bool,
    /// `true` for the delay between proceeding and confirmation.
    pub transitioning: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self { selected_mode: Mode::Storytelling, confirmed: false, transitioning: false }
    }
}

/// Result of a [`ViewTransitionController::proceed`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProceedOutcome {
    /// Confirmation will land at this absolute time.
    Scheduled { due_ms: f64 },
    /// A transition is already in flight.
    AlreadyTransitioning,
    /// The session is already confirmed.
    AlreadyConfirmed,
    /// No track has been chosen yet.
    NothingSelected,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransitionController {
    state: SelectionState,
    confirm_due_ms: Option<f64>,
}

impl ViewTransitionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller starting from `mode` instead of the default track.
    #[must_use]
    pub fn with_mode(mode: Mode) -> Self {
        Self { state: SelectionState { selected_mode: mode, ..SelectionState::default() }, confirm_due_ms: None }
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.selected_mode
    }

    /// Record a selection. Last write wins; `confirmed` is never touched.
    ///
    /// Returns whether the mode changed. `Unset` is refused once a track has
    /// been chosen.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        if !mode.is_set() && self.state.selected_mode.is_set() {
            log::debug!("ignoring reset to unset");
            return false;
        }
        if mode == self.state.selected_mode {
            return false;
        }
        log::debug!("mode selected: {} -> {mode}", self.state.selected_mode);
        self.state.selected_mode = mode;
        true
    }

    /// Start the confirmation delay.
    pub fn proceed(&mut self, now_ms: f64) -> ProceedOutcome {
        let outcome = if self.state.confirmed {
            ProceedOutcome::AlreadyConfirmed
        } else if self.state.transitioning {
            ProceedOutcome::AlreadyTransitioning
        } else if !self.state.selected_mode.is_set() {
            ProceedOutcome::NothingSelected
        } else {
            let due_ms = now_ms + PROCEED_DELAY_MS;
            self.state.transitioning = true;
            self.confirm_due_ms = Some(due_ms);
            ProceedOutcome::Scheduled { due_ms }
        };
        log::debug!("proceed at {now_ms:.0}ms: {outcome:?}");
        outcome
    }

    /// Land the confirmation once its deadline passes. Returns `true` exactly once.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.confirm_due_ms {
            Some(due) if now_ms >= due => {
                self.confirm_due_ms = None;
                self.state.transitioning = false;
                self.state.confirmed = true;
                log::debug!("confirmed {}", self.state.selected_mode);
                true
            }
            _ => false,
        }
    }

    /// Absolute time of the pending confirmation.
    #[must_use]
    pub fn confirm_due_ms(&self) -> Option<f64> {
        self.confirm_due_ms
    }
}

//! Top-level engine: routes host input to the components and reports what changed.
//!
//! DESIGN
//! ======
//! The host (the Leptos client) owns no state of its own. It forwards pointer,
//! viewport and clock input here and renders from the queries below. Every input
//! returns the [`Action`]s it caused so the host can log or react without
//! diffing state.
//!
//! Mounting follows the selection state: the [`Landing`] exists exactly while
//! the session is unconfirmed; the [`HeaderSync`] and a content view exist
//! exactly once it is confirmed.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::controller::{ProceedOutcome, SelectionState, ViewTransitionController};
use crate::header::HeaderSync;
use crate::landing::Landing;
use crate::layout::{Surface, Viewport};
use crate::mode::Mode;
use crate::reveal::RevealStage;
use crate::router::{ContentRouter, ContentView};
use crate::selector::ModeSelector;

/// Changes reported to the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The controller accepted a new mode.
    ModeSelected(Mode),
    /// Confirmation will land at this time; the landing is fading out.
    ProceedScheduled { due_ms: f64 },
    /// A proceed request was refused.
    ProceedIgnored(ProceedOutcome),
    /// The selection is confirmed.
    Confirmed(Mode),
    LandingUnmounted,
    HeaderMounted,
    /// A landing reveal stage fired.
    Reveal(RevealStage),
    /// The current content view changed.
    RouteChanged(Option<ContentView>),
    /// The header switched between its primary and compact presets.
    HeaderCompacted(bool),
}

/// Result of one [`Engine::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub actions: Vec<Action>,
    /// Something visible moved; the host should re-render.
    pub dirty: bool,
}

#[derive(Clone, Debug)]
pub struct Engine {
    controller: ViewTransitionController,
    viewport: Viewport,
    landing: Option<Landing>,
    header: Option<HeaderSync>,
    router: ContentRouter,
    last_tick_ms: Option<f64>,
}

impl Engine {
    /// Fresh session: storytelling selected, landing mounted at `now_ms`.
    #[must_use]
    pub fn new(viewport: Viewport, now_ms: f64, seed: u64) -> Self {
        Self::with_mode(viewport, Mode::Storytelling, now_ms, seed)
    }

    /// Session starting from `mode` (e.g. `Unset` to show the selection hint).
    #[must_use]
    pub fn with_mode(viewport: Viewport, mode: Mode, now_ms: f64, seed: u64) -> Self {
        Self {
            controller: ViewTransitionController::with_mode(mode),
            viewport,
            landing: Some(Landing::mount(now_ms, seed, &viewport, mode)),
            header: None,
            router: ContentRouter::new(),
            last_tick_ms: None,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.controller.state()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn landing(&self) -> Option<&Landing> {
        self.landing.as_ref()
    }

    #[must_use]
    pub fn header(&self) -> Option<&HeaderSync> {
        self.header.as_ref()
    }

    #[must_use]
    pub fn router(&self) -> &ContentRouter {
        &self.router
    }

    /// Selector for a surface, if that surface is mounted.
    #[must_use]
    pub fn selector(&self, surface: Surface) -> Option<&ModeSelector> {
        match surface {
            Surface::Landing => self.landing.as_ref().map(Landing::selector),
            Surface::Header => self.header.as_ref().map(HeaderSync::selector),
        }
    }

    /// Whether the proceed arrow should accept a click.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.landing.as_ref().is_some_and(|landing| landing.can_proceed(self.mode()))
    }

    /// Earliest absolute time something is scheduled to change.
    ///
    /// Springs and ripples are not included; while [`Frame::dirty`] is set the
    /// host should keep ticking every frame anyway.
    #[must_use]
    pub fn next_wake_ms(&self, now_ms: f64) -> Option<f64> {
        [
            self.controller.confirm_due_ms(),
            self.landing.as_ref().and_then(|landing| landing.next_wake_ms(now_ms)),
            self.router.next_wake_ms(),
        ]
        .into_iter()
        .flatten()
        .reduce(f64::min)
    }

    // --- Pointer input ---

    pub fn pointer_down(&mut self, surface: Surface, pointer_x: f64) {
        if let Some(selector) = self.selector_mut(surface) {
            selector.on_drag_start(pointer_x);
        }
    }

    /// Returns `true` when the knob moved.
    pub fn pointer_move(&mut self, surface: Surface, pointer_x: f64) -> bool {
        let Some(selector) = self.selector_mut(surface) else {
            return false;
        };
        if !selector.is_dragging() {
            return false;
        }
        let before = selector.knob_offset();
        selector.on_drag_update(pointer_x);
        selector.knob_offset() != before
    }

    pub fn pointer_up(&mut self, surface: Surface, now_ms: f64) -> Vec<Action> {
        match self.selector_mut(surface).and_then(ModeSelector::on_drag_end) {
            Some(mode) => self.apply_mode(mode, now_ms),
            None => Vec::new(),
        }
    }

    pub fn pointer_cancel(&mut self, surface: Surface) {
        let mode = self.mode();
        if let Some(selector) = self.selector_mut(surface) {
            selector.cancel_drag(mode);
        }
    }

    /// Click on one half of a toggle.
    pub fn click(&mut self, surface: Surface, mode: Mode, now_ms: f64) -> Vec<Action> {
        match self.selector_mut(surface).and_then(|selector| selector.on_click(mode)) {
            Some(mode) => self.apply_mode(mode, now_ms),
            None => Vec::new(),
        }
    }

    /// Start the landing toggle's click ripple at toggle-local `(x, y)`.
    pub fn ripple(&mut self, x: f64, y: f64, now_ms: f64) {
        if let Some(landing) = self.landing.as_mut() {
            landing.start_ripple(x, y, now_ms);
        }
    }

    /// Proceed arrow clicked.
    pub fn proceed(&mut self, now_ms: f64) -> Vec<Action> {
        match self.controller.proceed(now_ms) {
            ProceedOutcome::Scheduled { due_ms } => {
                if let Some(landing) = self.landing.as_mut() {
                    landing.begin_exit();
                }
                vec![Action::ProceedScheduled { due_ms }]
            }
            refused => vec![Action::ProceedIgnored(refused)],
        }
    }

    // --- Viewport input ---

    /// Window resized. Returns `true` when any geometry changed.
    pub fn resize(&mut self, width: f64) -> bool {
        self.viewport.width = width;
        let mode = self.mode();
        let viewport = self.viewport;
        let mut changed = false;
        if let Some(landing) = self.landing.as_mut() {
            changed |= landing.on_resize(&viewport, mode);
        }
        if let Some(header) = self.header.as_mut() {
            changed |= header.on_resize(&viewport, mode);
        }
        changed
    }

    pub fn scroll(&mut self, scroll_y: f64) -> Vec<Action> {
        self.viewport.scroll_y = scroll_y;
        let mode = self.mode();
        let viewport = self.viewport;
        self.header
            .as_mut()
            .and_then(|header| header.on_scroll(&viewport, mode))
            .map(Action::HeaderCompacted)
            .into_iter()
            .collect()
    }

    // --- Clock ---

    /// Advance every component to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Frame {
        let elapsed = self.last_tick_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_tick_ms = Some(now_ms);
        let mut frame = Frame::default();

        if self.controller.poll(now_ms) {
            self.on_confirmed(now_ms, &mut frame.actions);
            frame.dirty = true;
        }

        if let Some(landing) = self.landing.as_mut() {
            let update = landing.tick(now_ms, elapsed);
            frame.dirty |= !update.is_empty();
            frame.actions.extend(update.reveal.stages.into_iter().map(Action::Reveal));
        }
        if let Some(header) = self.header.as_mut() {
            frame.dirty |= header.selector_mut().tick(elapsed);
        }
        if self.router.tick(now_ms) {
            frame.dirty = true;
        }
        frame.dirty |= !frame.actions.is_empty();
        frame
    }

    // --- Internals ---

    fn selector_mut(&mut self, surface: Surface) -> Option<&mut ModeSelector> {
        match surface {
            Surface::Landing => self.landing.as_mut().map(Landing::selector_mut),
            Surface::Header => self.header.as_mut().map(HeaderSync::selector_mut),
        }
    }

    /// Push a resolved mode through the controller and propagate it.
    fn apply_mode(&mut self, mode: Mode, now_ms: f64) -> Vec<Action> {
        if !self.controller.select_mode(mode) {
            return Vec::new();
        }
        let mut actions = vec![Action::ModeSelected(mode)];
        if let Some(landing) = self.landing.as_mut() {
            landing.on_mode_changed(mode, now_ms);
        }
        if let Some(header) = self.header.as_mut() {
            header.sync(mode);
        }
        if self.router.update(&self.controller.state(), now_ms) {
            actions.push(Action::RouteChanged(self.router.mounted()));
        }
        actions
    }

    fn on_confirmed(&mut self, now_ms: f64, actions: &mut Vec<Action>) {
        let mode = self.mode();
        actions.push(Action::Confirmed(mode));
        if self.landing.take().is_some() {
            actions.push(Action::LandingUnmounted);
        }
        self.header = Some(HeaderSync::mount(&self.viewport, mode));
        actions.push(Action::HeaderMounted);
        if self.router.update(&self.controller.state(), now_ms) {
            actions.push(Action::RouteChanged(self.router.mounted()));
        }
    }
}

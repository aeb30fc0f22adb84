//! Staged landing reveal and ambient orbs.
//!
//! DESIGN
//! ======
//! The reveal is a one-shot [`Schedule`] built at mount. Every stage is a
//! plain data entry, so the whole timeline is cancelled by one switch when the
//! visitor proceeds: `exit()` empties the schedule and stops the rotating word,
//! and nothing queued before it can fire afterwards.
//!
//! ```text
//!   T0            1900 +150·i        3300               3500
//!   orbs ─────────── heading words ── heading complete ── description
//!                                     toggle + arrow      typewriter starts
//!                                     rotating word starts
//! ```

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::consts::{
    DESCRIPTION_REVEAL_MS, HEADING_LEAD_WORDS, HEADING_START_MS, HEADING_TAIL_WORD, HEADING_WORD_SETTLE_MS,
    HEADING_WORD_STAGGER_MS, ORB_COUNT_DESKTOP, ORB_COUNT_MOBILE, ORB_MAX_DRIFT_PX, ORB_MAX_PERIOD_S,
    ORB_MAX_SIZE_PX, ORB_MIN_PERIOD_S, ORB_MIN_SIZE_PX, ROTATING_WORDS,
};
use crate::rotating::RotatingWords;
use crate::schedule::Schedule;

/// Words in the heading: the lead words, the rotating slot, and the tail word.
pub const HEADING_WORD_COUNT: usize = HEADING_LEAD_WORDS.len() + 2;

/// Index of the rotating slot within the heading.
pub const ROTATING_SLOT: usize = HEADING_LEAD_WORDS.len();

/// Offset from mount at which the last heading word has settled.
#[allow(clippy::cast_precision_loss)]
pub const HEADING_COMPLETE_MS: f64 =
    HEADING_START_MS + (HEADING_WORD_COUNT - 1) as f64 * HEADING_WORD_STAGGER_MS + HEADING_WORD_SETTLE_MS;

/// Lifecycle of the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not mounted yet.
    Idle,
    /// Stages are still pending.
    Revealing,
    /// Every stage has fired; only the rotating word keeps moving.
    Settled,
    /// The visitor proceeded. Pending stages were cancelled and elements fade out.
    Exiting,
}

/// One timed reveal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStage {
    /// Heading word at this index starts appearing.
    HeadingWord(usize),
    /// The last heading word has settled; the rotating word starts cycling.
    HeadingComplete,
    /// Toggle and proceed arrow scale in.
    Toggle,
    /// Description block appears and starts typing.
    Description,
}

/// Blurred background orb. Positions are percentages of the landing screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Orb {
    pub id: usize,
    pub x_pct: f64,
    pub y_pct: f64,
    pub size_px: f64,
    /// Length of one drift loop.
    pub period_s: f64,
    /// Start offset into the loop so orbs do not pulse in unison.
    pub phase_s: f64,
    /// Furthest excursion from the anchor during one loop.
    pub drift_x: f64,
    pub drift_y: f64,
}

/// Random orb field of `count` orbs.
pub fn generate_orbs<R: Rng>(rng: &mut R, count: usize) -> Vec<Orb> {
    (0..count)
        .map(|id| {
            let period_s = rng.random_range(ORB_MIN_PERIOD_S..ORB_MAX_PERIOD_S);
            Orb {
                id,
                x_pct: rng.random_range(0.0..100.0),
                y_pct: rng.random_range(0.0..100.0),
                size_px: rng.random_range(ORB_MIN_SIZE_PX..ORB_MAX_SIZE_PX),
                period_s,
                phase_s: rng.random_range(0.0..period_s),
                drift_x: rng.random_range(-ORB_MAX_DRIFT_PX..ORB_MAX_DRIFT_PX),
                drift_y: rng.random_range(-ORB_MAX_DRIFT_PX..ORB_MAX_DRIFT_PX),
            }
        })
        .collect()
}

#[must_use]
pub fn orb_count(desktop: bool) -> usize {
    if desktop { ORB_COUNT_DESKTOP } else { ORB_COUNT_MOBILE }
}

/// What changed during one [`RevealSequencer::advance`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealUpdate {
    pub stages: Vec<RevealStage>,
    pub word_rotated: bool,
}

impl RevealUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty() && !self.word_rotated
    }
}

#[derive(Clone, Debug)]
pub struct RevealSequencer {
    phase: RevealPhase,
    schedule: Schedule<RevealStage>,
    seed: u64,
    generation: u64,
    desktop: bool,
    orbs: Vec<Orb>,
    words_visible: usize,
    heading_complete: bool,
    toggle_visible: bool,
    description_visible: bool,
    rotating: RotatingWords,
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self {
            phase: RevealPhase::Idle,
            schedule: Schedule::new(0.0),
            seed: 0,
            generation: 0,
            desktop: true,
            orbs: Vec::new(),
            words_visible: 0,
            heading_complete: false,
            toggle_visible: false,
            description_visible: false,
            rotating: RotatingWords::new(&ROTATING_WORDS),
        }
    }
}

impl RevealSequencer {
    /// Mount at `now_ms`: orbs appear immediately and every stage is queued.
    #[must_use]
    pub fn mount(now_ms: f64, seed: u64, desktop: bool) -> Self {
        let mut schedule = Schedule::new(now_ms);
        for index in 0..HEADING_WORD_COUNT {
            #[allow(clippy::cast_precision_loss)]
            let delay = HEADING_START_MS + index as f64 * HEADING_WORD_STAGGER_MS;
            schedule.at(delay, RevealStage::HeadingWord(index));
        }
        schedule.at(HEADING_COMPLETE_MS, RevealStage::HeadingComplete);
        schedule.at(HEADING_COMPLETE_MS, RevealStage::Toggle);
        schedule.at(DESCRIPTION_REVEAL_MS, RevealStage::Description);

        let orbs = generate_orbs(&mut StdRng::seed_from_u64(seed), orb_count(desktop));
        Self { phase: RevealPhase::Revealing, schedule, seed, desktop, orbs, ..Self::default() }
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Fire every stage due at `now_ms` and rotate the heading word.
    pub fn advance(&mut self, now_ms: f64) -> RevealUpdate {
        if matches!(self.phase, RevealPhase::Idle | RevealPhase::Exiting) {
            return RevealUpdate::default();
        }
        let stages = self.schedule.due(now_ms);
        for stage in &stages {
            match *stage {
                RevealStage::HeadingWord(index) => self.words_visible = self.words_visible.max(index + 1),
                RevealStage::HeadingComplete => {
                    self.heading_complete = true;
                    // Anchor the cadence to the scheduled time, not to when the frame arrived.
                    self.rotating.start(self.schedule.origin_ms() + HEADING_COMPLETE_MS);
                }
                RevealStage::Toggle => self.toggle_visible = true,
                RevealStage::Description => self.description_visible = true,
            }
        }
        if self.phase == RevealPhase::Revealing && self.schedule.pending() == 0 {
            self.phase = RevealPhase::Settled;
            log::debug!("reveal settled");
        }
        let word_rotated = self.rotating.advance(now_ms);
        RevealUpdate { stages, word_rotated }
    }

    /// Cancel every pending stage and freeze the heading. Idempotent.
    pub fn exit(&mut self) {
        if self.phase == RevealPhase::Exiting {
            return;
        }
        log::debug!("reveal exiting from {:?}; {} stage(s) cancelled", self.phase, self.schedule.pending());
        self.phase = RevealPhase::Exiting;
        self.schedule.cancel_all();
        self.rotating.stop();
    }

    /// Track the desktop breakpoint. Crossing it regenerates the orb field.
    pub fn set_desktop(&mut self, desktop: bool) -> bool {
        if desktop == self.desktop {
            return false;
        }
        self.desktop = desktop;
        self.generation += 1;
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.generation));
        self.orbs = generate_orbs(&mut rng, orb_count(desktop));
        true
    }

    /// Absolute time of the next stage or word change.
    #[must_use]
    pub fn next_wake_ms(&self, now_ms: f64) -> Option<f64> {
        let stage = self.schedule.next_due_ms();
        let word = self.rotating.next_change_ms(now_ms);
        match (stage, word) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    #[must_use]
    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    #[must_use]
    pub fn is_desktop(&self) -> bool {
        self.desktop
    }

    /// Number of heading words that have started appearing.
    #[must_use]
    pub fn words_visible(&self) -> usize {
        self.words_visible
    }

    #[must_use]
    pub fn heading_complete(&self) -> bool {
        self.heading_complete
    }

    /// Toggle and proceed arrow are shown.
    #[must_use]
    pub fn toggle_visible(&self) -> bool {
        self.toggle_visible
    }

    #[must_use]
    pub fn description_visible(&self) -> bool {
        self.description_visible
    }

    #[must_use]
    pub fn rotating_word(&self) -> &'static str {
        self.rotating.current()
    }

    /// Heading words in display order with the rotating slot filled in.
    #[must_use]
    pub fn heading_words(&self) -> [&'static str; HEADING_WORD_COUNT] {
        let mut words = [""; HEADING_WORD_COUNT];
        words[..ROTATING_SLOT].copy_from_slice(&HEADING_LEAD_WORDS);
        words[ROTATING_SLOT] = self.rotating.current();
        words[ROTATING_SLOT + 1] = HEADING_TAIL_WORD;
        words
    }
}

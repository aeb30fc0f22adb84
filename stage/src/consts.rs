//! Shared timings and sizes for the stage crate.
//!
//! All times are milliseconds on the host's monotonic clock.

// ── Confirmation ────────────────────────────────────────────────

/// Delay between `proceed()` and the landing screen unmounting.
pub const PROCEED_DELAY_MS: f64 = 800.0;

/// Exit animation length of a content view being replaced.
pub const CONTENT_EXIT_MS: f64 = 400.0;

// ── Viewport ────────────────────────────────────────────────────

/// Viewport width at and above which desktop presets apply.
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

/// Vertical scroll past which the header toggle compacts.
pub const COMPACT_SCROLL_THRESHOLD_PX: f64 = 50.0;

// ── Toggle geometry ─────────────────────────────────────────────

/// Inner padding between the toggle track and the knob.
pub const TOGGLE_PADDING_PX: f64 = 8.0;

/// Label weight of the side the knob is not on.
pub const LABEL_DIM_WEIGHT: f64 = 0.3;

// ── Knob spring ─────────────────────────────────────────────────

pub const SPRING_STIFFNESS: f64 = 500.0;
pub const SPRING_DAMPING: f64 = 30.0;

/// Fixed integration step for the spring.
pub const SPRING_STEP_MS: f64 = 4.0;

/// Longest stretch of time integrated in one call; longer gaps settle the spring.
pub const SPRING_MAX_ELAPSED_MS: f64 = 1000.0;

/// Distance (px) under which a spring may come to rest.
pub const SPRING_REST_DELTA: f64 = 0.01;

/// Speed (px/s) under which a spring may come to rest.
pub const SPRING_REST_SPEED: f64 = 0.5;

// ── Landing reveal ──────────────────────────────────────────────

/// First heading word appears at this offset from mount.
pub const HEADING_START_MS: f64 = 1900.0;

/// Stagger between consecutive heading words.
pub const HEADING_WORD_STAGGER_MS: f64 = 150.0;

/// Time a heading word takes to settle after it starts appearing.
pub const HEADING_WORD_SETTLE_MS: f64 = 500.0;

/// Description block becomes visible and starts typing.
pub const DESCRIPTION_REVEAL_MS: f64 = 3500.0;

/// Interval between typed characters.
pub const TYPEWRITER_CHAR_MS: f64 = 30.0;

/// Interval between rotating heading words.
pub const ROTATING_WORD_INTERVAL_MS: f64 = 2500.0;

/// Click ripple expansion time on the landing toggle.
pub const RIPPLE_DURATION_MS: f64 = 800.0;

// ── Ambient orbs ────────────────────────────────────────────────

pub const ORB_COUNT_DESKTOP: usize = 8;
pub const ORB_COUNT_MOBILE: usize = 5;

pub const ORB_MIN_SIZE_PX: f64 = 100.0;
pub const ORB_MAX_SIZE_PX: f64 = 300.0;
pub const ORB_MIN_PERIOD_S: f64 = 15.0;
pub const ORB_MAX_PERIOD_S: f64 = 35.0;

/// Maximum drift (px) of an orb away from its anchor in either axis.
pub const ORB_MAX_DRIFT_PX: f64 = 50.0;

// ── Copy ────────────────────────────────────────────────────────

/// Heading words before the rotating word.
pub const HEADING_LEAD_WORDS: [&str; 5] = ["Which", "part", "of", "my", "work"];

/// Heading word after the rotating word.
pub const HEADING_TAIL_WORD: &str = "you?";

/// Words cycled by the rotating heading slot.
pub const ROTATING_WORDS: [&str; 5] = ["interests", "excites", "fascinates", "captivates", "intrigues"];

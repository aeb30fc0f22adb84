//! Render-ready snapshots derived from the engine.
//!
//! DESIGN
//! ======
//! Components wrap these in `Memo`s. Each snapshot is `PartialEq`, so a frame
//! that only moves the header knob does not re-render the heading, and a frame
//! that changes nothing re-renders nothing.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use stage::engine::Engine;
use stage::landing::Ripple;
use stage::layout::Surface;
use stage::mode::Mode;
use stage::reveal::{HEADING_WORD_COUNT, Orb};
use stage::selector::ModeSelector;

/// One toggle instance as it should be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct ToggleView {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub knob_width: f64,
    pub knob_height: f64,
    pub knob_offset: f64,
    pub storytelling_weight: f64,
    pub uiux_weight: f64,
    pub dragging: bool,
}

impl ToggleView {
    #[must_use]
    pub fn from_selector(selector: &ModeSelector) -> Self {
        let layout = selector.layout();
        let weights = selector.label_weights();
        Self {
            width: layout.width,
            height: layout.height,
            padding: layout.padding,
            knob_width: layout.knob_width,
            knob_height: layout.knob_height,
            knob_offset: selector.knob_offset(),
            storytelling_weight: weights.storytelling,
            uiux_weight: weights.uiux,
            dragging: selector.is_dragging(),
        }
    }

    #[must_use]
    pub fn track_style(&self) -> String {
        format!("width: {}px; height: {}px; padding: {}px;", self.width, self.height, self.padding)
    }

    #[must_use]
    pub fn knob_style(&self) -> String {
        format!(
            "width: {}px; height: {}px; transform: translateX({:.2}px);",
            self.knob_width, self.knob_height, self.knob_offset
        )
    }

    #[must_use]
    pub fn label_style(&self, mode: Mode) -> String {
        let weight = match mode {
            Mode::Uiux => self.uiux_weight,
            Mode::Storytelling | Mode::Unset => self.storytelling_weight,
        };
        format!("opacity: {weight:.3};")
    }
}

/// Toggle snapshot for a surface, if that surface is mounted.
#[must_use]
pub fn toggle_view(engine: &Engine, surface: Surface) -> Option<ToggleView> {
    engine.selector(surface).map(ToggleView::from_selector)
}

/// Landing heading as it should be drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadingView {
    pub words: [&'static str; HEADING_WORD_COUNT],
    pub visible: usize,
    pub rotating_index: usize,
}

#[must_use]
pub fn heading_view(engine: &Engine) -> Option<HeadingView> {
    let reveal = engine.landing()?.reveal();
    Some(HeadingView {
        words: reveal.heading_words(),
        visible: reveal.words_visible(),
        rotating_index: stage::reveal::ROTATING_SLOT,
    })
}

/// Visibility of the landing blocks that fade in by stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LandingChrome {
    pub toggle_visible: bool,
    pub description_visible: bool,
    pub exiting: bool,
    pub can_proceed: bool,
}

#[must_use]
pub fn landing_chrome(engine: &Engine) -> Option<LandingChrome> {
    let landing = engine.landing()?;
    let reveal = landing.reveal();
    Some(LandingChrome {
        toggle_visible: reveal.toggle_visible(),
        description_visible: reveal.description_visible(),
        exiting: landing.is_exiting(),
        can_proceed: engine.can_proceed(),
    })
}

/// Typed description lines.
#[must_use]
pub fn description_lines(engine: &Engine) -> Vec<&'static str> {
    engine.landing().map(|landing| landing.typewriter().lines().collect()).unwrap_or_default()
}

/// CSS class carrying the mode tint for the page background and orbs.
#[must_use]
pub fn theme_class(mode: Mode) -> &'static str {
    match mode {
        Mode::Storytelling => "theme theme--storytelling",
        Mode::Uiux => "theme theme--uiux",
        Mode::Unset => "theme theme--neutral",
    }
}

/// Inline style for one ambient orb. Drift is driven by a CSS keyframe reading
/// the custom properties.
#[must_use]
pub fn orb_style(orb: &Orb) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; width: {:.0}px; height: {:.0}px; \
         --orb-dx: {:.1}px; --orb-dy: {:.1}px; \
         animation-duration: {:.2}s; animation-delay: -{:.2}s;",
        orb.x_pct, orb.y_pct, orb.size_px, orb.size_px, orb.drift_x, orb.drift_y, orb.period_s, orb.phase_s
    )
}

/// Inline style for the click ripple at `now_ms`.
#[must_use]
pub fn ripple_style(ripple: &Ripple, now_ms: f64) -> String {
    let progress = ripple.progress(now_ms);
    format!(
        "left: {:.1}px; top: {:.1}px; transform: translate(-50%, -50%) scale({:.3}); opacity: {:.3};",
        ripple.x,
        ripple.y,
        progress * 4.0,
        1.0 - progress
    )
}

/// Sticker image for a chosen track.
#[must_use]
pub fn sticker_src(mode: Mode) -> Option<&'static str> {
    match mode {
        Mode::Storytelling => Some("/stickers/storytelling.png"),
        Mode::Uiux => Some("/stickers/uiux.png"),
        Mode::Unset => None,
    }
}

/// Glyph shown for a catalogue icon key.
#[must_use]
pub fn icon_glyph(key: &str) -> &'static str {
    match key {
        "book" => "📖",
        "file" => "📄",
        "sparkles" => "✨",
        "palette" => "🎨",
        "smartphone" => "📱",
        "layout" => "🗂",
        _ => "•",
    }
}

#![allow(clippy::float_cmp)]

use super::*;
use stage::layout::Viewport;

fn engine() -> Engine {
    Engine::new(Viewport::new(1280.0, 0.0), 0.0, 5)
}

fn run(engine: &mut Engine, to: f64) {
    let mut now = 0.0;
    while now < to {
        now += 16.0;
        engine.tick(now);
    }
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn landing_toggle_view_starts_on_storytelling() {
    let view = toggle_view(&engine(), Surface::Landing).unwrap();
    assert_eq!(view.width, 480.0);
    assert_eq!(view.knob_offset, 0.0);
    assert_eq!(view.storytelling_weight, 1.0);
    assert!(!view.dragging);
}

#[test]
fn header_toggle_absent_before_confirmation() {
    assert!(toggle_view(&engine(), Surface::Header).is_none());
}

#[test]
fn knob_style_translates_by_offset() {
    let mut e = engine();
    e.pointer_down(Surface::Landing, 0.0);
    e.pointer_move(Surface::Landing, 40.0);
    let view = toggle_view(&e, Surface::Landing).unwrap();
    assert!(view.knob_style().contains("translateX(40.00px)"));
    assert!(view.dragging);
}

#[test]
fn label_style_uses_matching_weight() {
    let view = toggle_view(&engine(), Surface::Landing).unwrap();
    assert_eq!(view.label_style(Mode::Storytelling), "opacity: 1.000;");
    assert_eq!(view.label_style(Mode::Uiux), "opacity: 0.300;");
}

#[test]
fn unchanged_engine_yields_equal_snapshots() {
    let e = engine();
    assert_eq!(toggle_view(&e, Surface::Landing), toggle_view(&e, Surface::Landing));
    assert_eq!(heading_view(&e), heading_view(&e));
}

// =============================================================
// Landing
// =============================================================

#[test]
fn heading_reveals_words_over_time() {
    let mut e = engine();
    assert_eq!(heading_view(&e).unwrap().visible, 0);
    run(&mut e, 2_100.0);
    let heading = heading_view(&e).unwrap();
    assert_eq!(heading.visible, 2);
    assert_eq!(heading.words[0], "Which");
}

#[test]
fn chrome_follows_reveal_and_exit() {
    let mut e = engine();
    assert_eq!(landing_chrome(&e), Some(LandingChrome::default()));
    run(&mut e, 3_600.0);
    let chrome = landing_chrome(&e).unwrap();
    assert!(chrome.toggle_visible && chrome.description_visible && chrome.can_proceed);
    e.proceed(3_600.0);
    let chrome = landing_chrome(&e).unwrap();
    assert!(chrome.exiting);
    assert!(!chrome.can_proceed);
}

#[test]
fn description_lines_split_on_newline() {
    let mut e = engine();
    run(&mut e, 20_000.0);
    assert_eq!(
        description_lines(&e),
        vec!["Explore my storytelling side, my poems,", "my stories, my animations and my short films"]
    );
}

#[test]
fn landing_views_vanish_after_confirmation() {
    let mut e = engine();
    e.proceed(0.0);
    run(&mut e, 1_000.0);
    assert!(heading_view(&e).is_none());
    assert!(landing_chrome(&e).is_none());
    assert!(description_lines(&e).is_empty());
}

// =============================================================
// Styling helpers
// =============================================================

#[test]
fn theme_class_per_mode() {
    assert!(theme_class(Mode::Storytelling).ends_with("storytelling"));
    assert!(theme_class(Mode::Uiux).ends_with("uiux"));
    assert!(theme_class(Mode::Unset).ends_with("neutral"));
}

#[test]
fn orb_style_carries_drift_and_period() {
    let orb = Orb {
        id: 0,
        x_pct: 10.0,
        y_pct: 20.0,
        size_px: 150.0,
        period_s: 20.0,
        phase_s: 5.0,
        drift_x: -12.5,
        drift_y: 30.0,
    };
    let style = orb_style(&orb);
    assert!(style.contains("left: 10.00%"));
    assert!(style.contains("--orb-dx: -12.5px"));
    assert!(style.contains("animation-duration: 20.00s"));
    assert!(style.contains("animation-delay: -5.00s"));
}

#[test]
fn ripple_fades_as_it_grows() {
    let ripple = Ripple { x: 10.0, y: 5.0, started_ms: 0.0 };
    assert!(ripple_style(&ripple, 0.0).contains("opacity: 1.000"));
    assert!(ripple_style(&ripple, 800.0).contains("opacity: 0.000"));
}

#[test]
fn stickers_only_for_chosen_tracks() {
    assert!(sticker_src(Mode::Storytelling).is_some());
    assert!(sticker_src(Mode::Uiux).is_some());
    assert_eq!(sticker_src(Mode::Unset), None);
}

#[test]
fn unknown_icon_falls_back() {
    assert_eq!(icon_glyph("book"), "📖");
    assert_eq!(icon_glyph("nope"), "•");
}

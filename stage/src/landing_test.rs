#![allow(clippy::float_cmp)]

use super::*;
use crate::mode::UNSET_HINT;

fn desktop() -> Viewport {
    Viewport::new(1280.0, 0.0)
}

fn run(landing: &mut Landing, from: f64, to: f64) {
    let mut now = from;
    while now < to {
        now += 16.0;
        landing.tick(now, 16.0);
    }
}

#[test]
fn description_types_only_after_its_stage() {
    let mut landing = Landing::mount(0.0, 1, &desktop(), Mode::Storytelling);
    run(&mut landing, 0.0, 3_480.0);
    assert!(!landing.typewriter().is_started());
    assert_eq!(landing.typewriter().displayed(), "");
    run(&mut landing, 3_480.0, 3_600.0);
    assert!(landing.reveal().description_visible());
    assert_eq!(landing.typewriter().displayed(), "Exp");
}

#[test]
fn mode_change_restarts_typewriter() {
    let mut landing = Landing::mount(0.0, 1, &desktop(), Mode::Storytelling);
    run(&mut landing, 0.0, 4_000.0);
    assert!(!landing.typewriter().displayed().is_empty());

    landing.on_mode_changed(Mode::Uiux, 4_000.0);
    assert_eq!(landing.typewriter().displayed(), "");
    landing.tick(4_030.0, 30.0);
    assert_eq!(landing.typewriter().displayed(), "E");
    assert_eq!(landing.typewriter().text(), Mode::Uiux.description());
}

#[test]
fn unset_session_shows_hint() {
    let mut landing = Landing::mount(0.0, 1, &desktop(), Mode::Unset);
    run(&mut landing, 0.0, 20_000.0);
    assert_eq!(landing.typewriter().displayed(), UNSET_HINT);
}

#[test]
fn proceed_arrow_waits_for_toggle_stage_and_a_track() {
    let mut landing = Landing::mount(0.0, 1, &desktop(), Mode::Unset);
    assert!(!landing.can_proceed(Mode::Storytelling));
    run(&mut landing, 0.0, 3_400.0);
    assert!(!landing.can_proceed(Mode::Unset));
    assert!(landing.can_proceed(Mode::Storytelling));
    landing.begin_exit();
    assert!(!landing.can_proceed(Mode::Storytelling));
}

#[test]
fn sticker_matches_selected_mode() {
    assert_eq!(Landing::sticker(Mode::Unset), None);
    assert_eq!(Landing::sticker(Mode::Storytelling), Some(Mode::Storytelling));
    assert_eq!(Landing::sticker(Mode::Uiux), Some(Mode::Uiux));
}

#[test]
fn ripple_expands_then_clears() {
    let mut landing = Landing::mount(0.0, 1, &desktop(), Mode::Storytelling);
    landing.start_ripple(12.0, 30.0, 100.0);
    let ripple = landing.ripple().unwrap();
    assert_eq!(ripple.progress(100.0), 0.0);
    assert!((ripple.progress(500.0) - 0.5).abs() < 1e-12);
    assert!(landing.tick(500.0, 16.0).ripple_moving);
    landing.tick(900.0, 16.0);
    assert_eq!(landing.ripple(), None);
}

#[test]
fn resize_relayouts_toggle_and_orbs() {
    let mut landing = Landing::mount(0.0, 1, &desktop(), Mode::Uiux);
    assert_eq!(landing.reveal().orbs().len(), 8);
    assert!(landing.on_resize(&Viewport::new(600.0, 0.0), Mode::Uiux));
    assert_eq!(landing.reveal().orbs().len(), 5);
    assert_eq!(landing.selector().layout().width, 320.0);
    assert!(!landing.on_resize(&Viewport::new(700.0, 0.0), Mode::Uiux));
}

#[test]
fn exit_freezes_reveal() {
    let mut landing = Landing::mount(0.0, 1, &desktop(), Mode::Storytelling);
    run(&mut landing, 0.0, 2_000.0);
    landing.begin_exit();
    assert!(landing.is_exiting());
    run(&mut landing, 2_000.0, 6_000.0);
    assert!(!landing.reveal().toggle_visible());
}

#[test]
fn exit_freezes_typewriter() {
    let mut landing = Landing::mount(0.0, 1, &desktop(), Mode::Storytelling);
    run(&mut landing, 0.0, 3_600.0);
    let typed = landing.typewriter().displayed().to_owned();
    assert!(!typed.is_empty());

    landing.begin_exit();
    run(&mut landing, 3_600.0, 4_400.0);
    assert_eq!(landing.typewriter().displayed(), typed);
    assert!(landing.next_wake_ms(4_400.0).is_none());

    landing.on_mode_changed(Mode::Uiux, 4_400.0);
    run(&mut landing, 4_400.0, 4_600.0);
    assert_eq!(landing.typewriter().displayed(), typed);
    assert_eq!(landing.typewriter().text(), Mode::Storytelling.description());
}

#![allow(clippy::cast_precision_loss)]

use super::*;

fn all_stages_until(seq: &mut RevealSequencer, end_ms: f64) -> Vec<(f64, RevealStage)> {
    let mut fired = Vec::new();
    let mut now = 0.0;
    while now <= end_ms {
        for stage in seq.advance(now).stages {
            fired.push((now, stage));
        }
        now += 10.0;
    }
    fired
}

// =============================================================
// Timeline
// =============================================================

#[test]
fn heading_complete_offset_matches_word_timing() {
    assert_eq!(HEADING_WORD_COUNT, 7);
    assert!((HEADING_COMPLETE_MS - 3_300.0).abs() < 1e-9);
}

#[test]
fn mount_shows_orbs_immediately_and_nothing_else() {
    let mut seq = RevealSequencer::mount(0.0, 7, true);
    assert_eq!(seq.phase(), RevealPhase::Revealing);
    assert_eq!(seq.orbs().len(), 8);
    assert!(seq.advance(0.0).is_empty());
    assert_eq!(seq.words_visible(), 0);
    assert!(!seq.toggle_visible());
    assert!(!seq.description_visible());
}

#[test]
fn stages_fire_in_order_at_their_offsets() {
    let mut seq = RevealSequencer::mount(0.0, 1, true);
    let fired = all_stages_until(&mut seq, 4_000.0);

    let expected: Vec<(f64, RevealStage)> = (0..HEADING_WORD_COUNT)
        .map(|i| (1_900.0 + 150.0 * i as f64, RevealStage::HeadingWord(i)))
        .chain([
            (3_300.0, RevealStage::HeadingComplete),
            (3_300.0, RevealStage::Toggle),
            (3_500.0, RevealStage::Description),
        ])
        .collect();
    assert_eq!(fired, expected);
    assert_eq!(seq.phase(), RevealPhase::Settled);
}

#[test]
fn toggle_never_precedes_heading() {
    let mut seq = RevealSequencer::mount(0.0, 1, false);
    let mut now = 0.0;
    while now < 4_000.0 {
        seq.advance(now);
        if seq.toggle_visible() {
            assert_eq!(seq.words_visible(), HEADING_WORD_COUNT);
            assert!(seq.heading_complete());
        }
        now += 16.0;
    }
}

#[test]
fn late_frame_fires_every_overdue_stage_once() {
    let mut seq = RevealSequencer::mount(1_000.0, 1, true);
    let update = seq.advance(10_000.0);
    assert_eq!(update.stages.len(), HEADING_WORD_COUNT + 3);
    assert!(seq.advance(10_001.0).stages.is_empty());
}

// =============================================================
// Rotating word
// =============================================================

#[test]
fn rotating_word_starts_after_heading_completes() {
    let mut seq = RevealSequencer::mount(0.0, 1, true);
    seq.advance(3_000.0);
    assert_eq!(seq.rotating_word(), "interests");
    seq.advance(3_300.0);
    assert!(!seq.advance(5_799.0).word_rotated);
    assert!(seq.advance(5_800.0).word_rotated);
    assert_eq!(seq.rotating_word(), "excites");
    assert_eq!(seq.heading_words()[ROTATING_SLOT], "excites");
}

#[test]
fn heading_words_in_display_order() {
    let seq = RevealSequencer::mount(0.0, 1, true);
    assert_eq!(seq.heading_words(), ["Which", "part", "of", "my", "work", "interests", "you?"]);
}

// =============================================================
// Exit
// =============================================================

#[test]
fn exit_cancels_pending_stages() {
    let mut seq = RevealSequencer::mount(0.0, 1, true);
    seq.advance(2_000.0);
    let words = seq.words_visible();
    seq.exit();
    assert_eq!(seq.phase(), RevealPhase::Exiting);
    assert!(seq.advance(60_000.0).is_empty());
    assert_eq!(seq.words_visible(), words);
    assert!(!seq.toggle_visible());
    assert!(!seq.description_visible());
    assert_eq!(seq.next_wake_ms(60_000.0), None);
}

#[test]
fn exit_stops_rotating_word() {
    let mut seq = RevealSequencer::mount(0.0, 1, true);
    seq.advance(6_000.0);
    let word = seq.rotating_word();
    seq.exit();
    assert!(!seq.advance(20_000.0).word_rotated);
    assert_eq!(seq.rotating_word(), word);
}

#[test]
fn exit_after_settled_is_allowed_and_idempotent() {
    let mut seq = RevealSequencer::mount(0.0, 1, true);
    seq.advance(5_000.0);
    assert_eq!(seq.phase(), RevealPhase::Settled);
    seq.exit();
    seq.exit();
    assert_eq!(seq.phase(), RevealPhase::Exiting);
}

// =============================================================
// Orbs
// =============================================================

#[test]
fn orbs_are_deterministic_per_seed() {
    let a = RevealSequencer::mount(0.0, 42, true);
    let b = RevealSequencer::mount(0.0, 42, true);
    assert_eq!(a.orbs(), b.orbs());
}

#[test]
fn orbs_stay_within_configured_ranges() {
    let mut rng = StdRng::seed_from_u64(9);
    for orb in generate_orbs(&mut rng, 64) {
        assert!((0.0..100.0).contains(&orb.x_pct));
        assert!((0.0..100.0).contains(&orb.y_pct));
        assert!((100.0..300.0).contains(&orb.size_px));
        assert!((15.0..35.0).contains(&orb.period_s));
        assert!(orb.phase_s < orb.period_s);
        assert!(orb.drift_x.abs() <= 50.0 && orb.drift_y.abs() <= 50.0);
    }
}

#[test]
fn breakpoint_flip_regenerates_orbs() {
    let mut seq = RevealSequencer::mount(0.0, 3, true);
    assert!(!seq.set_desktop(true));
    assert!(seq.set_desktop(false));
    assert_eq!(seq.orbs().len(), 5);
    assert!(seq.set_desktop(true));
    assert_eq!(seq.orbs().len(), 8);
}

#[test]
fn next_wake_tracks_schedule_then_rotation() {
    let mut seq = RevealSequencer::mount(0.0, 1, true);
    assert_eq!(seq.next_wake_ms(0.0), Some(1_900.0));
    seq.advance(4_000.0);
    assert_eq!(seq.next_wake_ms(4_000.0), Some(5_800.0));
}

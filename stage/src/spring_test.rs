#![allow(clippy::float_cmp)]

use super::*;

fn run_until_settled(spring: &mut Spring, frame_ms: f64) -> usize {
    let mut frames = 0;
    while spring.step(frame_ms) {
        frames += 1;
        assert!(frames < 10_000, "spring never settled");
    }
    frames
}

#[test]
fn at_rest_is_settled() {
    let mut spring = Spring::at_rest(12.0);
    assert!(spring.is_settled());
    assert!(!spring.step(16.0));
    assert_eq!(spring.position(), 12.0);
}

#[test]
fn converges_exactly_on_target() {
    let mut spring = Spring::at_rest(0.0);
    spring.retarget(232.0);
    run_until_settled(&mut spring, 16.0);
    assert_eq!(spring.position(), 232.0);
    assert!(spring.is_settled());
}

#[test]
fn settles_within_a_second_of_frames() {
    let mut spring = Spring::at_rest(232.0);
    spring.retarget(0.0);
    let frames = run_until_settled(&mut spring, 16.0);
    assert!(frames <= 70, "took {frames} frames");
}

#[test]
fn motion_is_not_instantaneous() {
    let mut spring = Spring::at_rest(0.0);
    spring.retarget(100.0);
    assert!(spring.step(16.0));
    assert!(spring.position() > 0.0);
    assert!(spring.position() < 100.0);
}

#[test]
fn frame_rate_does_not_change_the_path() {
    let mut coarse = Spring::at_rest(0.0);
    let mut fine = Spring::at_rest(0.0);
    coarse.retarget(100.0);
    fine.retarget(100.0);
    coarse.step(32.0);
    fine.step(16.0);
    fine.step(16.0);
    assert!((coarse.position() - fine.position()).abs() < 1e-9);
}

#[test]
fn long_stall_lands_on_target() {
    let mut spring = Spring::at_rest(0.0);
    spring.retarget(50.0);
    assert!(!spring.step(5_000.0));
    assert_eq!(spring.position(), 50.0);
}

#[test]
fn hold_stops_motion() {
    let mut spring = Spring::at_rest(0.0);
    spring.retarget(100.0);
    spring.step(16.0);
    spring.hold(40.0);
    assert!(spring.is_settled());
    assert_eq!(spring.position(), 40.0);
}

#[test]
fn clamp_into_pulls_position_and_target_inside() {
    let mut spring = Spring::at_rest(232.0);
    spring.clamp_into(0.0, 152.0);
    assert_eq!(spring.position(), 152.0);
    assert_eq!(spring.target(), 152.0);
}

#[test]
fn non_positive_elapsed_keeps_state() {
    let mut spring = Spring::at_rest(0.0);
    spring.retarget(10.0);
    assert!(spring.step(0.0));
    assert!(spring.step(-5.0));
    assert_eq!(spring.position(), 0.0);
}

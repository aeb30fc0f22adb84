//! Damped spring used to animate the toggle knob between extremes.
//!
//! Integrated with a fixed step (semi-implicit Euler, unit mass) so results do
//! not depend on the host's frame rate. Once position and velocity fall under
//! the rest thresholds the spring lands exactly on its target.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use crate::consts::{
    SPRING_DAMPING, SPRING_MAX_ELAPSED_MS, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_STEP_MS, SPRING_STIFFNESS,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    position: f64,
    /// Pixels per second.
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    /// Time not yet integrated because it was shorter than one step.
    carry_ms: f64,
}

impl Spring {
    /// A spring resting at `position`.
    #[must_use]
    pub fn at_rest(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            carry_ms: 0.0,
        }
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Aim at a new target, keeping the current velocity.
    pub fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    /// Place the spring at `position` at rest (used while the pointer owns the knob).
    pub fn hold(&mut self, position: f64) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.carry_ms = 0.0;
    }

    /// Keep the spring inside `[min, max]`, e.g. after the track shrank.
    pub fn clamp_into(&mut self, min: f64, max: f64) {
        let clamped = self.position.clamp(min, max.max(min));
        if clamped != self.position {
            self.position = clamped;
            self.velocity = 0.0;
        }
        self.target = self.target.clamp(min, max.max(min));
    }

    /// Advance by `elapsed_ms`. Returns `true` while the spring is still moving.
    pub fn step(&mut self, elapsed_ms: f64) -> bool {
        if self.is_settled() {
            self.carry_ms = 0.0;
            return false;
        }
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return true;
        }

        let mut budget = self.carry_ms + elapsed_ms.min(SPRING_MAX_ELAPSED_MS);
        let dt = SPRING_STEP_MS / 1000.0;
        while budget >= SPRING_STEP_MS {
            let accel = -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
            self.velocity += accel * dt;
            self.position += self.velocity * dt;
            budget -= SPRING_STEP_MS;
            if self.try_rest() {
                self.carry_ms = 0.0;
                return false;
            }
        }
        self.carry_ms = budget;

        if elapsed_ms >= SPRING_MAX_ELAPSED_MS {
            // The host stalled (background tab); land instead of replaying the motion.
            self.position = self.target;
            self.velocity = 0.0;
            self.carry_ms = 0.0;
            return false;
        }
        true
    }

    fn try_rest(&mut self) -> bool {
        if (self.position - self.target).abs() < SPRING_REST_DELTA && self.velocity.abs() < SPRING_REST_SPEED {
            self.position = self.target;
            self.velocity = 0.0;
            return true;
        }
        false
    }
}

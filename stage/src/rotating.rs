//! Rotating heading word.

#[cfg(test)]
#[path = "rotating_test.rs"]
mod rotating_test;

use crate::consts::ROTATING_WORD_INTERVAL_MS;

/// Cycles through a fixed word list on a fixed interval once started.
///
/// The index is derived from elapsed time rather than counted per tick, so a
/// late or skipped frame never drifts the cadence.
#[derive(Clone, Debug, PartialEq)]
pub struct RotatingWords {
    words: &'static [&'static str],
    interval_ms: f64,
    started_at: Option<f64>,
    index: usize,
}

impl RotatingWords {
    #[must_use]
    pub fn new(words: &'static [&'static str]) -> Self {
        Self { words, interval_ms: ROTATING_WORD_INTERVAL_MS, started_at: None, index: 0 }
    }

    /// Start cycling at `now_ms`. A running cycle is left alone.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
            self.index = 0;
        }
    }

    /// Freeze on the current word.
    pub fn stop(&mut self) {
        self.started_at = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Update the index for `now_ms`. Returns `true` when the word changed.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let Some(started) = self.started_at else {
            return false;
        };
        if self.words.is_empty() || self.interval_ms <= 0.0 {
            return false;
        }
        let elapsed = (now_ms - started).max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (elapsed / self.interval_ms).floor() as usize;
        let index = steps % self.words.len();
        if index == self.index {
            return false;
        }
        self.index = index;
        true
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Word currently shown; empty when the list is empty.
    #[must_use]
    pub fn current(&self) -> &'static str {
        self.words.get(self.index).copied().unwrap_or_default()
    }

    /// Absolute time of the next word change, while running.
    #[must_use]
    pub fn next_change_ms(&self, now_ms: f64) -> Option<f64> {
        let started = self.started_at?;
        if self.words.len() < 2 || self.interval_ms <= 0.0 {
            return None;
        }
        let elapsed = (now_ms - started).max(0.0);
        Some(started + ((elapsed / self.interval_ms).floor() + 1.0) * self.interval_ms)
    }
}

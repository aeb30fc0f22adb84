//! Character-by-character text reveal.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::consts::TYPEWRITER_CHAR_MS;

/// Types `text` out one character per [`TYPEWRITER_CHAR_MS`].
///
/// Progress is a function of `now - started_at`; changing the text resets it to
/// empty and restarts the clock.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    text: &'static str,
    total_chars: usize,
    shown_chars: usize,
    started_at: Option<f64>,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &'static str) -> Self {
        Self { text, total_chars: text.chars().count(), shown_chars: 0, started_at: None }
    }

    /// Begin typing at `now_ms` if not already typing.
    pub fn start(&mut self, now_ms: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
            self.shown_chars = 0;
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Swap in `text`. When it differs, the display clears and, if typing was
    /// underway, restarts from `now_ms`. Returns whether anything changed.
    pub fn set_text(&mut self, text: &'static str, now_ms: f64) -> bool {
        if text == self.text {
            return false;
        }
        self.text = text;
        self.total_chars = text.chars().count();
        self.shown_chars = 0;
        if self.started_at.is_some() {
            self.started_at = Some(now_ms);
        }
        true
    }

    /// Update the visible prefix for `now_ms`. Returns `true` when it grew.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let Some(started) = self.started_at else {
            return false;
        };
        let elapsed = (now_ms - started).max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let typed = (elapsed / TYPEWRITER_CHAR_MS).floor() as usize;
        let shown = typed.min(self.total_chars);
        if shown == self.shown_chars {
            return false;
        }
        self.shown_chars = shown;
        true
    }

    /// The typed prefix.
    #[must_use]
    pub fn displayed(&self) -> &'static str {
        let end = self.text.char_indices().nth(self.shown_chars).map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    /// Typed prefix split on line breaks.
    pub fn lines(&self) -> impl Iterator<Item = &'static str> {
        self.displayed().split('\n')
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shown_chars == self.total_chars
    }

    /// Absolute time the next character appears, while typing.
    #[must_use]
    pub fn next_char_ms(&self) -> Option<f64> {
        let started = self.started_at?;
        if self.is_complete() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let next = (self.shown_chars + 1) as f64;
        Some(started + next * TYPEWRITER_CHAR_MS)
    }
}

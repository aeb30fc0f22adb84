//! The discrete content track a visitor has chosen.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StageError;

/// Hint shown in the description slot before a track has been chosen.
pub const UNSET_HINT: &str = "Drag the toggle or click to choose, then click the arrow to proceed";

/// Content track selection.
///
/// `Unset` only exists before the first interaction; once a track is chosen
/// the selection never returns to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Storytelling,
    Uiux,
    Unset,
}

impl Mode {
    /// Both selectable tracks, in knob order (left to right).
    pub const TRACKS: [Mode; 2] = [Mode::Storytelling, Mode::Uiux];

    /// Whether a track has been chosen.
    #[must_use]
    pub fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Stable lowercase identifier, used for `data-mode` attributes and logs.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Storytelling => "storytelling",
            Self::Uiux => "uiux",
            Self::Unset => "unset",
        }
    }

    /// Toggle label text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Storytelling => "Storytelling",
            Self::Uiux => "UI/UX",
            Self::Unset => "",
        }
    }

    /// Landing description typed out under the toggle.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Storytelling => {
                "Explore my storytelling side, my poems,\nmy stories, my animations and my short films"
            }
            Self::Uiux => "Explore my emotion-centered user research and\nexperience design solutions",
            Self::Unset => UNSET_HINT,
        }
    }

    /// Knob offset that represents this mode on a track of `max_drag` travel.
    ///
    /// `Unset` parks the knob on the left like storytelling.
    #[must_use]
    pub fn knob_target(self, max_drag: f64) -> f64 {
        match self {
            Self::Uiux => max_drag.max(0.0),
            Self::Storytelling | Self::Unset => 0.0,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Mode {
    type Err = StageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "storytelling" => Ok(Self::Storytelling),
            "uiux" | "ui/ux" | "ui-ux" => Ok(Self::Uiux),
            other => Err(StageError::UnknownMode(other.to_owned())),
        }
    }
}

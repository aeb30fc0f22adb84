//! Static showcase catalogue rendered by the two content views.
//!
//! The catalogue ships as JSON embedded at compile time and is validated once
//! on load; the host also serves it at `/api/showcase/{mode}`.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::StageError;
use crate::router::ContentView;

const BUILTIN: &str = include_str!("../content/showcase.json");

/// One project card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Capability card below the project grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub icon: String,
}

/// Everything one content view shows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showcase {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    pub intro: String,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalogue {
    pub storytelling: Showcase,
    pub uiux: Showcase,
}

impl Catalogue {
    /// Parse and validate a catalogue document.
    ///
    /// # Errors
    ///
    /// Returns [`StageError::Catalogue`] for malformed JSON and
    /// [`StageError::DuplicateProject`] when a track repeats a project id.
    pub fn from_json(json: &str) -> Result<Self, StageError> {
        let catalogue: Self = serde_json::from_str(json)?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    /// The catalogue compiled into the crate.
    ///
    /// # Errors
    ///
    /// Same as [`Catalogue::from_json`]; the embedded document is covered by tests.
    pub fn builtin() -> Result<Self, StageError> {
        Self::from_json(BUILTIN)
    }

    #[must_use]
    pub fn showcase(&self, view: ContentView) -> &Showcase {
        match view {
            ContentView::Storytelling => &self.storytelling,
            ContentView::Uiux => &self.uiux,
        }
    }

    fn validate(&self) -> Result<(), StageError> {
        for (track, showcase) in [("storytelling", &self.storytelling), ("uiux", &self.uiux)] {
            let mut seen = HashSet::new();
            for project in &showcase.projects {
                if !seen.insert(project.id) {
                    return Err(StageError::DuplicateProject { track, id: project.id });
                }
            }
        }
        Ok(())
    }
}

//! Error type for the stage crate.

/// Errors raised while parsing external input into stage types.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    /// A mode label did not match any known track.
    #[error("unknown mode: {0:?}")]
    UnknownMode(String),
    /// The embedded showcase catalogue is not valid JSON for [`crate::content::Catalogue`].
    #[error("failed to parse showcase catalogue: {0}")]
    Catalogue(#[from] serde_json::Error),
    /// Two projects in the same track share an id.
    #[error("duplicate project id {id} in the {track} track")]
    DuplicateProject { track: &'static str, id: u32 },
}

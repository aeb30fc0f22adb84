//! Top-level host error.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("showcase catalogue: {0}")]
    Catalogue(#[from] stage::error::StageError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types shared across the scene.
//!
//! Only setup code ever returns these to the caller. Inside a tick every
//! per-element failure is logged and turned into "skip this element".

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Failed to read asset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode bitmap '{key}': {reason}")]
    Decode { key: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Drawing surface unavailable: {0}")]
    Surface(String),

    #[error("Frame schedule could not be built: {0}")]
    Schedule(String),
}

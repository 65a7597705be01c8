//! Unified error type for Adivina.

use std::path::PathBuf;

use adivina_game::Rejection;
use adivina_numbers::NumberError;
use adivina_speech::SpeechError;

/// Top-level error that wraps the crate-specific errors.
///
/// `#[from]` on each wrapped variant lets `?` convert sub-crate errors.
#[derive(Debug, thiserror::Error)]
pub enum AdivinaError {
    /// No number in an utterance.
    #[error(transparent)]
    Number(#[from] NumberError),

    /// A guess or answer the game refused.
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// The recognizer or the voice failed.
    #[error(transparent)]
    Speech(#[from] SpeechError),

    /// The config file could not be read.
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid JSON for [`HostConfig`](crate::HostConfig).
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The game actor has stopped.
    #[error("game actor unavailable")]
    Unavailable,
}

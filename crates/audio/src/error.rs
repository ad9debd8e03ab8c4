use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up sound playback.
///
/// Triggers never return these; only construction and loading do.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A clip file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A clip file was read but is not playable audio.
    #[error("failed to decode {path}: {message}")]
    Decode {
        /// File that failed to decode.
        path: PathBuf,
        /// Decoder message.
        message: String,
    },
    /// The output device or host media element could not be created.
    #[error("audio output unavailable: {0}")]
    Output(String),
    /// An effect name did not match any known effect.
    #[error("unknown sound effect '{0}' (expected change, drop or break)")]
    UnknownEffect(String),
}

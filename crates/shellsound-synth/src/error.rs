//! Error types for sound generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for sound operations.
pub type SoundResult<T> = Result<T, SoundError>;

/// Errors that can occur while rendering or writing sounds.
#[derive(Debug, Error)]
pub enum SoundError {
    /// Parent directory for an output file could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Existing file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// File on disk is not a PCM WAV file this crate can parse.
    #[error("invalid WAV file {}: {message}", path.display())]
    InvalidWav {
        /// Offending file.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },

    /// No catalog entry exists for the given key.
    #[error("unknown sound: {key}")]
    UnknownSound {
        /// The key that was looked up.
        key: String,
    },

    /// A pack, category, intensity or sound key could not be parsed.
    #[error("invalid key '{key}': {message}")]
    InvalidKey {
        /// The text that failed to parse.
        key: String,
        /// Error message.
        message: String,
    },
}

impl SoundError {
    /// Creates an invalid key error.
    pub fn invalid_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the filesystem path involved in this error, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CreateDir { path, .. }
            | Self::Write { path, .. }
            | Self::Read { path, .. }
            | Self::InvalidWav { path, .. } => Some(path),
            Self::UnknownSound { .. } | Self::InvalidKey { .. } => None,
        }
    }
}

//! Typed failures for model lifecycle and transcription operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::EngineKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure the core can hand back to a caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The model id is not registered for this engine. Vosk language
    /// codes form a closed set; whisper ids resolve by template and
    /// never produce this.
    #[error("unsupported {kind} model '{id}'")]
    UnsupportedModel { kind: EngineKind, id: String },

    /// Timeout or I/O fault while downloading. Any partial artifact has
    /// already been cleaned up.
    #[error("network failure: {0}")]
    Network(String),

    /// The model package could not be read or did not have the expected
    /// layout. The install target has been left absent.
    #[error("corrupt model archive: {0}")]
    ArchiveCorrupt(String),

    /// Transcription was requested for a model that is not installed.
    #[error("model not installed at {}", .0.display())]
    ModelNotFound(PathBuf),

    /// Transcription was requested for an audio file that does not exist.
    #[error("audio file not found at {}", .0.display())]
    AudioNotFound(PathBuf),

    /// The engine subprocess could not be spawned or exited non-zero;
    /// `stderr` carries its diagnostic output verbatim.
    #[error("{engine} engine failed: {stderr}")]
    EngineFailed { engine: &'static str, stderr: String },

    /// The model store's directory layout could not be created.
    #[error("model storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Filesystem fault outside the download path.
    #[error(transparent)]
    Io(#[from] io::Error),
}

//! Filesystem layout for installed models.
//!
//! The store is a subtree under one root:
//!
//! ```text
//! <root>/
//! ├── whisper/models/ggml-<id>.bin     - one file per model
//! └── vosk/models/<language>/          - one directory per model,
//!                                        README marks a complete install
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{EngineKind, ModelDescriptor};
use super::whisper;
use crate::error::Error;
use crate::settings::Settings;

/// File inside an installed vosk model directory that marks extraction
/// as complete. Shipped by the model archives themselves; a directory
/// without it is an interrupted install.
pub const VOSK_COMPLETION_MARKER: &str = "README";

const APP_DIR_NAME: &str = "murmur";
const MODELS_DIR_NAME: &str = "models";

/// Where models live on disk. Purely path-and-presence logic; mutation
/// happens in the download pipeline.
#[derive(Debug, Clone)]
pub struct ModelStore {
    root: PathBuf,
}

impl ModelStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store at the configured root, falling back to the platform data
    /// directory.
    pub fn open_default() -> Self {
        Self::new(Self::default_root())
    }

    /// The configured or platform-default store root.
    pub fn default_root() -> PathBuf {
        if let Some(dir) = &Settings::global().data_dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding installed models for one engine kind.
    pub fn namespace_dir(&self, kind: EngineKind) -> PathBuf {
        self.root.join(kind.as_str()).join(MODELS_DIR_NAME)
    }

    /// Deterministic install path for a descriptor. No I/O.
    pub fn path_for(&self, descriptor: &ModelDescriptor) -> PathBuf {
        let dir = self.namespace_dir(descriptor.kind);
        match descriptor.kind {
            EngineKind::Whisper => dir.join(whisper::model_file_name(&descriptor.id)),
            EngineKind::Vosk => dir.join(&descriptor.id),
        }
    }

    /// Whether the descriptor's model is fully installed.
    pub fn exists(&self, descriptor: &ModelDescriptor) -> bool {
        let path = self.path_for(descriptor);
        match descriptor.kind {
            EngineKind::Whisper => path.is_file(),
            EngineKind::Vosk => path.is_dir() && path.join(VOSK_COMPLETION_MARKER).is_file(),
        }
    }

    /// Create both namespace directories if missing. Idempotent.
    pub fn ensure_layout(&self) -> Result<(), Error> {
        for kind in EngineKind::all() {
            let dir = self.namespace_dir(*kind);
            fs::create_dir_all(&dir)
                .map_err(|e| Error::StorageUnavailable(format!("{}: {e}", dir.display())))?;
        }
        Ok(())
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::open_default()
    }
}

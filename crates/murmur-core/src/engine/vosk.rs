//! Vosk subprocess adapter.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{RecognitionEngine, run_engine};
use crate::error::Error;
use crate::model::EngineKind;
use crate::settings::Settings;

/// Invokes the vosk transcriber with the model directory and audio file
/// as its two positional arguments.
#[derive(Debug, Clone)]
pub struct VoskEngine {
    binary: PathBuf,
}

impl VoskEngine {
    /// Engine using the configured (or `PATH`-default) executable.
    pub fn new() -> Self {
        Self::with_binary(Settings::global().vosk_bin())
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for VoskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine for VoskEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Vosk
    }

    fn run(&self, model_path: &Path, audio_path: &Path) -> Result<String, Error> {
        let mut command = Command::new(&self.binary);
        command.arg(model_path).arg(audio_path);
        run_engine(self.kind(), command)
    }
}

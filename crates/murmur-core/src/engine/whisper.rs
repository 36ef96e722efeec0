//! whisper.cpp subprocess adapter.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{RecognitionEngine, run_engine};
use crate::error::Error;
use crate::model::EngineKind;
use crate::settings::Settings;

/// Invokes the whisper.cpp CLI with banner and timestamp output
/// suppressed, leaving a bare transcript on stdout. Language is always
/// auto-detected.
#[derive(Debug, Clone)]
pub struct WhisperEngine {
    binary: PathBuf,
}

impl WhisperEngine {
    /// Engine using the configured (or `PATH`-default) executable.
    pub fn new() -> Self {
        Self::with_binary(Settings::global().whisper_bin())
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for WhisperEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine for WhisperEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Whisper
    }

    fn run(&self, model_path: &Path, audio_path: &Path) -> Result<String, Error> {
        let mut command = Command::new(&self.binary);
        command
            .arg("--model")
            .arg(model_path)
            .arg("--file")
            .arg(audio_path)
            .arg("--language")
            .arg("auto")
            .arg("--no-timestamps")
            .arg("--no-prints");
        run_engine(self.kind(), command)
    }
}

//! External recognition engines invoked as subprocesses.
//!
//! Engines are opaque, independently-built executables. The contract is
//! a model path and an audio path in, transcript text on stdout out;
//! failures are reported through the exit status and stderr. The
//! orchestrator stays engine-agnostic behind [`RecognitionEngine`], so
//! adding an engine never touches request-validation logic.

mod vosk;
mod whisper;

pub use vosk::VoskEngine;
pub use whisper::WhisperEngine;

use std::path::Path;
use std::process::Command;

use crate::error::Error;
use crate::model::EngineKind;

/// A speech-recognition engine the orchestrator can dispatch to.
pub trait RecognitionEngine: Send + Sync {
    fn kind(&self) -> EngineKind;

    /// Run the engine to completion and return its raw stdout.
    fn run(&self, model_path: &Path, audio_path: &Path) -> Result<String, Error>;
}

/// Spawn `command` synchronously, capture both streams, and map a
/// non-zero exit to a typed failure carrying the engine's stderr.
pub(crate) fn run_engine(kind: EngineKind, mut command: Command) -> Result<String, Error> {
    crate::verbose!("running {kind} engine: {command:?}");

    let output = command.output().map_err(|e| Error::EngineFailed {
        engine: kind.as_str(),
        stderr: format!("failed to spawn {:?}: {e}", command.get_program()),
    })?;

    if !output.status.success() {
        return Err(Error::EngineFailed {
            engine: kind.as_str(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

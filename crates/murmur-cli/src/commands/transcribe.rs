//! `murmur transcribe` - run one audio file through an engine.

use std::path::Path;

use anyhow::Result;
use murmur_core::error::Error;
use murmur_core::{EngineKind, Transcriber, TranscriptionRequest};

pub fn run(engine: EngineKind, model: &str, audio: &Path) -> Result<()> {
    let transcriber = Transcriber::new();
    let request = TranscriptionRequest::new(engine, model, audio);

    match transcriber.transcribe(&request) {
        Ok(text) => {
            println!("{text}");
            Ok(())
        }
        Err(Error::ModelNotFound(path)) => {
            anyhow::bail!(
                "model '{model}' is not installed (expected at {}).\nRun: murmur download {engine} {model}",
                path.display()
            )
        }
        // Other failures already carry their diagnostics (engine stderr
        // included) in the error message.
        Err(e) => Err(e.into()),
    }
}

//! `murmur models` - list the catalog with install status.

use anyhow::Result;
use murmur_core::model::whisper;
use murmur_core::{EngineKind, Transcriber};

pub fn run() -> Result<()> {
    let transcriber = Transcriber::new();

    println!("Whisper models (any whisper.cpp size id works):");
    for (name, description) in whisper::KNOWN_SIZES {
        let status = if transcriber.is_model_present(EngineKind::Whisper, name)? {
            " [installed]"
        } else {
            ""
        };
        println!("  {name} - {description}{status}");
    }

    println!();
    println!("Vosk models:");
    for model in transcriber.catalog().vosk_models() {
        let status = if transcriber.is_model_present(EngineKind::Vosk, &model.language)? {
            " [installed]"
        } else {
            ""
        };
        println!("  {} - {}{status}", model.language, model.archive_root);
    }

    println!();
    println!("Models are stored in {}", transcriber.store().root().display());
    Ok(())
}

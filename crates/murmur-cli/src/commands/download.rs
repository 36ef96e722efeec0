//! `murmur download` - fetch and install a model.

use anyhow::{Context, Result};
use murmur_core::{EngineKind, Transcriber};

pub fn run(engine: EngineKind, id: &str) -> Result<()> {
    let transcriber = Transcriber::new();

    if transcriber.is_model_present(engine, id)? {
        println!("{engine} model '{id}' is already installed");
        return Ok(());
    }

    eprintln!("Downloading {engine} model '{id}'... (this may take a while)");
    let path = transcriber
        .download_model(engine, id)
        .with_context(|| format!("failed to install {engine} model '{id}'"))?;

    println!("Installed to {}", path.display());
    Ok(())
}

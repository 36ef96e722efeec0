mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use murmur_core::EngineKind;
use murmur_core::model::whisper;

#[derive(Parser)]
#[command(name = "murmur", version, about = "Offline transcription with whisper and vosk engines")]
struct Cli {
    /// Print diagnostic output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available models and their install status
    Models,
    /// Download and install a model
    Download {
        /// Engine kind (whisper or vosk)
        engine: EngineKind,
        /// Model size (whisper) or language code (vosk)
        id: String,
    },
    /// Transcribe an audio file
    Transcribe {
        /// Path to the audio file
        audio: PathBuf,
        /// Engine kind (whisper or vosk)
        #[arg(long, default_value = "whisper")]
        engine: EngineKind,
        /// Model size (whisper) or language code (vosk)
        #[arg(long, default_value = whisper::DEFAULT_MODEL)]
        model: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    murmur_core::set_verbose(cli.verbose);

    match cli.command {
        Commands::Models => commands::models::run(),
        Commands::Download { engine, id } => commands::download::run(engine, &id),
        Commands::Transcribe {
            audio,
            engine,
            model,
        } => commands::transcribe::run(engine, &model, &audio),
    }
}

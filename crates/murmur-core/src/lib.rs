pub mod engine;
pub mod error;
pub mod model;
pub mod settings;
pub mod transcribe;
pub mod verbose;

pub use engine::{RecognitionEngine, VoskEngine, WhisperEngine};
pub use error::{Error, Result};
pub use model::{Catalog, EngineKind, ModelDescriptor, ModelStore};
pub use settings::Settings;
pub use transcribe::{Transcriber, TranscriptionRequest, normalize_transcript};
pub use verbose::set_verbose;

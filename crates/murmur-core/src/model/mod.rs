//! Model lifecycle: catalog, storage layout, download, and install.
//!
//! ```text
//! Catalog            - which models exist and where they come from
//! ModelStore         - where installed models live, presence checks
//! download::fetch    - streaming HTTP fetch with cleanup-on-failure
//! archive            - zip install for directory-based models
//! download::ensure_model - the full fetch/install pipeline
//! ```

pub mod archive;
pub mod download;
pub mod store;
pub mod types;
pub mod vosk;
pub mod whisper;

pub use store::{ModelStore, VOSK_COMPLETION_MARKER};
pub use types::{Catalog, EngineKind, ModelDescriptor};
pub use vosk::VoskModel;

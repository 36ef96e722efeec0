//! Engine kinds, model descriptors, and the catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{vosk, whisper};
use crate::error::Error;

/// The two recognition engines murmur can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Whisper,
    Vosk,
}

impl EngineKind {
    /// String identifier, also the namespace directory under the store
    /// root.
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Whisper => "whisper",
            EngineKind::Vosk => "vosk",
        }
    }

    pub fn all() -> &'static [EngineKind] {
        &[EngineKind::Whisper, EngineKind::Vosk]
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whisper" => Ok(EngineKind::Whisper),
            "vosk" => Ok(EngineKind::Vosk),
            _ => Err(format!("unknown engine: {s}. Available: whisper, vosk")),
        }
    }
}

/// A downloadable recognition model and its installed-layout
/// expectations. Produced by the [`Catalog`], consumed by the store and
/// the download pipeline.
#[derive(Debug, Clone)]
pub struct ModelDescriptor {
    pub kind: EngineKind,
    /// Model size (whisper) or language code (vosk).
    pub id: String,
    pub url: String,
    /// Top-level folder inside the archive, stripped on extraction.
    /// `None` for single-file models.
    pub archive_root: Option<String>,
}

/// Registry of installable models.
///
/// Built explicitly at construction rather than living in global state,
/// so tests can substitute fixture URLs and language sets.
#[derive(Debug, Clone)]
pub struct Catalog {
    whisper_base_url: String,
    vosk_models: Vec<vosk::VoskModel>,
}

impl Catalog {
    /// The models murmur knows how to install out of the box.
    pub fn builtin() -> Self {
        Self::new(whisper::BASE_URL, vosk::builtin_models())
    }

    pub fn new(whisper_base_url: impl Into<String>, vosk_models: Vec<vosk::VoskModel>) -> Self {
        Self {
            whisper_base_url: whisper_base_url.into(),
            vosk_models,
        }
    }

    /// Resolve a descriptor for `id`.
    ///
    /// Whisper ids are open-ended: any id produces a URL by template
    /// substitution. Vosk ids must be registered language codes.
    pub fn resolve(&self, kind: EngineKind, id: &str) -> Result<ModelDescriptor, Error> {
        match kind {
            EngineKind::Whisper => Ok(ModelDescriptor {
                kind,
                id: id.to_string(),
                url: whisper::model_url(&self.whisper_base_url, id),
                archive_root: None,
            }),
            EngineKind::Vosk => self
                .vosk_models
                .iter()
                .find(|model| model.language == id)
                .map(|model| ModelDescriptor {
                    kind,
                    id: id.to_string(),
                    url: model.url.clone(),
                    archive_root: Some(model.archive_root.clone()),
                })
                .ok_or_else(|| Error::UnsupportedModel {
                    kind,
                    id: id.to_string(),
                }),
        }
    }

    /// Registered vosk models, for listings.
    pub fn vosk_models(&self) -> &[vosk::VoskModel] {
        &self.vosk_models
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_kind_round_trips_through_serde() {
        let json = serde_json::to_string(&EngineKind::Whisper).unwrap();
        assert_eq!(json, "\"whisper\"");
        let kind: EngineKind = serde_json::from_str("\"vosk\"").unwrap();
        assert_eq!(kind, EngineKind::Vosk);
    }

    #[test]
    fn engine_kind_parses_case_insensitively() {
        assert_eq!("Whisper".parse::<EngineKind>().unwrap(), EngineKind::Whisper);
        assert_eq!("VOSK".parse::<EngineKind>().unwrap(), EngineKind::Vosk);
        assert!("kaldi".parse::<EngineKind>().is_err());
    }

    #[test]
    fn whisper_resolution_is_open_ended() {
        let catalog = Catalog::builtin();
        let descriptor = catalog.resolve(EngineKind::Whisper, "large-v3").unwrap();
        assert!(descriptor.url.contains("ggml-large-v3.bin"));
        assert!(descriptor.archive_root.is_none());
    }

    #[test]
    fn vosk_resolution_rejects_unknown_languages() {
        let catalog = Catalog::builtin();
        let err = catalog.resolve(EngineKind::Vosk, "xx").unwrap_err();
        assert!(matches!(err, Error::UnsupportedModel { .. }));
    }

    #[test]
    fn vosk_resolution_carries_archive_root() {
        let catalog = Catalog::builtin();
        let descriptor = catalog.resolve(EngineKind::Vosk, "en").unwrap();
        assert_eq!(descriptor.archive_root.as_deref(), Some("vosk-model-small-en-us-0.15"));
        assert!(descriptor.url.ends_with(".zip"));
    }
}

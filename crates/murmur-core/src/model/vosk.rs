//! Vosk model registry.
//!
//! Vosk publishes one zip archive per language; each archive wraps a
//! single top-level folder that is stripped on install. The set of
//! supported languages is closed.

/// One installable vosk model.
#[derive(Debug, Clone)]
pub struct VoskModel {
    /// Language code used as the model id and install directory name.
    pub language: String,
    pub url: String,
    /// The archive's top-level folder, stripped on extraction.
    pub archive_root: String,
}

impl VoskModel {
    pub fn new(
        language: impl Into<String>,
        url: impl Into<String>,
        archive_root: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            url: url.into(),
            archive_root: archive_root.into(),
        }
    }
}

/// Languages murmur can install out of the box.
pub fn builtin_models() -> Vec<VoskModel> {
    vec![
        VoskModel::new(
            "en",
            "https://alphacephei.com/vosk/models/vosk-model-small-en-us-0.15.zip",
            "vosk-model-small-en-us-0.15",
        ),
        VoskModel::new(
            "cn",
            "https://alphacephei.com/vosk/models/vosk-model-small-cn-0.22.zip",
            "vosk-model-small-cn-0.22",
        ),
        VoskModel::new(
            "uk",
            "https://alphacephei.com/vosk/models/vosk-model-small-uk-v3-nano.zip",
            "vosk-model-small-uk-v3-nano",
        ),
        VoskModel::new(
            "ru",
            "https://alphacephei.com/vosk/models/vosk-model-small-ru-0.22.zip",
            "vosk-model-small-ru-0.22",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_covers_expected_languages() {
        let models = builtin_models();
        let languages: Vec<&str> = models.iter().map(|m| m.language.as_str()).collect();
        assert_eq!(languages, ["en", "cn", "uk", "ru"]);
        for model in &models {
            assert!(model.url.starts_with("https://alphacephei.com/"));
            assert!(model.url.ends_with(".zip"));
            assert!(!model.archive_root.is_empty());
        }
    }
}

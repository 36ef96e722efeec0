//! Whisper model catalog constants.
//!
//! Whisper models are single ggml files published per size; any size id
//! resolves by template substitution, so the catalog never rejects one.

/// Where whisper.cpp ggml models are published.
pub const BASE_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Default size for callers that do not pick one.
pub const DEFAULT_MODEL: &str = "small";

/// Curated sizes for listings. Resolution itself is open-ended; these
/// are the ones worth suggesting.
pub const KNOWN_SIZES: &[(&str, &str)] = &[
    ("tiny", "~75 MB - fastest, lower quality"),
    ("base", "~142 MB - fast, decent quality"),
    ("small", "~466 MB - balanced (recommended)"),
    ("medium", "~1.5 GB - better quality, slower"),
];

/// File name of an installed whisper model.
pub fn model_file_name(id: &str) -> String {
    format!("ggml-{id}.bin")
}

/// Download URL for a whisper model id.
pub fn model_url(base_url: &str, id: &str) -> String {
    format!("{base_url}/ggml-{id}.bin?download=true")
}

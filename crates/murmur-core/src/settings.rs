//! User-level configuration.
//!
//! Settings come from an optional JSON file under the platform config
//! directory, with environment variables taking precedence:
//!
//! - `MURMUR_DATA_DIR` - root directory for installed models
//! - `MURMUR_WHISPER_BIN` - whisper engine executable
//! - `MURMUR_VOSK_BIN` - vosk engine executable

use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Default whisper engine executable, resolved on `PATH`.
pub const DEFAULT_WHISPER_BIN: &str = "whisper-cli";

/// Default vosk engine executable, resolved on `PATH`.
pub const DEFAULT_VOSK_BIN: &str = "vosk-transcriber";

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::load);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root directory for installed models. `None` means the platform
    /// data directory.
    pub data_dir: Option<PathBuf>,
    /// Override for the whisper engine executable.
    pub whisper_bin: Option<PathBuf>,
    /// Override for the vosk engine executable.
    pub vosk_bin: Option<PathBuf>,
}

impl Settings {
    /// Settings loaded once per process.
    pub fn global() -> &'static Settings {
        &SETTINGS
    }

    /// Read the settings file (if any) and apply environment overrides.
    pub fn load() -> Self {
        let mut settings = Self::read_file().unwrap_or_default();
        settings.apply_env();
        settings
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("murmur").join("settings.json"))
    }

    fn read_file() -> Option<Self> {
        let contents = std::fs::read_to_string(Self::config_path()?).ok()?;
        match serde_json::from_str(&contents) {
            Ok(settings) => Some(settings),
            Err(e) => {
                crate::verbose!("ignoring malformed settings file: {e}");
                None
            }
        }
    }

    fn apply_env(&mut self) {
        if let Some(dir) = std::env::var_os("MURMUR_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(bin) = std::env::var_os("MURMUR_WHISPER_BIN") {
            self.whisper_bin = Some(PathBuf::from(bin));
        }
        if let Some(bin) = std::env::var_os("MURMUR_VOSK_BIN") {
            self.vosk_bin = Some(PathBuf::from(bin));
        }
    }

    /// Whisper engine executable to invoke.
    pub fn whisper_bin(&self) -> PathBuf {
        self.whisper_bin
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WHISPER_BIN))
    }

    /// Vosk engine executable to invoke.
    pub fn vosk_bin(&self) -> PathBuf {
        self.vosk_bin
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_VOSK_BIN))
    }
}

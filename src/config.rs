//! Configuration for StegoCraft.
//!
//! Stored in `~/.stegocraft/config.toml`. Every field is optional; a missing
//! file or field falls back to the defaults.
//!
//! ```toml
//! decode_policy = "strict"
//! audio_scan_limit = 50000
//! filler_words = ["the", "cat", "sat"]
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::codec::DecodePolicy;
use crate::medium::MediumKind;
use crate::text::sample_filler_words;
use crate::DEFAULT_AUDIO_SCAN_LIMIT;

/// Errors that can occur while loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config directory not found. Unable to determine home directory.")]
    NoConfigDir,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

/// User configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    /// How reveal treats a missing terminator or unprintable bytes.
    pub decode_policy: DecodePolicy,

    /// Samples scanned when revealing from audio.
    pub audio_scan_limit: usize,

    /// Pixels scanned when revealing from an image. All pixels when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_scan_limit: Option<usize>,

    /// Words used to lengthen a short text cover. The sample covers are used when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filler_words: Vec<String>,
}

impl Default for StegoConfig {
    fn default() -> Self {
        Self {
            decode_policy: DecodePolicy::default(),
            audio_scan_limit: DEFAULT_AUDIO_SCAN_LIMIT,
            image_scan_limit: None,
            filler_words: Vec::new(),
        }
    }
}

impl StegoConfig {
    /// Loads the configuration from the default location.
    ///
    /// Returns the defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, or the defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: StegoConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Scan limit configured for `kind`, if any.
    pub fn scan_limit_for(&self, kind: MediumKind) -> Option<usize> {
        match kind {
            MediumKind::Text => None,
            MediumKind::Image => self.image_scan_limit,
            MediumKind::Audio => Some(self.audio_scan_limit),
        }
    }

    /// Words used by filler extension.
    pub fn filler(&self) -> Vec<String> {
        if self.filler_words.is_empty() {
            sample_filler_words()
        } else {
            self.filler_words.clone()
        }
    }
}

/// Get the StegoCraft configuration directory (`~/.stegocraft`).
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".stegocraft"))
        .ok_or(ConfigError::NoConfigDir)
}

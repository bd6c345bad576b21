use crate::core::text_normalizer::{NormalizerOptions, TextNormalizer, WordClass};
use crate::error::{NameMatchError, NameMatchResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Normalization
    pub word_class: WordClass,

    // Ranking
    pub cutoff: f64,
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_class: WordClass::Unicode,
            cutoff: 0.6,
            limit: 5,
        }
    }
}

impl Config {
    /// Load config from the default location, or use defaults
    pub fn load() -> NameMatchResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`.
    ///
    /// A missing file gives the defaults. A file that is not valid JSON is
    /// logged and replaced by the defaults.
    pub fn load_from(path: &Path) -> NameMatchResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = match serde_json::from_str::<Self>(&content) {
            Ok(config) => config,
            Err(e) => {
                // Graceful degradation: log warning and use defaults
                tracing::warn!(
                    "⚠️ Config file {} corrupted or invalid, using defaults: {}",
                    path.display(),
                    e
                );
                return Ok(Self::default());
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values the matcher cannot use
    pub fn validate(&self) -> NameMatchResult<()> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(NameMatchError::Config(format!(
                "cutoff {} is outside [0, 1]",
                self.cutoff
            )));
        }
        Ok(())
    }

    /// Normalizer for the configured word class
    pub fn normalizer(&self) -> TextNormalizer {
        TextNormalizer::new(NormalizerOptions {
            word_class: self.word_class,
        })
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("namematch")
        .join("config.json")
}

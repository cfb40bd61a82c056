use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::dialog::DateRange;
use crate::core::preprocess::{PreprocessConfig, PreprocessResult, RunConfig};

/// Top-level application configuration.
///
/// Preprocessing sections (`[tokenizer]`, `[merger]`, `[stopwords]`,
/// `[language]`, `stages`) sit at the top level of the file next to
/// `[source]` and `[run]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub preprocess: PreprocessConfig,
    pub source: SourceConfig,
    pub run: RunConfig,
}

/// Which messages the dialog source loads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Earliest message date (unix seconds), 0 for no lower bound.
    pub date_from: i64,
    /// Latest message date (unix seconds), 0 for no upper bound.
    pub date_to: i64,
}

impl SourceConfig {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.date_from, self.date_to)
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/dialogprep/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}; using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}; using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Load an explicitly named config file. Unlike [`AppConfig::load`],
    /// a missing or malformed file is an error.
    pub fn from_toml_file(path: &Path) -> PreprocessResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.preprocess.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("dialogprep").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

//! Preprocessing Error Types

use thiserror::Error;

use crate::core::dialog::StoreError;

/// Errors that can occur while preprocessing dialogs
#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Stopword load failed for '{lang}': {message}")]
    StopwordLoad { lang: String, message: String },

    #[error("Language detection failed: {0}")]
    Detection(String),

    #[error("Stage '{stage}' failed: {message}")]
    Stage { stage: &'static str, message: String },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for preprocessing operations
pub type PreprocessResult<T> = Result<T, PreprocessError>;

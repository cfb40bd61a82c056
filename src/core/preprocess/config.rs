//! Preprocessing Configuration
//!
//! Immutable configuration for every pipeline stage. Each stage copies the
//! section it needs at construction time.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::error::{PreprocessError, PreprocessResult};

/// Overall preprocessing configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Tokenizer configuration
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Message merging configuration
    #[serde(default)]
    pub merger: MergerConfig,

    /// Stopword resource configuration
    #[serde(default)]
    pub stopwords: StopwordConfig,

    /// Language identification configuration
    #[serde(default)]
    pub language: LanguageConfig,

    /// Stages to run, in order
    #[serde(default = "default_stages")]
    pub stages: Vec<StageKind>,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            merger: MergerConfig::default(),
            stopwords: StopwordConfig::default(),
            language: LanguageConfig::default(),
            stages: default_stages(),
        }
    }
}

impl PreprocessConfig {
    /// Load configuration from TOML file
    pub fn from_toml_file(path: &std::path::Path) -> PreprocessResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from TOML string
    pub fn from_toml_str(content: &str) -> PreprocessResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no stage can work with.
    pub fn validate(&self) -> PreprocessResult<()> {
        let tokenizer = &self.tokenizer;
        if tokenizer.min_token_length == 0 || tokenizer.min_token_length > tokenizer.max_token_length {
            return Err(PreprocessError::ConfigParse(format!(
                "token length range {}..={} is empty or starts at zero",
                tokenizer.min_token_length, tokenizer.max_token_length
            )));
        }
        for (i, kind) in self.stages.iter().enumerate() {
            if self.stages[..i].contains(kind) {
                return Err(PreprocessError::ConfigParse(format!(
                    "stage '{}' listed more than once",
                    kind.as_str()
                )));
            }
        }
        Ok(())
    }
}

/// Kinds of pipeline stage, in the spelling used by config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Merge,
    Tokenize,
    Language,
    Stopwords,
}

impl StageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Merge => "merge",
            StageKind::Tokenize => "tokenize",
            StageKind::Language => "language",
            StageKind::Stopwords => "stopwords",
        }
    }
}

/// Tokenizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Split compounds on punctuation and run the normalization chain.
    /// When false, text is only split on whitespace.
    #[serde(default = "default_true")]
    pub advanced: bool,

    /// Minimum token length in characters, inclusive (default: 2)
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,

    /// Maximum token length in characters, inclusive (default: 30)
    #[serde(default = "default_max_token_length")]
    pub max_token_length: usize,

    /// Process the messages of a dialog on the rayon pool
    #[serde(default)]
    pub parallel: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            advanced: true,
            min_token_length: 2,
            max_token_length: 30,
            parallel: false,
        }
    }
}

/// Policy for merging adjacent messages into one logical turn.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MergerConfig {
    /// Largest gap in seconds between two messages that still merge (default: 60)
    #[serde(default = "default_max_gap_secs")]
    pub max_gap_secs: u64,

    /// Only merge messages from the same sender (default: true)
    #[serde(default = "default_true")]
    pub require_same_sender: bool,

    /// Text inserted between merged message texts (default: newline)
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for MergerConfig {
    fn default() -> Self {
        Self {
            max_gap_secs: 60,
            require_same_sender: true,
            separator: default_separator(),
        }
    }
}

/// Where per-language stopword lists live.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StopwordConfig {
    /// Directory holding `<lang>.<extension>` files. Falls back to the
    /// user data directory when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// File extension of stopword lists (default: "txt")
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            dir: None,
            extension: default_extension(),
        }
    }
}

/// Language identification configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Feed the detector the joined tokens when a message is tokenized,
    /// instead of its raw text (default: true)
    #[serde(default = "default_true")]
    pub prefer_tokens: bool,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self { prefer_tokens: true }
    }
}

// Default value helpers for serde
fn default_true() -> bool { true }
fn default_min_token_length() -> usize { 2 }
fn default_max_token_length() -> usize { 30 }
fn default_max_gap_secs() -> u64 { 60 }
fn default_separator() -> String { "\n".to_string() }
fn default_extension() -> String { "txt".to_string() }
fn default_stages() -> Vec<StageKind> {
    vec![
        StageKind::Merge,
        StageKind::Tokenize,
        StageKind::Language,
        StageKind::Stopwords,
    ]
}

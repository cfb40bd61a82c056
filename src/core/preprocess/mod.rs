//! Dialog Preprocessing Module
//!
//! Turns raw chat dialogs into cleaned token streams: consecutive messages of
//! one turn are merged, text is normalized and tokenized, each message is
//! tagged with its language, and language-specific stopwords are dropped.
//!
//! ## Architecture
//!
//! ```text
//! DialogStore ──► DialogSource (one dialog at a time, date-range filtered)
//!        │
//!        ▼
//! ┌──────────────────────────────┐
//! │  1. Merge                    │  "hey" + "u there?" → "hey\nu there?"
//! │     (same sender, ≤ 60s gap) │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  2. Tokenize                 │  "Sooooo 10mb!!" → ["soo"]
//! │     (normalize + filter)     │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  3. Language                 │  ["soo"] → lang = "en"
//! │     (pluggable detector)     │
//! └──────────────┬───────────────┘
//!                ▼
//! ┌──────────────────────────────┐
//! │  4. Stopwords                │  ["the", "cat"] → ["cat"]
//! │     (per-language, cached)   │
//! └──────────────┬───────────────┘
//!                ▼
//!              sink
//! ```
//!
//! Stage order comes from [`PreprocessConfig::stages`]; stages only read
//! fields earlier stages produced, and leave messages alone otherwise.

pub mod config;
pub mod error;
pub mod language;
pub mod merger;
pub mod paths;
pub mod patterns;
pub mod pipeline;
pub mod run;
pub mod stage;
pub mod stopwords;
pub mod tokenizer;

// Re-export primary types
pub use config::{
    LanguageConfig, MergerConfig, PreprocessConfig, StageKind, StopwordConfig, TokenizerConfig,
};
pub use error::{PreprocessError, PreprocessResult};
pub use language::{LanguageDetector, LanguageIdentifier};
pub use merger::MessageMerger;
pub use paths::{get_stopwords_dir, get_user_data_dir, STOPWORDS_DIR_NAME};
pub use pipeline::Pipeline;
pub use run::{OnDialogError, PreprocessRun, RunConfig, RunStats};
pub use stage::{PipelineStage, TokenizeStage};
pub use stopwords::{FileStopwordLoader, NoStopwords, StopwordCache, StopwordLoader, StopwordsRemover};
pub use tokenizer::Tokenizer;

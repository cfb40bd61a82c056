//! Test Fixtures
//!
//! Helpers for creating messages, dialogs, stores, stopword directories and
//! pipelines.

use std::collections::HashSet;
use std::sync::Arc;

use tempfile::TempDir;

use crate::core::dialog::{Dialog, MemoryDialogStore, Message};
use crate::core::preprocess::{
    FileStopwordLoader, LanguageDetector, Pipeline, PreprocessConfig, StageKind, StopwordCache,
    StopwordLoader,
};

// =============================================================================
// Dialog Fixtures
// =============================================================================

/// Create a message with the given sender, date and text.
pub fn msg(id: i64, from_id: i64, date: i64, text: &str) -> Message {
    Message::new(id, from_id, date, text)
}

/// A short two-party chat: user 1 sends a burst, user 2 answers later.
pub fn chat_dialog(id: i64) -> Dialog {
    Dialog::new(id, format!("chat-{id}")).with_messages(vec![
        msg(1, 1, 1_000, "Hey, are you there?"),
        msg(2, 1, 1_010, "The meeting moved to 6pm"),
        msg(3, 2, 1_500, "Thanks! The room is the same?"),
    ])
}

/// In-memory store holding `count` copies of [`chat_dialog`].
pub fn chat_store(count: i64) -> MemoryDialogStore {
    MemoryDialogStore::new((1..=count).map(chat_dialog).collect())
}

// =============================================================================
// Stopword Fixtures
// =============================================================================

pub const EN_STOPWORDS: &[&str] = &["the", "a", "is", "are", "to", "you"];

pub fn word_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Create a stopwords directory with an English list.
/// Returns the TempDir, which must be kept alive.
pub fn create_stopwords_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("en.txt"), EN_STOPWORDS.join("\n"))
        .expect("Failed to write stopword list");
    dir
}

pub fn file_cache(dir: &TempDir) -> Arc<StopwordCache> {
    let loader: Arc<dyn StopwordLoader> = Arc::new(FileStopwordLoader::new(dir.path(), "txt"));
    Arc::new(StopwordCache::new(loader))
}

// =============================================================================
// Pipeline Fixtures
// =============================================================================

pub fn pipeline_with(
    stages: Vec<StageKind>,
    detector: Option<Arc<dyn LanguageDetector>>,
    cache: Arc<StopwordCache>,
) -> Pipeline {
    let config = PreprocessConfig {
        stages,
        ..Default::default()
    };
    Pipeline::from_config(&config, detector, cache)
}

//! Stopword Lists
//!
//! Per-language stopword sets are loaded lazily through a [`StopwordLoader`]
//! and memoized in a [`StopwordCache`] shared by every dialog of a run. Each
//! language is loaded at most once, even when several threads ask for it at
//! the same time. A missing or unreadable list counts as an empty set.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use once_cell::sync::OnceCell;

use super::config::StopwordConfig;
use super::error::{PreprocessError, PreprocessResult};
use super::paths::get_stopwords_dir;
use super::stage::{for_each_message, PipelineStage};
use crate::core::dialog::Dialog;

/// Resolves a language code to its stopword set.
pub trait StopwordLoader: Send + Sync {
    /// `Ok(None)` when no list exists for the language.
    fn load(&self, lang: &str) -> PreprocessResult<Option<HashSet<String>>>;
}

/// Loads `<dir>/<lang>.<extension>`: one word per line, blank lines and
/// `#` comments ignored.
#[derive(Clone, Debug)]
pub struct FileStopwordLoader {
    dir: PathBuf,
    extension: String,
}

impl FileStopwordLoader {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Loader for the configured directory, or the default stopwords
    /// directory when none is configured. `None` if neither is available.
    pub fn from_config(config: &StopwordConfig) -> Option<Self> {
        let dir = config.dir.clone().or_else(get_stopwords_dir)?;
        Some(Self::new(dir, config.extension.clone()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, lang: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", lang, self.extension))
    }

    /// Parse a stopword list. Entries are trimmed and lowercased.
    pub fn parse(content: &str) -> HashSet<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect()
    }
}

impl StopwordLoader for FileStopwordLoader {
    fn load(&self, lang: &str) -> PreprocessResult<Option<HashSet<String>>> {
        let valid = !lang.is_empty()
            && lang
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PreprocessError::StopwordLoad {
                lang: lang.to_string(),
                message: "invalid language code".to_string(),
            });
        }

        let path = self.path_for(lang);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(Self::parse(&content)))
    }
}

/// Loader with nothing to load; every language has an empty list.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoStopwords;

impl StopwordLoader for NoStopwords {
    fn load(&self, _lang: &str) -> PreprocessResult<Option<HashSet<String>>> {
        Ok(None)
    }
}

type Slot = Arc<OnceCell<Arc<HashSet<String>>>>;

/// Run-scoped memo of stopword sets keyed by language code.
pub struct StopwordCache {
    loader: Arc<dyn StopwordLoader>,
    entries: Mutex<HashMap<String, Slot>>,
    loads: AtomicUsize,
}

impl std::fmt::Debug for StopwordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopwordCache")
            .field("languages", &self.len())
            .field("loads", &self.loads())
            .finish()
    }
}

impl StopwordCache {
    pub fn new(loader: Arc<dyn StopwordLoader>) -> Self {
        Self {
            loader,
            entries: Mutex::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Stopwords for `lang`, loading them on first request.
    pub fn get(&self, lang: &str) -> Arc<HashSet<String>> {
        let slot = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            entries.entry(lang.to_string()).or_default().clone()
        };
        // Map lock is already dropped; the slot serializes loads per language.
        slot.get_or_init(|| Arc::new(self.load(lang))).clone()
    }

    fn load(&self, lang: &str) -> HashSet<String> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        match self.loader.load(lang) {
            Ok(Some(words)) => {
                log::debug!("Loaded {} stopwords for '{}'", words.len(), lang);
                words
            }
            Ok(None) => {
                log::warn!("No stopword list for '{}'; using empty set", lang);
                HashSet::new()
            }
            Err(e) => {
                log::warn!("Failed to load stopwords for '{}': {}; using empty set", lang, e);
                HashSet::new()
            }
        }
    }

    /// Number of underlying loader calls so far.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Number of languages currently cached.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_cached(&self, lang: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(lang)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Drop every cached set. Called at run end to release memory.
    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// Stage removing each message's stopwords according to its language.
///
/// Messages without a language keep their tokens; messages without tokens
/// are left alone.
#[derive(Clone, Debug)]
pub struct StopwordsRemover {
    cache: Arc<StopwordCache>,
    parallel: bool,
}

impl StopwordsRemover {
    pub fn new(cache: Arc<StopwordCache>, parallel: bool) -> Self {
        Self { cache, parallel }
    }

    pub fn cache(&self) -> &Arc<StopwordCache> {
        &self.cache
    }
}

impl PipelineStage for StopwordsRemover {
    fn name(&self) -> &'static str {
        "stopwords"
    }

    fn run(&self, mut dialog: Dialog) -> PreprocessResult<Dialog> {
        let cache = &self.cache;
        for_each_message(&mut dialog, self.parallel, |msg| {
            if let (Some(lang), Some(tokens)) = (msg.lang.as_deref(), msg.tokens.as_mut()) {
                let stopwords = cache.get(lang);
                tokens.retain(|token| !stopwords.contains(token));
            }
        });
        Ok(dialog)
    }
}

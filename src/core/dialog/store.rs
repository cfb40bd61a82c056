//! Dialog Stores
//!
//! The document store holding dialogs is an external collaborator. This module
//! defines the boundary ([`DialogStore`]) plus two small implementations: an
//! in-memory store and a store backed by a single JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};
use super::models::{Dialog, Message};

/// Inclusive unix-time range. A bound of `0` means unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub to: i64,
}

impl DateRange {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    /// Range with neither bound set.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: i64) -> bool {
        (self.from == 0 || date >= self.from) && (self.to == 0 || date <= self.to)
    }
}

/// Read access to the external dialog store.
pub trait DialogStore: Send + Sync {
    /// All dialogs in store order, without their messages.
    fn list_dialogs(&self) -> StoreResult<Vec<Dialog>>;

    /// Messages of one dialog whose date falls inside `range`, oldest first.
    fn fetch_messages(&self, dialog_id: i64, range: &DateRange) -> StoreResult<Vec<Message>>;
}

/// Store holding fully populated dialogs in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDialogStore {
    dialogs: Vec<Dialog>,
}

impl MemoryDialogStore {
    pub fn new(dialogs: Vec<Dialog>) -> Self {
        Self { dialogs }
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}

impl DialogStore for MemoryDialogStore {
    fn list_dialogs(&self) -> StoreResult<Vec<Dialog>> {
        Ok(self
            .dialogs
            .iter()
            .map(|d| Dialog::new(d.id, d.username.clone()))
            .collect())
    }

    fn fetch_messages(&self, dialog_id: i64, range: &DateRange) -> StoreResult<Vec<Message>> {
        let dialog = self
            .dialogs
            .iter()
            .find(|d| d.id == dialog_id)
            .ok_or(StoreError::NotFound(dialog_id))?;

        Ok(dialog
            .messages
            .iter()
            .filter(|m| range.contains(m.date))
            .cloned()
            .collect())
    }
}

/// Store backed by a JSON file containing an array of dialogs with messages.
///
/// The file is read once at open time.
#[derive(Debug, Clone)]
pub struct JsonDialogStore {
    inner: MemoryDialogStore,
}

impl JsonDialogStore {
    pub fn open(path: &Path) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&content)?;
        log::info!(
            "Loaded {} dialogs from {}",
            store.inner.len(),
            path.display()
        );
        Ok(store)
    }

    pub fn from_json_str(content: &str) -> StoreResult<Self> {
        let dialogs: Vec<Dialog> = serde_json::from_str(content)?;
        Ok(Self {
            inner: MemoryDialogStore::new(dialogs),
        })
    }
}

impl DialogStore for JsonDialogStore {
    fn list_dialogs(&self) -> StoreResult<Vec<Dialog>> {
        self.inner.list_dialogs()
    }

    fn fetch_messages(&self, dialog_id: i64, range: &DateRange) -> StoreResult<Vec<Message>> {
        self.inner.fetch_messages(dialog_id, range)
    }
}

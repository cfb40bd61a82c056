//! Dialog Source
//!
//! Finite, forward-only sequence of dialogs taken from a [`DialogStore`].
//! Dialogs come out without messages; [`DialogSource::load_messages`] fills
//! them in on demand, applying the source's date range.

use super::error::StoreResult;
use super::models::Dialog;
use super::store::{DateRange, DialogStore};

/// Iterator over the dialogs of one run.
///
/// The store is queried once at construction. The sequence cannot be
/// restarted; build a new source for a new run.
#[derive(Debug)]
pub struct DialogSource {
    dialogs: std::vec::IntoIter<Dialog>,
    range: DateRange,
}

impl DialogSource {
    pub fn new(store: &dyn DialogStore, range: DateRange) -> StoreResult<Self> {
        let dialogs = store.list_dialogs()?;
        log::debug!(
            "Dialog source opened: {} dialogs, date range {}..{}",
            dialogs.len(),
            range.from,
            range.to
        );
        Ok(Self {
            dialogs: dialogs.into_iter(),
            range,
        })
    }

    pub fn date_range(&self) -> DateRange {
        self.range
    }

    /// Populate `dialog.messages` from the store, replacing whatever it held.
    pub fn load_messages(&self, dialog: &mut Dialog, store: &dyn DialogStore) -> StoreResult<()> {
        dialog.messages = store.fetch_messages(dialog.id, &self.range)?;
        Ok(())
    }
}

impl Iterator for DialogSource {
    type Item = Dialog;

    fn next(&mut self) -> Option<Dialog> {
        self.dialogs.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.dialogs.size_hint()
    }
}

//! Run Loop
//!
//! Pulls dialogs from a [`DialogSource`] one at a time, loads their messages,
//! runs them through the [`Pipeline`] and hands the result to a sink. The next
//! dialog is only fetched once the current one is fully processed.

use serde::{Deserialize, Serialize};

use super::error::PreprocessResult;
use super::pipeline::Pipeline;
use crate::core::dialog::{DateRange, Dialog, DialogSource, DialogStore};

/// What to do when a single dialog fails (message loading or a stage).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnDialogError {
    /// Log the failure and continue with the next dialog.
    #[default]
    Skip,
    /// Stop the run and return the error.
    Halt,
}

/// Run loop configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub on_dialog_error: OnDialogError,
}

/// Counters collected over one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub dialogs_processed: usize,
    pub dialogs_skipped: usize,
    pub messages: usize,
    pub tokens: usize,
}

/// One pass over every dialog in a store.
pub struct PreprocessRun<'a> {
    store: &'a dyn DialogStore,
    pipeline: &'a Pipeline,
    range: DateRange,
    config: RunConfig,
}

impl<'a> PreprocessRun<'a> {
    pub fn new(
        store: &'a dyn DialogStore,
        pipeline: &'a Pipeline,
        range: DateRange,
        config: RunConfig,
    ) -> Self {
        Self {
            store,
            pipeline,
            range,
            config,
        }
    }

    /// Process every dialog, passing each finished one to `sink`.
    ///
    /// Sink errors always stop the run. Pipeline resources are released when
    /// the run ends, successfully or not.
    pub fn execute<F>(&self, sink: F) -> PreprocessResult<RunStats>
    where
        F: FnMut(Dialog) -> PreprocessResult<()>,
    {
        let result = self.drive(sink);
        self.pipeline.release_resources();
        result
    }

    fn drive<F>(&self, mut sink: F) -> PreprocessResult<RunStats>
    where
        F: FnMut(Dialog) -> PreprocessResult<()>,
    {
        let mut source = DialogSource::new(self.store, self.range)?;
        let mut stats = RunStats::default();

        while let Some(mut dialog) = source.next() {
            let dialog_id = dialog.id;
            log::debug!("Processing dialog {} ({})", dialog_id, dialog.username);

            let processed = source
                .load_messages(&mut dialog, self.store)
                .map_err(Into::into)
                .and_then(|()| self.pipeline.run(dialog));

            match processed {
                Ok(dialog) => {
                    stats.dialogs_processed += 1;
                    stats.messages += dialog.messages.len();
                    stats.tokens += dialog.token_count();
                    sink(dialog)?;
                }
                Err(e) => match self.config.on_dialog_error {
                    OnDialogError::Skip => {
                        log::warn!("Skipping dialog {}: {}", dialog_id, e);
                        stats.dialogs_skipped += 1;
                    }
                    OnDialogError::Halt => {
                        log::error!("Dialog {} failed, halting run: {}", dialog_id, e);
                        return Err(e);
                    }
                },
            }
        }

        log::info!(
            "Run finished: {} dialogs processed, {} skipped, {} messages, {} tokens",
            stats.dialogs_processed,
            stats.dialogs_skipped,
            stats.messages,
            stats.tokens
        );
        Ok(stats)
    }
}

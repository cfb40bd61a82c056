//! Pipeline Stage Contract
//!
//! A stage is configured once and then applied to every dialog of a run.
//! Stages keep no per-dialog state; shared resources (stopword cache, language
//! detector) are held behind `Arc` and must be safe to use from several
//! threads at once.

use rayon::prelude::*;

use super::error::PreprocessResult;
use super::tokenizer::Tokenizer;
use crate::core::dialog::{Dialog, Message};

/// One configured transformation over a dialog.
pub trait PipelineStage: Send + Sync {
    /// Short stable name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Transform the dialog and hand it back.
    ///
    /// Message order must be preserved. An `Err` abandons the dialog; stages
    /// absorb per-message problems themselves.
    fn run(&self, dialog: Dialog) -> PreprocessResult<Dialog>;
}

/// Apply `f` to every message, on the rayon pool when `parallel` is set.
pub(crate) fn for_each_message<F>(dialog: &mut Dialog, parallel: bool, f: F)
where
    F: Fn(&mut Message) + Send + Sync,
{
    if parallel {
        dialog.messages.par_iter_mut().for_each(f);
    } else {
        dialog.messages.iter_mut().for_each(f);
    }
}

/// Stores `Tokenizer::tokenize(text)` on every message.
#[derive(Clone, Debug, Default)]
pub struct TokenizeStage {
    tokenizer: Tokenizer,
    parallel: bool,
}

impl TokenizeStage {
    pub fn new(tokenizer: Tokenizer, parallel: bool) -> Self {
        Self { tokenizer, parallel }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }
}

impl PipelineStage for TokenizeStage {
    fn name(&self) -> &'static str {
        "tokenize"
    }

    fn run(&self, mut dialog: Dialog) -> PreprocessResult<Dialog> {
        let tokenizer = &self.tokenizer;
        for_each_message(&mut dialog, self.parallel, |msg| {
            msg.tokens = Some(tokenizer.tokenize(&msg.text));
        });
        Ok(dialog)
    }
}

//! Language Identification
//!
//! The detector itself is an external collaborator behind [`LanguageDetector`].
//! The stage only feeds it one message at a time and stores the answer; a
//! missing detector or a failed detection leaves messages untagged instead of
//! failing the dialog.

use std::sync::Arc;

use super::config::LanguageConfig;
use super::error::PreprocessResult;
use super::stage::{for_each_message, PipelineStage};
use crate::core::dialog::{Dialog, Message};

/// Detects the language of a piece of text.
///
/// Confidence thresholds and short-text handling belong to the implementation.
/// `Ok(None)` means "unknown".
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> PreprocessResult<Option<String>>;
}

/// Stage tagging every message with its detected language.
#[derive(Clone)]
pub struct LanguageIdentifier {
    detector: Option<Arc<dyn LanguageDetector>>,
    config: LanguageConfig,
    parallel: bool,
}

impl std::fmt::Debug for LanguageIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageIdentifier")
            .field("detector", &self.detector.as_ref().map(|_| "<detector>"))
            .field("config", &self.config)
            .field("parallel", &self.parallel)
            .finish()
    }
}

impl LanguageIdentifier {
    pub fn new(
        detector: Option<Arc<dyn LanguageDetector>>,
        config: LanguageConfig,
        parallel: bool,
    ) -> Self {
        if detector.is_none() {
            log::warn!("No language detector available; messages will stay untagged");
        }
        Self {
            detector,
            config,
            parallel,
        }
    }

    /// Build from the outcome of loading a detector. A load failure is logged
    /// and treated as "no detector".
    pub fn from_load_result(
        loaded: PreprocessResult<Arc<dyn LanguageDetector>>,
        config: LanguageConfig,
        parallel: bool,
    ) -> Self {
        let detector = match loaded {
            Ok(detector) => Some(detector),
            Err(e) => {
                log::warn!("Language detector failed to load: {}", e);
                None
            }
        };
        Self::new(detector, config, parallel)
    }

    pub fn has_detector(&self) -> bool {
        self.detector.is_some()
    }

    fn detection_text(&self, msg: &Message) -> String {
        match &msg.tokens {
            Some(tokens) if self.config.prefer_tokens => tokens.join(" "),
            _ => msg.text.clone(),
        }
    }
}

impl PipelineStage for LanguageIdentifier {
    fn name(&self) -> &'static str {
        "language"
    }

    fn run(&self, mut dialog: Dialog) -> PreprocessResult<Dialog> {
        let Some(detector) = &self.detector else {
            return Ok(dialog);
        };

        let dialog_id = dialog.id;
        for_each_message(&mut dialog, self.parallel, |msg| {
            let text = self.detection_text(msg);
            if text.trim().is_empty() {
                msg.lang = None;
                return;
            }
            msg.lang = match detector.detect(&text) {
                Ok(lang) => lang,
                Err(e) => {
                    log::warn!(
                        "Dialog {} message {}: language detection failed: {}",
                        dialog_id,
                        msg.id,
                        e
                    );
                    None
                }
            };
        });
        Ok(dialog)
    }
}

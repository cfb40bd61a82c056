//! Pipeline Runner
//!
//! Threads one dialog through an ordered list of stages. Each stage receives
//! the dialog only after the previous stage has returned it, so no stage ever
//! observes partial output of another. The first stage error abandons the
//! dialog and is returned to the caller.

use std::sync::Arc;

use super::config::{PreprocessConfig, StageKind};
use super::error::PreprocessResult;
use super::language::{LanguageDetector, LanguageIdentifier};
use super::merger::MessageMerger;
use super::stage::{PipelineStage, TokenizeStage};
use super::stopwords::{StopwordCache, StopwordsRemover};
use super::tokenizer::Tokenizer;
use crate::core::dialog::Dialog;

/// Ordered, reusable set of stages plus the run-scoped resources they share.
pub struct Pipeline {
    stages: Vec<Box<dyn PipelineStage>>,
    stopwords: Option<Arc<StopwordCache>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .field("stopwords", &self.stopwords)
            .finish()
    }
}

impl Pipeline {
    /// Pipeline over explicit stages, without shared resources.
    pub fn new(stages: Vec<Box<dyn PipelineStage>>) -> Self {
        Self {
            stages,
            stopwords: None,
        }
    }

    /// Build the stages listed in `config.stages`, in that order.
    ///
    /// `detector` may be absent; the language stage then leaves messages
    /// untagged. `stopwords` is shared by every dialog and cleared by
    /// [`Pipeline::release_resources`].
    pub fn from_config(
        config: &PreprocessConfig,
        detector: Option<Arc<dyn LanguageDetector>>,
        stopwords: Arc<StopwordCache>,
    ) -> Self {
        let parallel = config.tokenizer.parallel;
        let stages = config
            .stages
            .iter()
            .map(|kind| -> Box<dyn PipelineStage> {
                match kind {
                    StageKind::Merge => Box::new(MessageMerger::new(config.merger.clone())),
                    StageKind::Tokenize => Box::new(TokenizeStage::new(
                        Tokenizer::new(config.tokenizer.clone()),
                        parallel,
                    )),
                    StageKind::Language => Box::new(LanguageIdentifier::new(
                        detector.clone(),
                        config.language.clone(),
                        parallel,
                    )),
                    StageKind::Stopwords => {
                        Box::new(StopwordsRemover::new(Arc::clone(&stopwords), parallel))
                    }
                }
            })
            .collect();

        let pipeline = Self {
            stages,
            stopwords: Some(stopwords),
        };
        log::info!("Pipeline configured: {}", pipeline.stage_names().join(" -> "));
        pipeline
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stopword_cache(&self) -> Option<&Arc<StopwordCache>> {
        self.stopwords.as_ref()
    }

    /// Apply every stage in order.
    pub fn run(&self, dialog: Dialog) -> PreprocessResult<Dialog> {
        let _dialog_span = tracing::info_span!("dialog", id = dialog.id).entered();

        let mut dialog = dialog;
        for stage in &self.stages {
            let _stage_span = tracing::debug_span!("stage", name = stage.name()).entered();
            dialog = stage.run(dialog).inspect_err(|e| {
                tracing::warn!(stage = stage.name(), error = %e, "stage failed");
            })?;
        }
        Ok(dialog)
    }

    /// Release run-scoped resources (currently the stopword cache).
    pub fn release_resources(&self) {
        if let Some(cache) = &self.stopwords {
            log::debug!("Releasing {} cached stopword lists", cache.len());
            cache.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dialog::Message;
    use crate::core::preprocess::error::PreprocessError;
    use crate::core::preprocess::stopwords::NoStopwords;
    use std::sync::Mutex;

    /// Records the order stages see the dialog in, and the message count
    /// each one observed.
    struct Probe {
        name: &'static str,
        log: Arc<Mutex<Vec<(&'static str, usize)>>>,
    }

    impl PipelineStage for Probe {
        fn name(&self) -> &'static str {
            self.name
        }

        fn run(&self, mut dialog: Dialog) -> PreprocessResult<Dialog> {
            self.log.lock().unwrap().push((self.name, dialog.messages.len()));
            dialog.messages.push(Message::new(0, 0, 0, self.name));
            Ok(dialog)
        }
    }

    struct Failing;

    impl PipelineStage for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn run(&self, _dialog: Dialog) -> PreprocessResult<Dialog> {
            Err(PreprocessError::Stage {
                stage: "failing",
                message: "boom".to_string(),
            })
        }
    }

    fn probe(name: &'static str, log: &Arc<Mutex<Vec<(&'static str, usize)>>>) -> Box<dyn PipelineStage> {
        Box::new(Probe {
            name,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn test_stages_run_in_order_on_complete_output() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::new(vec![probe("a", &log), probe("b", &log), probe("c", &log)]);

        let out = pipeline.run(Dialog::new(1, "chat")).unwrap();

        assert_eq!(*log.lock().unwrap(), vec![("a", 0), ("b", 1), ("c", 2)]);
        let texts: Vec<&str> = out.messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_failure_stops_later_stages() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::new(vec![probe("a", &log), Box::new(Failing), probe("c", &log)]);

        let err = pipeline.run(Dialog::new(1, "chat")).unwrap_err();
        assert!(matches!(err, PreprocessError::Stage { stage: "failing", .. }));
        assert_eq!(*log.lock().unwrap(), vec![("a", 0)]);
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let dialog = Dialog::new(3, "x").with_messages(vec![Message::new(1, 1, 1, "Hi")]);
        let pipeline = Pipeline::new(Vec::new());
        assert!(pipeline.is_empty());
        assert_eq!(pipeline.run(dialog.clone()).unwrap(), dialog);
    }

    #[test]
    fn test_from_config_follows_stage_list() {
        let cache = Arc::new(StopwordCache::new(Arc::new(NoStopwords)));
        let pipeline = Pipeline::from_config(&PreprocessConfig::default(), None, cache);
        assert_eq!(pipeline.stage_names(), vec!["merge", "tokenize", "language", "stopwords"]);

        let config = PreprocessConfig {
            stages: vec![StageKind::Tokenize],
            ..Default::default()
        };
        let cache = Arc::new(StopwordCache::new(Arc::new(NoStopwords)));
        let pipeline = Pipeline::from_config(&config, None, cache);
        assert_eq!(pipeline.len(), 1);
        assert_eq!(pipeline.stage_names(), vec!["tokenize"]);
    }

    #[test]
    fn test_release_clears_stopword_cache() {
        let cache = Arc::new(StopwordCache::new(Arc::new(NoStopwords)));
        let pipeline = Pipeline::from_config(&PreprocessConfig::default(), None, Arc::clone(&cache));
        cache.get("en");
        assert_eq!(cache.len(), 1);

        pipeline.release_resources();
        assert!(cache.is_empty());
    }
}

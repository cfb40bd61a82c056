//! Mock implementations for testing
//!
//! mockall mocks of the pipeline's external collaborators: the language
//! detector, the stopword loader and the dialog store.

#![allow(dead_code)]

use std::collections::HashSet;

use mockall::mock;

use crate::core::dialog::{DateRange, Dialog, DialogStore, Message, StoreResult};
use crate::core::preprocess::{LanguageDetector, PreprocessResult, StopwordLoader};

// ============================================================================
// Language Detector Mock
// ============================================================================

mock! {
    pub Detector {}

    impl LanguageDetector for Detector {
        fn detect(&self, text: &str) -> PreprocessResult<Option<String>>;
    }
}

/// Detector answering `lang` for every text.
pub fn detector_always(lang: &'static str) -> MockDetector {
    let mut detector = MockDetector::new();
    detector
        .expect_detect()
        .returning(move |_| Ok(Some(lang.to_string())));
    detector
}

// ============================================================================
// Stopword Loader Mock
// ============================================================================

mock! {
    pub Loader {}

    impl StopwordLoader for Loader {
        fn load(&self, lang: &str) -> PreprocessResult<Option<HashSet<String>>>;
    }
}

// ============================================================================
// Dialog Store Mock
// ============================================================================

mock! {
    pub Store {}

    impl DialogStore for Store {
        fn list_dialogs(&self) -> StoreResult<Vec<Dialog>>;
        fn fetch_messages(&self, dialog_id: i64, range: &DateRange) -> StoreResult<Vec<Message>>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preprocess::PreprocessError;

    #[test]
    fn test_detector_mock_script() {
        let mut detector = MockDetector::new();
        detector
            .expect_detect()
            .withf(|text| text.contains("привет"))
            .returning(|_| Ok(Some("ru".to_string())));
        detector
            .expect_detect()
            .returning(|_| Err(PreprocessError::Detection("unsure".to_string())));

        assert_eq!(detector.detect("привет мир").unwrap().as_deref(), Some("ru"));
        assert!(detector.detect("hello").is_err());
    }

    #[test]
    fn test_detector_always() {
        let detector = detector_always("en");
        assert_eq!(detector.detect("anything").unwrap().as_deref(), Some("en"));
    }
}

pub mod dialog;
pub mod logging;

// Dialog preprocessing: merge, tokenize, language tagging, stopwords
pub mod preprocess;

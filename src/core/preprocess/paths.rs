//! Resource Path Resolution
//!
//! Locates stopword lists at runtime, preferring a development tree
//! (`res/stopwords`, `data/stopwords`) over the user data directory.

use std::path::{Path, PathBuf};

/// Name of the stopword directory, both in source trees and in user data.
pub const STOPWORDS_DIR_NAME: &str = "stopwords";

/// Resolves the stopwords directory.
///
/// Checks locations in order:
/// 1. Development paths (`res/stopwords`, `data/stopwords`)
/// 2. User data directory (`<data_local_dir>/dialogprep/stopwords`)
///
/// Returns `None` if no candidate directory exists.
pub fn get_stopwords_dir() -> Option<PathBuf> {
    find_stopwords_dir(Path::new("."))
}

/// Same as [`get_stopwords_dir`] with development paths relative to `root`.
pub fn find_stopwords_dir(root: &Path) -> Option<PathBuf> {
    let dev_paths = [
        root.join("res").join(STOPWORDS_DIR_NAME),
        root.join("data").join(STOPWORDS_DIR_NAME),
    ];
    for path in dev_paths {
        if path.is_dir() {
            return Some(path);
        }
    }

    get_user_data_dir()
        .map(|dir| dir.join(STOPWORDS_DIR_NAME))
        .filter(|dir| dir.is_dir())
}

/// Gets the user data directory for dialogprep.
///
/// Returns `~/.local/share/dialogprep/` on Linux,
/// `%LOCALAPPDATA%\dialogprep\` on Windows.
pub fn get_user_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("dialogprep"))
}

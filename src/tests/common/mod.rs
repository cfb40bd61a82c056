//! Common Test Utilities
//!
//! Shared fixtures for building dialogs, stores and stopword directories.

pub mod fixtures;

pub use fixtures::*;

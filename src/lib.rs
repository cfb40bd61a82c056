/// dialogprep - Dialog Preprocessing Pipeline
///
/// Core library turning stored chat dialogs into merged, tokenized,
/// language-tagged and stopword-free message streams.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Property-based tests for dialogprep
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `tokenizer_props`: Tests for the message tokenizer
//!   - Token lengths stay within the configured bounds
//!   - Tokens carry no whitespace, ASCII punctuation or uppercase
//!   - Re-tokenizing normalized text is a no-op
//!   - Links, sizes and plain numbers never produce tokens
//!
//! - `merger_props`: Tests for message merging
//!   - Merging never creates text and never loses it
//!   - No two adjacent output messages could still merge
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable.

mod merger_props;
mod tokenizer_props;

//! Property-based tests for the Tokenizer
//!
//! Tests invariants:
//! - Token lengths stay within the configured bounds
//! - Tokens carry no whitespace, ASCII punctuation or uppercase
//! - Re-tokenizing normalized text is a no-op
//! - Links, sizes and plain numbers never produce tokens

use proptest::prelude::*;

use crate::core::preprocess::{Tokenizer, TokenizerConfig};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Chat-like ASCII text with punctuation and digits.
fn arb_chat_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?:/-]{0,200}"
}

/// Plain lowercase words joined by spaces.
fn arb_words() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{2,10}", 0..10).prop_map(|words| words.join(" "))
}

fn arb_link() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,10}".prop_map(|host| format!("https://{host}.com/page")),
        "[a-z]{1,10}".prop_map(|host| format!("www.{host}.org")),
        ("[a-z]{1,10}", "[a-z]{1,5}").prop_map(|(host, path)| format!("{host}.net/{path}")),
    ]
}

fn arb_numeric_noise() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0u32..1000, prop::sample::select(vec!["kb", "mb", "gb", "s", "h", "m", "pm", "k"]))
            .prop_map(|(n, unit)| format!("{n}{unit}")),
        (0u32..1000, 0u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn tokens_respect_length_bounds(text in arb_chat_text(), min in 1usize..5, extra in 0usize..20) {
        let config = TokenizerConfig {
            min_token_length: min,
            max_token_length: min + extra,
            ..Default::default()
        };
        for token in Tokenizer::new(config).tokenize(&text) {
            let len = token.chars().count();
            prop_assert!(len >= min && len <= min + extra, "token {:?} out of bounds", token);
        }
    }

    #[test]
    fn tokens_are_normalized(text in arb_chat_text()) {
        for token in Tokenizer::default().tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(|c| c.is_whitespace() || c.is_ascii_punctuation()));
            prop_assert!(!token.chars().any(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn tokenize_is_idempotent(text in arb_chat_text()) {
        let tokenizer = Tokenizer::default();
        let once = tokenizer.tokenize(&text);
        let twice = tokenizer.tokenize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn links_are_removed(words in arb_words(), link in arb_link()) {
        let tokenizer = Tokenizer::default();
        let with_link = format!("{words} {link}");
        prop_assert_eq!(tokenizer.tokenize(&with_link), tokenizer.tokenize(&words));
    }

    #[test]
    fn numeric_noise_is_removed(words in arb_words(), noise in arb_numeric_noise()) {
        let tokenizer = Tokenizer::default();
        let with_noise = format!("{noise} {words}");
        prop_assert_eq!(tokenizer.tokenize(&with_noise), tokenizer.tokenize(&words));
    }

    #[test]
    fn simple_mode_only_splits(text in arb_chat_text()) {
        let config = TokenizerConfig {
            advanced: false,
            ..Default::default()
        };
        let tokens = Tokenizer::new(config).tokenize(&text);
        prop_assert_eq!(tokens, text.split_whitespace().map(str::to_string).collect::<Vec<_>>());
    }
}

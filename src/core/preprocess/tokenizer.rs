//! Message Tokenizer
//!
//! Splits raw message text into normalized word tokens.
//!
//! Simple mode only splits on whitespace. Advanced mode additionally:
//! 1. Drops whitespace tokens shaped like whole web links
//! 2. Splits the rest on punctuation to expose compounds ("web-development")
//! 3. Normalizes each fragment (lowercase, character filter, repeat collapsing,
//!    numeric noise erasure)
//! 4. Keeps fragments that are non-empty, not links, not numbers and within
//!    the configured length range

use super::config::TokenizerConfig;
use super::patterns::{LINK_RE, NUMERIC_NOISE, PUNCT_RE, WHOLE_LINK_RE};
use crate::core::dialog::Token;

/// Highest code point kept by the character filter. Emoji and other
/// astral-plane symbols fall above it.
const MAX_ALLOWED_CHAR: char = '\u{1FFF}';

/// Text tokenizer. Cheap to clone; holds configuration only.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize text. Empty or unusable input yields an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        if !self.config.advanced {
            return Self::simple_tokens(text);
        }

        let mut tokens = Vec::new();
        for raw in text.split_whitespace() {
            if Self::is_whole_link(raw) {
                continue;
            }
            for fragment in PUNCT_RE.split(raw) {
                let normalized = Self::normalize_fragment(fragment);
                if self.accepts(&normalized) {
                    tokens.push(normalized);
                }
            }
        }
        tokens
    }

    /// Tokenize and rejoin with single spaces.
    pub fn normalize_to_text(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }

    /// Whitespace split with no cleanup.
    pub fn simple_tokens(text: &str) -> Vec<Token> {
        text.split_whitespace().map(str::to_string).collect()
    }

    /// Run the normalization chain over one fragment. The steps depend on
    /// each other's output and must stay in this order.
    pub fn normalize_fragment(fragment: &str) -> String {
        let lowered = fragment.to_lowercase();
        let filtered: String = lowered
            .chars()
            .filter(|&c| c <= MAX_ALLOWED_CHAR && !c.is_control())
            .collect();
        let collapsed = collapse_repeats(&filtered);
        if NUMERIC_NOISE.is_match(&collapsed) {
            return String::new();
        }
        collapsed
    }

    /// Whether the token looks like a web link (scheme/prefix marker or bare
    /// domain shape).
    pub fn is_link(token: &str) -> bool {
        LINK_RE.is_match(token)
    }

    /// Whether a whole whitespace token is a link, judged before compound
    /// splitting. Stricter than [`Tokenizer::is_link`]: the marker must lead
    /// the token, and a bare domain needs a path or a known top-level domain.
    pub fn is_whole_link(token: &str) -> bool {
        WHOLE_LINK_RE.is_match(token)
    }

    /// Whether the token parses as a number once punctuation is removed.
    /// A trailing `d` or `f` type suffix is accepted ("3d", "10f").
    pub fn is_number(token: &str) -> bool {
        let stripped = PUNCT_RE.replace_all(token, "");
        if !stripped.starts_with(|c: char| c.is_ascii_digit()) {
            return false;
        }
        let digits = stripped
            .strip_suffix(['d', 'D', 'f', 'F'])
            .unwrap_or(stripped.as_ref());
        digits.parse::<f64>().is_ok()
    }

    fn accepts(&self, token: &str) -> bool {
        !token.is_empty()
            && !Self::is_link(token)
            && !Self::is_number(token)
            && self.length_ok(token)
    }

    fn length_ok(&self, token: &str) -> bool {
        let len = token.chars().count();
        len >= self.config.min_token_length && len <= self.config.max_token_length
    }
}

/// Collapse character runs: a run of 3+ at the start becomes a single
/// character, any other run of 3+ becomes two.
fn collapse_repeats(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let mut out = String::with_capacity(token.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        let keep = if i == 0 && run >= 3 { 1 } else { run.min(2) };
        out.extend(std::iter::repeat(c).take(keep));
        i += run;
    }
    out
}

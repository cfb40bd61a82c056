//! Tokenizer Patterns
//!
//! Regular expressions shared by the tokenizer. All number-with-unit patterns
//! are anchored on both ends and run against lowercased fragments.

use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};

// ============================================================================
// PUNCTUATION
// ============================================================================

/// ASCII punctuation plus common Unicode quotes, dashes and marks.
pub const PUNCT: &str = r#"[[:punct:]–…‹›§«»¿¡≠´‘’“”⟨⟩°※©℗®℠™—]"#;

/// Single punctuation character, used both to split compounds and to strip
/// punctuation before the numeric check.
pub static PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(PUNCT).expect("Invalid punctuation regex"));

// ============================================================================
// NUMERIC NOISE
// ============================================================================

/// Data sizes: 2kb, 15mb, 3gbytes, 10мб
pub const DATA_SIZES: &str = r"^[0-9]+[kmgtpкмгтп]?[bб](it|yte|ит|айт)?s?$";

/// Seconds: 2s, 15sec, 100ms, 5ns
pub const SECONDS: &str = r"^[0-9]+[nmнм]?[sс](ec|ек)?(ond)?s?$";

/// Hours: 2h, 15hours, 3ч
pub const HOURS: &str = r"^[0-9]+[hч](our)?s?$";

/// Lengths: 2m, 15meters, 5km, 10cm
pub const METERS: &str = r"^[0-9]+[skmcdnкмдн]?[mм](eter)?s?$";

/// Clock time: 6pm, 2am
pub const CLOCK_TIME: &str = r"^[0-9]+[ap]m$";

/// Numbers with magnitude or ordinal suffix: 2k, 15ish, 3rd, 4th, 2kk
pub const NUMBER_SUFFIX: &str = r"^[0-9]+([kmкм]+|ish|th|nd|st|rd|g|x|ый|ой|ий)?[0-9]*$";

/// Hexadecimal literal with 0x prefix: 0xcafe1 (plain words like "abba" do not match)
pub const HEX: &str = r"^0+x[0-9a-f]+$";

/// Any fragment matching one of these is erased during normalization.
pub static NUMERIC_NOISE: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([
        DATA_SIZES,
        SECONDS,
        HOURS,
        METERS,
        NUMBER_SUFFIX,
        CLOCK_TIME,
        HEX,
    ])
    .expect("Invalid numeric noise regex")
});

// ============================================================================
// WEB LINKS
// ============================================================================

/// Scheme or prefix marker followed by at least one more character.
pub const LINK_SCHEME: &str =
    r"(?i)(http://|https://|ftp://|file://|mailto:|nfs://|irc://|ssh://|telnet://|www\.).";

/// Bare domain with optional path: youtube.com, youtube.com/watch?v=abc
pub const LINK_BARE_DOMAIN: &str = r"^[\w-]+(\.[\w-]+)+(/.*)?$";

pub static LINK_RE: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([LINK_SCHEME, LINK_BARE_DOMAIN])
        .expect("Invalid link regex")
});

// ============================================================================
// WHOLE-TOKEN LINKS
// ============================================================================
// Checked against a whitespace token before it is split on punctuation, so
// they must not fire on ordinary words glued by a period ("Done.See").

/// Scheme or `www.` marker at the token start, after optional punctuation.
pub const WHOLE_LINK_PREFIXED: &str =
    r"(?i)^\W*(http://|https://|ftp://|file://|mailto:|nfs://|irc://|ssh://|telnet://|www\.).";

/// Domain followed by a path: youtube.com/watch?v=abc
pub const WHOLE_LINK_WITH_PATH: &str = r"^\W*[\w-]+(\.[\w-]+)+/";

/// Bare domain ending in a common top-level domain: example.com, site.ru
pub const WHOLE_LINK_BARE_TLD: &str =
    r"(?i)^\W*[\w-]+(\.[\w-]+)*\.(com|org|net|edu|gov|info|io|me|co|tv|ly|fm|ru|ua|by|kz|de|uk|fr|eu|рф)\W*$";

pub static WHOLE_LINK_RE: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([WHOLE_LINK_PREFIXED, WHOLE_LINK_WITH_PATH, WHOLE_LINK_BARE_TLD])
        .expect("Invalid whole-token link regex")
});

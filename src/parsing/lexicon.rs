//! Fixed phrase and token matchers applied to message bodies.
//!
//! - apology phrases ("özür", "pardon", "affet", "kusura bakma")
//! - affection phrases and glyphs ("seni seviyorum", "canım", "<3", "❤️", ...)
//! - vocabulary tokens (maximal runs of word characters)
//! - emoji runs (maximal runs of code points in the emoji ranges)
//!
//! All regex matchers are compiled once and shared; they hold no mutable state.

use std::sync::LazyLock;

use regex::Regex;

/// "özür" must stand alone; the other phrases match anywhere.
const APOLOGY_PATTERN: &str = r"(?i)\bözür\b|pardon|affet|kusura bakma";

/// Word-like phrases need word boundaries; hearts and emoji match anywhere.
/// `(?i)` never folds dotted and dotless i into each other, so every i
/// position lists all four Turkish forms.
const AFFECTION_PATTERN: &str =
    r"(?i)\b(?:sen[iıIİ] sev[iıIİ]yorum|can[ıiIİ]m|aşk[ıiIİ]m|kalp|love)\b|<3|❤️|😘|😍";

const WORD_PATTERN: &str = r"\w+";

/// Code point ranges treated as emoji. Adjacent code points from any of
/// these ranges form a single run.
pub const EMOJI_RANGES: &[(char, char)] = &[
    ('\u{1F600}', '\u{1F64F}'),
    ('\u{1F300}', '\u{1F5FF}'),
    ('\u{1F680}', '\u{1F6FF}'),
    ('\u{1F700}', '\u{1F77F}'),
    ('\u{1F780}', '\u{1F7FF}'),
    ('\u{1F800}', '\u{1F8FF}'),
    ('\u{1F900}', '\u{1F9FF}'),
    ('\u{1FA00}', '\u{1FA6F}'),
    ('\u{1FA70}', '\u{1FAFF}'),
    ('\u{2702}', '\u{27B0}'),
    ('\u{24C2}', '\u{1F251}'),
];

static APOLOGY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(APOLOGY_PATTERN).expect("apology pattern compiles"));

static AFFECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AFFECTION_PATTERN).expect("affection pattern compiles"));

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WORD_PATTERN).expect("word pattern compiles"));

/// Returns `true` if the body contains an apology.
///
/// ```rust
/// use chatpulse::parsing::lexicon::is_apology;
///
/// assert!(is_apology("ÖZÜR dilerim"));
/// assert!(is_apology("kusura bakma"));
/// assert!(!is_apology("özürlü"));
/// ```
pub fn is_apology(body: &str) -> bool {
    APOLOGY_RE.is_match(body)
}

/// Returns `true` if the body contains an affection phrase or glyph.
///
/// ```rust
/// use chatpulse::parsing::lexicon::is_affection;
///
/// assert!(is_affection("Seni Seviyorum"));
/// assert!(is_affection("iyi geceler <3"));
/// assert!(!is_affection("kalpten"));
/// ```
pub fn is_affection(body: &str) -> bool {
    AFFECTION_RE.is_match(body)
}

/// Iterates over the word tokens of an already-lowercased body.
pub fn word_tokens(lowercased: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(lowercased).map(|m| m.as_str())
}

/// Iterates over the emoji runs of a body.
///
/// ```rust
/// use chatpulse::parsing::lexicon::emoji_runs;
///
/// let runs: Vec<&str> = emoji_runs("harika 😍😍 olmuş 🎉").collect();
/// assert_eq!(runs, vec!["😍😍", "🎉"]);
/// ```
pub fn emoji_runs(body: &str) -> impl Iterator<Item = &str> {
    body.split(|c: char| !is_emoji_char(c))
        .filter(|run| !run.is_empty())
}

/// Returns `true` if `c` falls in one of the [`EMOJI_RANGES`].
pub fn is_emoji_char(c: char) -> bool {
    EMOJI_RANGES.iter().any(|(lo, hi)| (*lo..=*hi).contains(&c))
}

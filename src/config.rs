//! Configuration types for analysis and storage.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`AnalysisConfig`] - thresholds and ranking sizes for the aggregator
//! - [`Labels`] - weekday and month names used as report keys
//! - [`StoreConfig`] - where the directory-backed store keeps transcripts
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::{AnalysisConfig, Labels};
//!
//! let config = AnalysisConfig::new()
//!     .with_labels(Labels::english())
//!     .with_top_words(20);
//!
//! assert_eq!(config.top_words, 20);
//! assert_eq!(config.labels.weekdays[0], "Monday");
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Silence, in seconds, that must be strictly exceeded before a message
/// counts as starting a new conversation.
pub const DEFAULT_CONVERSATION_GAP_SECS: i64 = 10_800;

/// Number of entries kept in `common_words`.
pub const DEFAULT_TOP_WORDS: usize = 15;

/// Number of entries kept in `emoji_counts`.
pub const DEFAULT_TOP_EMOJIS: usize = 10;

/// Number of entries kept in `top_active_days`.
pub const DEFAULT_TOP_DAYS: usize = 10;

/// Shortest token, in characters, that is counted as a word.
pub const DEFAULT_MIN_WORD_CHARS: usize = 4;

/// Filler words dropped from vocabulary counts.
pub const DEFAULT_STOP_WORDS: &[&str] = &["evet", "hayır", "tamam"];

/// Weekday and month names used as keys in the report.
///
/// Weekdays start at Monday. Months start at January.
///
/// ```rust
/// use chatpulse::config::Labels;
///
/// let labels = Labels::turkish();
/// assert_eq!(labels.weekday(0), "Pazartesi");
/// assert_eq!(labels.month(12), Some("Aralık"));
/// assert_eq!(labels.month(13), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    /// Monday through Sunday.
    pub weekdays: [String; 7],

    /// January through December.
    pub months: [String; 12],
}

impl Labels {
    /// Turkish day and month names (default).
    pub fn turkish() -> Self {
        Self::from_static(
            [
                "Pazartesi",
                "Salı",
                "Çarşamba",
                "Perşembe",
                "Cuma",
                "Cumartesi",
                "Pazar",
            ],
            [
                "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül",
                "Ekim", "Kasım", "Aralık",
            ],
        )
    }

    /// English day and month names.
    pub fn english() -> Self {
        Self::from_static(
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
            ],
            [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
        )
    }

    fn from_static(weekdays: [&str; 7], months: [&str; 12]) -> Self {
        Self {
            weekdays: weekdays.map(String::from),
            months: months.map(String::from),
        }
    }

    /// Name of the weekday at `index` (Monday = 0).
    ///
    /// Indices past Sunday wrap around.
    pub fn weekday(&self, index: usize) -> &str {
        &self.weekdays[index % 7]
    }

    /// Name of the 1-indexed `month`, or `None` outside 1-12.
    pub fn month(&self, month: u32) -> Option<&str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        self.months.get(index).map(String::as_str)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::turkish()
    }
}

/// Configuration for the statistics aggregator.
///
/// The defaults reproduce the reference report: a 3 hour idle gap, top 15
/// words, top 10 emoji runs and top 10 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Idle gap in seconds that must be exceeded to count a conversation
    /// start (default: 10800)
    pub conversation_gap_secs: i64,

    /// Size of `common_words` (default: 15)
    pub top_words: usize,

    /// Size of `emoji_counts` (default: 10)
    pub top_emojis: usize,

    /// Size of `top_active_days` (default: 10)
    pub top_days: usize,

    /// Minimum token length in characters (default: 4)
    pub min_word_chars: usize,

    /// Lowercase tokens never counted as words
    pub stop_words: Vec<String>,

    /// Weekday and month names (default: Turkish)
    pub labels: Labels,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            conversation_gap_secs: DEFAULT_CONVERSATION_GAP_SECS,
            top_words: DEFAULT_TOP_WORDS,
            top_emojis: DEFAULT_TOP_EMOJIS,
            top_days: DEFAULT_TOP_DAYS,
            min_word_chars: DEFAULT_MIN_WORD_CHARS,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            labels: Labels::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversation gap in seconds.
    #[must_use]
    pub fn with_conversation_gap_secs(mut self, secs: i64) -> Self {
        self.conversation_gap_secs = secs;
        self
    }

    /// Sets how many words are reported.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets how many emoji runs are reported.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets how many days are reported.
    #[must_use]
    pub fn with_top_days(mut self, n: usize) -> Self {
        self.top_days = n;
        self
    }

    /// Sets the minimum word length in characters.
    #[must_use]
    pub fn with_min_word_chars(mut self, n: usize) -> Self {
        self.min_word_chars = n;
        self
    }

    /// Replaces the stop-word list.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the weekday and month names.
    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Returns `true` if `token` is on the stop list.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.iter().any(|w| w == token)
    }
}

/// Configuration for the directory-backed transcript store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding uploaded transcripts (default: `uploads`)
    pub root: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("uploads"),
        }
    }
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store directory.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_config_default() {
        let config = AnalysisConfig::default();
        assert_eq!(config.conversation_gap_secs, 10_800);
        assert_eq!(config.top_words, 15);
        assert_eq!(config.top_emojis, 10);
        assert_eq!(config.top_days, 10);
        assert_eq!(config.min_word_chars, 4);
        assert!(config.is_stop_word("evet"));
        assert!(config.is_stop_word("hayır"));
        assert!(!config.is_stop_word("merhaba"));
    }

    #[test]
    fn test_analysis_config_builder() {
        let config = AnalysisConfig::new()
            .with_conversation_gap_secs(60)
            .with_top_words(3)
            .with_stop_words(["hello"]);

        assert_eq!(config.conversation_gap_secs, 60);
        assert_eq!(config.top_words, 3);
        assert!(config.is_stop_word("hello"));
        assert!(!config.is_stop_word("evet"));
    }

    #[test]
    fn test_labels_turkish() {
        let labels = Labels::turkish();
        assert_eq!(labels.weekday(0), "Pazartesi");
        assert_eq!(labels.weekday(6), "Pazar");
        assert_eq!(labels.month(1), Some("Ocak"));
        assert_eq!(labels.month(8), Some("Ağustos"));
    }

    #[test]
    fn test_labels_month_out_of_range() {
        let labels = Labels::english();
        assert_eq!(labels.month(0), None);
        assert_eq!(labels.month(13), None);
        assert_eq!(labels.month(12), Some("December"));
    }

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.root, PathBuf::from("uploads"));
        let config = StoreConfig::new().with_root("/tmp/x");
        assert_eq!(config.root, PathBuf::from("/tmp/x"));
    }
}

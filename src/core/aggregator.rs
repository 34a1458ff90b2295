//! Statistics aggregation over a transcript.
//!
//! [`StatsAggregator`] folds lines, in file order, into every counter the
//! [`Report`] needs. It runs a single pass but keeps two independent
//! "previous message" trackers:
//!
//! - the **reply tracker** remembers the last record's time and author. A
//!   record from a different author adds a latency sample to the new author.
//! - the **activity tracker** remembers the last record's time. A record
//!   arriving after more than the configured idle gap counts as a
//!   conversation start for its author.
//!
//! Unrecognized lines touch neither tracker.
//!
//! # Example
//!
//! ```rust
//! use chatpulse::core::StatsAggregator;
//!
//! let mut aggregator = StatsAggregator::default();
//! aggregator.push_line("01.01.2024, 10:00 - Alice: merhaba");
//! aggregator.push_line("01.01.2024, 10:05 - Bob: selam, özür dilerim");
//!
//! assert_eq!(aggregator.counters().latencies.for_author("Bob"), &[300]);
//!
//! let report = aggregator.finish();
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.hourly_activity["10:00"], 2);
//! ```

use tracing::debug;

use super::counters::{AuthorCounters, LastSeen, TimeBuckets, VocabularyCounters};
use super::report::{Leader, Report, SlowestResponder};
use crate::Record;
use crate::config::AnalysisConfig;
use crate::parsing::{Classification, inspect_line};

/// Accumulates statistics for one transcript.
///
/// Construct a fresh aggregator for every transcript; nothing is shared
/// between instances.
#[derive(Debug, Clone)]
pub struct StatsAggregator {
    config: AnalysisConfig,
    authors: AuthorCounters,
    buckets: TimeBuckets,
    vocabulary: VocabularyCounters,
    total_messages: u64,
    lines_seen: u64,
    invalid_timestamps: u64,
    last_reply: Option<LastSeen>,
    last_activity: Option<chrono::NaiveDateTime>,
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl StatsAggregator {
    /// Creates an aggregator with the given configuration.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            authors: AuthorCounters::default(),
            buckets: TimeBuckets::default(),
            vocabulary: VocabularyCounters::default(),
            total_messages: 0,
            lines_seen: 0,
            invalid_timestamps: 0,
            last_reply: None,
            last_activity: None,
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classifies one physical line and counts it if it is a message.
    pub fn push_line(&mut self, line: &str) {
        self.lines_seen += 1;
        match inspect_line(line) {
            Classification::Record(record) => self.push_record(&record),
            Classification::InvalidTimestamp => self.invalid_timestamps += 1,
            Classification::NoMatch => {}
        }
    }

    /// Counts every line of an iterator.
    pub fn extend_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
    }

    /// Counts a record that was already classified.
    pub fn push_record(&mut self, record: &Record) {
        self.total_messages += 1;
        self.authors.record_message(record);
        self.track_reply(record);
        self.track_activity(record);
        self.buckets.record(record, &self.config.labels);
        self.vocabulary.record(&record.body, &self.config);
    }

    fn track_reply(&mut self, record: &Record) {
        match &mut self.last_reply {
            Some(last) => {
                if last.author != record.author {
                    let gap = record.seconds_since(last.timestamp);
                    self.authors.latencies.push(&record.author, gap);
                    last.author.clone_from(&record.author);
                }
                last.timestamp = record.timestamp;
            }
            None => {
                self.last_reply = Some(LastSeen {
                    timestamp: record.timestamp,
                    author: record.author.clone(),
                });
            }
        }
    }

    fn track_activity(&mut self, record: &Record) {
        if let Some(previous) = self.last_activity {
            if record.seconds_since(previous) > self.config.conversation_gap_secs {
                self.authors.conversation_starts.add(&record.author);
            }
        }
        self.last_activity = Some(record.timestamp);
    }

    /// Per-author counters gathered so far.
    pub fn counters(&self) -> &AuthorCounters {
        &self.authors
    }

    /// Time buckets gathered so far.
    pub fn buckets(&self) -> &TimeBuckets {
        &self.buckets
    }

    /// Physical lines pushed through [`push_line`](Self::push_line).
    pub fn lines_seen(&self) -> u64 {
        self.lines_seen
    }

    /// Records counted so far.
    pub fn records_seen(&self) -> u64 {
        self.total_messages
    }

    /// Lines that looked like messages but had an impossible timestamp.
    pub fn invalid_timestamps(&self) -> u64 {
        self.invalid_timestamps
    }

    /// Builds the report from the final counter state.
    pub fn finish(self) -> Report {
        debug!(
            lines = self.lines_seen,
            records = self.total_messages,
            invalid_timestamps = self.invalid_timestamps,
            authors = self.authors.messages.len(),
            apologies = self.authors.apologies.total(),
            affection = self.authors.affection.total(),
            word_tokens = self.vocabulary.words.total(),
            "transcript aggregated"
        );

        let labels = &self.config.labels;
        let avg_response = self.authors.latencies.averages();

        Report {
            total_messages: self.total_messages,
            most_active: Leader::from_ranking(self.authors.messages.leader()),
            most_apology: Leader::from_ranking(self.authors.apologies.leader()),
            most_love: Leader::from_ranking(self.authors.affection.leader()),
            slowest: SlowestResponder::from_averages(&avg_response),
            hourly_activity: self.buckets.hourly(),
            weekday_activity: self.buckets.weekly(labels),
            top_active_days: self.buckets.dates.top(self.config.top_days),
            common_words: self.vocabulary.words.top(self.config.top_words),
            emoji_counts: self.vocabulary.emojis.top(self.config.top_emojis),
            month_activity: self.buckets.months.into_map(),
            user_msg_count: self.authors.messages.into_map(),
            user_apology_count: self.authors.apologies.into_map(),
            user_love_count: self.authors.affection.into_map(),
            conversation_starters: self.authors.conversation_starts.into_map(),
            avg_response,
        }
    }
}

/// Analyzes a sequence of lines with the default configuration.
///
/// ```rust
/// let report = chatpulse::analyze_lines([
///     "01.01.2024, 10:00 - Alice: merhaba",
///     "01.01.2024, 10:05 - Bob: selam, özür dilerim",
/// ]);
/// assert_eq!(report.user_apology_count["Bob"], 1);
/// ```
pub fn analyze_lines<I, S>(lines: I) -> Report
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    analyze_lines_with(lines, &AnalysisConfig::default())
}

/// Analyzes a sequence of lines with a custom configuration.
pub fn analyze_lines_with<I, S>(lines: I, config: &AnalysisConfig) -> Report
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = StatsAggregator::new(config.clone());
    aggregator.extend_lines(lines);
    aggregator.finish()
}

/// Analyzes a whole transcript held in memory.
///
/// A leading byte-order mark is ignored. Lines may end in `\n`, `\r\n` or a
/// lone `\r`.
pub fn analyze_str(content: &str) -> Report {
    analyze_str_with(content, &AnalysisConfig::default())
}

/// Analyzes a whole transcript held in memory with a custom configuration.
pub fn analyze_str_with(content: &str, config: &AnalysisConfig) -> Report {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    analyze_lines_with(transcript_lines(content), config)
}

/// Splits on `\n`, `\r\n` and lone `\r`. A trailing terminator does not
/// produce an empty last line.
fn transcript_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_terminator('\n').flat_map(|line| {
        let line = line.strip_suffix('\r').unwrap_or(line);
        line.split('\r')
    })
}

//! Counters folded by the aggregator.
//!
//! Every open key space (authors, dates, words, emoji runs) is an
//! insertion-ordered [`FrequencyTable`], so rankings break ties by first
//! appearance. Fixed key spaces (hours, weekdays) are plain arrays.

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use crate::Record;
use crate::config::{AnalysisConfig, Labels};
use crate::parsing::lexicon;

/// Insertion-ordered counter over string keys.
///
/// ```rust
/// use chatpulse::core::counters::FrequencyTable;
///
/// let mut table = FrequencyTable::new();
/// table.add("b");
/// table.add("a");
/// table.add("a");
/// table.add("c");
///
/// assert_eq!(table.get("a"), 2);
/// assert_eq!(table.leader(), Some(("a", 2)));
///
/// let top: Vec<_> = table.top(2).into_iter().collect();
/// assert_eq!(top, vec![("a".to_string(), 2), ("b".to_string(), 1)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments `key` by one.
    pub fn add(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
        } else {
            self.counts.insert(key.to_string(), 1);
        }
    }

    /// Count for `key`, zero if never seen.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Key with the highest count. The earliest inserted key wins a tie.
    pub fn leader(&self) -> Option<(&str, u64)> {
        self.iter().fold(None, |best, (key, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((key, count)),
        })
    }

    /// The `n` highest counts, ranked. Ties keep insertion order.
    pub fn top(&self, n: usize) -> IndexMap<String, u64> {
        let mut ranked: Vec<(&String, &u64)> = self.counts.iter().collect();
        // stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }

    /// Consumes the table, keeping insertion order.
    pub fn into_map(self) -> IndexMap<String, u64> {
        self.counts
    }
}

/// Response-latency samples per responder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencySamples {
    samples: IndexMap<String, Vec<i64>>,
}

impl LatencySamples {
    /// Records a `seconds` gap for `author`.
    pub fn push(&mut self, author: &str, seconds: i64) {
        if let Some(list) = self.samples.get_mut(author) {
            list.push(seconds);
        } else {
            self.samples.insert(author.to_string(), vec![seconds]);
        }
    }

    /// Samples for `author`, empty if none.
    pub fn for_author(&self, author: &str) -> &[i64] {
        self.samples
            .get(author)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of samples across authors.
    pub fn len(&self) -> usize {
        self.samples.values().map(Vec::len).sum()
    }

    /// Returns `true` if no sample was recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean latency per author, in order of first sample.
    pub fn averages(&self) -> IndexMap<String, f64> {
        self.samples
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(author, list)| {
                let sum: i64 = list.iter().sum();
                (author.clone(), sum as f64 / list.len() as f64)
            })
            .collect()
    }
}

/// Per-author counters.
///
/// Each metric keeps its own key order: an author enters `apologies` on
/// their first apology, not on their first message. That order is what
/// breaks ties when a winner is picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthorCounters {
    /// Messages per author.
    pub messages: FrequencyTable,
    /// Messages containing an apology.
    pub apologies: FrequencyTable,
    /// Messages containing an affection phrase or glyph.
    pub affection: FrequencyTable,
    /// Seconds waited before answering someone else.
    pub latencies: LatencySamples,
    /// Messages sent after a long silence.
    pub conversation_starts: FrequencyTable,
}

impl AuthorCounters {
    /// Counts the message and its phrase hits.
    pub fn record_message(&mut self, record: &Record) {
        self.messages.add(&record.author);
        if lexicon::is_apology(&record.body) {
            self.apologies.add(&record.author);
        }
        if lexicon::is_affection(&record.body) {
            self.affection.add(&record.author);
        }
    }
}

/// Activity per hour, weekday, calendar date and month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeBuckets {
    /// Index 0 is midnight.
    pub hours: [u64; 24],
    /// Index 0 is Monday.
    pub weekdays: [u64; 7],
    /// Keyed `DD.MM.YYYY`, in order of first appearance.
    pub dates: FrequencyTable,
    /// Keyed by month label, in order of first appearance.
    pub months: FrequencyTable,
}

impl TimeBuckets {
    /// Counts one record in every bucket.
    pub fn record(&mut self, record: &Record, labels: &Labels) {
        self.hours[record.hour() as usize % 24] += 1;
        self.weekdays[record.weekday_index()] += 1;
        self.dates.add(&record.date_key());
        if let Some(month) = labels.month(record.month()) {
            self.months.add(month);
        }
    }

    /// Hour buckets keyed `"HH:00"`, all 24 present.
    pub fn hourly(&self) -> IndexMap<String, u64> {
        self.hours
            .iter()
            .enumerate()
            .map(|(hour, count)| (format!("{hour:02}:00"), *count))
            .collect()
    }

    /// Weekday buckets keyed by label, all 7 present, Monday first.
    pub fn weekly(&self, labels: &Labels) -> IndexMap<String, u64> {
        self.weekdays
            .iter()
            .enumerate()
            .map(|(index, count)| (labels.weekday(index).to_string(), *count))
            .collect()
    }
}

/// Word and emoji frequencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularyCounters {
    /// Lowercased tokens that passed the length and stop-word filters.
    pub words: FrequencyTable,
    /// Maximal emoji runs, as written.
    pub emojis: FrequencyTable,
}

impl VocabularyCounters {
    /// Counts the words and emoji runs in `body`.
    pub fn record(&mut self, body: &str, config: &AnalysisConfig) {
        let lowered = body.to_lowercase();
        for token in lexicon::word_tokens(&lowered) {
            if token.chars().count() >= config.min_word_chars && !config.is_stop_word(token) {
                self.words.add(token);
            }
        }
        for run in lexicon::emoji_runs(body) {
            self.emojis.add(run);
        }
    }
}

/// Last record seen by one of the "previous message" trackers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LastSeen {
    pub timestamp: NaiveDateTime,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .and_then(|date| date.and_hms_opt(h, m, 0))
            .unwrap()
    }

    #[test]
    fn test_frequency_table_leader_tie_keeps_first() {
        let mut table = FrequencyTable::new();
        table.add("Bob");
        table.add("Alice");
        table.add("Alice");
        table.add("Bob");
        assert_eq!(table.leader(), Some(("Bob", 2)));
    }

    #[test]
    fn test_frequency_table_empty() {
        let table = FrequencyTable::new();
        assert!(table.is_empty());
        assert_eq!(table.leader(), None);
        assert!(table.top(5).is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_frequency_table_top_truncates_and_ranks() {
        let mut table = FrequencyTable::new();
        for (key, times) in [("x", 1), ("y", 3), ("z", 2), ("w", 3)] {
            for _ in 0..times {
                table.add(key);
            }
        }
        let top = table.top(3);
        let keys: Vec<&str> = top.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["y", "w", "z"]);
    }

    #[test]
    fn test_latency_averages() {
        let mut samples = LatencySamples::default();
        samples.push("Bob", 300);
        samples.push("Alice", 60);
        samples.push("Bob", 100);
        let averages = samples.averages();
        assert_eq!(averages.get("Bob"), Some(&200.0));
        assert_eq!(averages.get("Alice"), Some(&60.0));
        assert_eq!(averages.keys().next().map(String::as_str), Some("Bob"));
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.for_author("Carol"), &[] as &[i64]);
    }

    #[test]
    fn test_author_counters_hits() {
        let mut counters = AuthorCounters::default();
        counters.record_message(&Record::new(at(1, 10, 0), "Ali", "pardon pardon özür"));
        counters.record_message(&Record::new(at(1, 10, 1), "Ali", "canım <3"));
        counters.record_message(&Record::new(at(1, 10, 2), "Veli", "selam"));

        assert_eq!(counters.messages.get("Ali"), 2);
        assert_eq!(counters.apologies.get("Ali"), 1);
        assert_eq!(counters.affection.get("Ali"), 1);
        assert_eq!(counters.messages.total(), 3);
        assert!(counters.apologies.get("Veli") == 0);
        assert_eq!(counters.apologies.len(), 1);
    }

    #[test]
    fn test_time_buckets() {
        let labels = Labels::turkish();
        let mut buckets = TimeBuckets::default();
        buckets.record(&Record::new(at(1, 10, 0), "A", ""), &labels);
        buckets.record(&Record::new(at(2, 23, 59), "A", ""), &labels);

        assert_eq!(buckets.hours[10], 1);
        assert_eq!(buckets.hours[23], 1);
        assert_eq!(buckets.weekdays[0], 1);
        assert_eq!(buckets.weekdays[1], 1);
        assert_eq!(buckets.dates.get("01.01.2024"), 1);
        assert_eq!(buckets.months.get("Ocak"), 2);

        let hourly = buckets.hourly();
        assert_eq!(hourly.len(), 24);
        assert_eq!(hourly.get("10:00"), Some(&1));
        assert_eq!(hourly.keys().next().map(String::as_str), Some("00:00"));

        let weekly = buckets.weekly(&labels);
        assert_eq!(weekly.len(), 7);
        assert_eq!(weekly.get("Salı"), Some(&1));
    }

    #[test]
    fn test_vocabulary_filters() {
        let config = AnalysisConfig::default();
        let mut vocab = VocabularyCounters::default();
        vocab.record("Evet TAMAM merhaba Merhaba ben bugün 😂😂", &config);

        assert_eq!(vocab.words.get("merhaba"), 2);
        assert_eq!(vocab.words.get("evet"), 0);
        assert_eq!(vocab.words.get("tamam"), 0);
        assert_eq!(vocab.words.get("ben"), 0);
        assert_eq!(vocab.words.get("bugün"), 1);
        assert_eq!(vocab.emojis.get("😂😂"), 1);
    }

    #[test]
    fn test_vocabulary_length_counts_chars_not_bytes() {
        let config = AnalysisConfig::default();
        let mut vocab = VocabularyCounters::default();
        // three characters, six bytes
        vocab.record("şöç", &config);
        assert!(vocab.words.is_empty());
    }
}

//! The finished analysis of one transcript.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Author with the highest count for one metric.
///
/// `author` is `None` and `count` zero when nobody scored. Serialized as
/// `{"user": ..., "count": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    #[serde(rename = "user")]
    pub author: Option<String>,
    pub count: u64,
}

impl Leader {
    /// Creates a leader entry from a ranking result.
    pub fn from_ranking(leader: Option<(&str, u64)>) -> Self {
        match leader {
            Some((author, count)) => Self {
                author: Some(author.to_string()),
                count,
            },
            None => Self::default(),
        }
    }
}

/// Author with the highest average response latency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlowestResponder {
    #[serde(rename = "user")]
    pub author: Option<String>,
    pub avg_seconds: f64,
}

impl SlowestResponder {
    /// Picks the author with the largest average. The first author in
    /// `averages` wins a tie.
    pub fn from_averages(averages: &IndexMap<String, f64>) -> Self {
        averages
            .iter()
            .fold(None::<(&String, f64)>, |best, (author, avg)| match best {
                Some((_, best_avg)) if best_avg >= *avg => best,
                _ => Some((author, *avg)),
            })
            .map(|(author, avg_seconds)| Self {
                author: Some(author.clone()),
                avg_seconds,
            })
            .unwrap_or_default()
    }
}

/// Statistics for one transcript.
///
/// Built once by [`StatsAggregator::finish`](crate::core::StatsAggregator::finish)
/// and never modified afterwards. Every map serializes in a meaningful
/// order: author maps in order of first appearance, `hourly_activity` from
/// `00:00`, `weekday_activity` from Monday, and the ranked maps
/// (`top_active_days`, `common_words`, `emoji_counts`) from the highest
/// count down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total_messages: u64,
    pub most_active: Leader,
    pub most_apology: Leader,
    pub most_love: Leader,
    pub slowest: SlowestResponder,
    pub user_msg_count: IndexMap<String, u64>,
    pub user_apology_count: IndexMap<String, u64>,
    pub user_love_count: IndexMap<String, u64>,
    pub avg_response: IndexMap<String, f64>,
    /// Always 24 keys, `"00:00"` to `"23:00"`.
    pub hourly_activity: IndexMap<String, u64>,
    /// Always 7 keys.
    pub weekday_activity: IndexMap<String, u64>,
    /// Only months that have at least one message.
    pub month_activity: IndexMap<String, u64>,
    pub top_active_days: IndexMap<String, u64>,
    pub common_words: IndexMap<String, u64>,
    pub emoji_counts: IndexMap<String, u64>,
    pub conversation_starters: IndexMap<String, u64>,
}

impl Report {
    /// Returns `true` if no message was recognized.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }

    /// Number of distinct authors.
    pub fn participant_count(&self) -> usize {
        self.user_msg_count.len()
    }

    /// Messages sent by `author`.
    pub fn messages_by(&self, author: &str) -> u64 {
        self.user_msg_count.get(author).copied().unwrap_or(0)
    }
}

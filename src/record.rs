//! A single recognized transcript line.
//!
//! [`Record`] is what the line classifier hands to the statistics
//! aggregator. Every record comes from exactly one physical line of the
//! transcript, and a line yields at most one record.
//!
//! # Example
//!
//! ```
//! use chatpulse::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
//!     .and_then(|d| d.and_hms_opt(10, 0, 0))
//!     .unwrap();
//! let record = Record::new(ts, "Alice", "merhaba");
//!
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.body(), "merhaba");
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One chat message recognized from a transcript line.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Minute resolution, no timezone |
/// | `author` | `String` | Display name exactly as exported |
/// | `body` | `String` | Everything after the first `": "` |
///
/// Author names are opaque: `"Alice"`, `"alice"` and `"Alice "` are three
/// different participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub author: String,

    /// Free text of the message.
    pub body: String,
}

impl Record {
    /// Creates a record from its three fields.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
        }
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Hour of day, 0-23, as written in the export.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Weekday index with Monday as 0.
    pub fn weekday_index(&self) -> usize {
        self.timestamp.weekday().num_days_from_monday() as usize
    }

    /// Month number, 1-12.
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Calendar date key in `DD.MM.YYYY` form.
    pub fn date_key(&self) -> String {
        self.timestamp.format("%d.%m.%Y").to_string()
    }

    /// Signed number of seconds from `earlier` to this record.
    pub fn seconds_since(&self, earlier: NaiveDateTime) -> i64 {
        (self.timestamp - earlier).num_seconds()
    }
}

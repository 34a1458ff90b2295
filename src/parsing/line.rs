//! Transcript line classifier.
//!
//! Recognizes the Android/Turkish-locale WhatsApp export line:
//!
//! ```text
//! 12.05.2024, 22:15 - Ayşe: Mesaj
//! ```
//!
//! Day and month take 1-2 digits, the year 2 or 4, the hour 1-2 and the
//! minute exactly 2. The comma after the date is optional. The author ends
//! at the first `": "` after the `" - "` separator; the rest of the line is
//! the body.
//!
//! Lines that don't match are not errors. Continuation lines of multiline
//! messages, system notices and blank lines all come back as
//! [`Classification::NoMatch`] and are simply skipped by the aggregator.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::Record;

/// Line grammar: day, month, year, hour, minute, author, body.
pub const LINE_PATTERN: &str =
    r"^(\d{1,2})\.(\d{1,2})\.(\d{2,4}),? (\d{1,2}):(\d{2}) - (.*?): (.*)$";

static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINE_PATTERN).expect("line pattern compiles"));

/// How the year field of a timestamp is written.
///
/// Parsing tries [`Full`](YearStyle::Full) first and falls back to
/// [`Short`](YearStyle::Short).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStyle {
    /// Four digits: `2024`
    Full,
    /// Two digits with a 1969 pivot: `24` is 2024, `69` is 1969
    Short,
}

impl YearStyle {
    /// Styles in the order they are attempted.
    pub fn all() -> &'static [YearStyle] {
        &[YearStyle::Full, YearStyle::Short]
    }

    /// Resolves a year field to a calendar year, or `None` if the field
    /// isn't written in this style.
    pub fn resolve(self, field: &str) -> Option<i32> {
        if !field.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match self {
            YearStyle::Full if field.len() == 4 => {
                let year: i32 = field.parse().ok()?;
                (year >= 1).then_some(year)
            }
            YearStyle::Short if field.len() == 2 => {
                let year: i32 = field.parse().ok()?;
                Some(if year <= 68 { 2000 + year } else { 1900 + year })
            }
            _ => None,
        }
    }
}

/// Result of classifying one physical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The line is a chat message.
    Record(Record),
    /// The line has the message shape but its date or time is impossible
    /// (`31.02.2024`, `25:00`, a 3-digit year).
    InvalidTimestamp,
    /// The line is not a chat message.
    NoMatch,
}

impl Classification {
    /// Returns the record, discarding the reason for a miss.
    pub fn into_record(self) -> Option<Record> {
        match self {
            Classification::Record(record) => Some(record),
            Classification::InvalidTimestamp | Classification::NoMatch => None,
        }
    }

    /// Returns `true` if the line yielded a record.
    pub fn is_record(&self) -> bool {
        matches!(self, Classification::Record(_))
    }
}

/// Parses the numeric timestamp fields of a line.
///
/// Returns `None` for impossible dates and times, or when the year is
/// neither 4 nor 2 ASCII digits.
///
/// ```rust
/// use chatpulse::parsing::parse_timestamp;
///
/// let full = parse_timestamp("1", "1", "2024", "9", "05").unwrap();
/// let short = parse_timestamp("01", "01", "24", "09", "05").unwrap();
/// assert_eq!(full, short);
///
/// assert!(parse_timestamp("31", "02", "2024", "10", "00").is_none());
/// assert!(parse_timestamp("01", "01", "224", "10", "00").is_none());
/// ```
pub fn parse_timestamp(
    day: &str,
    month: &str,
    year: &str,
    hour: &str,
    minute: &str,
) -> Option<NaiveDateTime> {
    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    YearStyle::all().iter().find_map(|style| {
        let year = style.resolve(year)?;
        NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
    })
}

/// Classifies one line, reporting why a line was rejected.
///
/// A single trailing `\n` or `\r\n` is ignored.
pub fn inspect_line(line: &str) -> Classification {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let Some(caps) = LINE_RE.captures(line) else {
        return Classification::NoMatch;
    };

    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());

    match parse_timestamp(field(1), field(2), field(3), field(4), field(5)) {
        Some(timestamp) => Classification::Record(Record::new(timestamp, field(6), field(7))),
        None => Classification::InvalidTimestamp,
    }
}

/// Classifies one line, returning the record if it is a chat message.
///
/// ```rust
/// use chatpulse::parsing::classify_line;
///
/// let record = classify_line("01.01.2024, 10:00 - Alice: merhaba").unwrap();
/// assert_eq!(record.author(), "Alice");
/// assert_eq!(record.body(), "merhaba");
///
/// assert!(classify_line("devamı olan bir satır").is_none());
/// ```
pub fn classify_line(line: &str) -> Option<Record> {
    inspect_line(line).into_record()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_classify_basic() {
        let record = classify_line("12.05.2024, 22:15 - Ayşe: Mesaj").unwrap();
        assert_eq!(record.author, "Ayşe");
        assert_eq!(record.body, "Mesaj");
        assert_eq!(record.timestamp.year(), 2024);
        assert_eq!(record.timestamp.month(), 5);
        assert_eq!(record.timestamp.day(), 12);
        assert_eq!(record.timestamp.hour(), 22);
        assert_eq!(record.timestamp.minute(), 15);
    }

    #[test]
    fn test_comma_is_optional() {
        assert!(classify_line("12.05.2024 22:15 - Ayşe: Mesaj").is_some());
    }

    #[test]
    fn test_single_digit_fields() {
        let record = classify_line("1.2.2024, 9:05 - Ali: selam").unwrap();
        assert_eq!(record.timestamp.day(), 1);
        assert_eq!(record.timestamp.month(), 2);
        assert_eq!(record.timestamp.hour(), 9);
    }

    #[test]
    fn test_two_digit_year() {
        let record = classify_line("01.01.24, 10:00 - Ali: selam").unwrap();
        assert_eq!(record.timestamp.year(), 2024);

        let record = classify_line("01.01.99, 10:00 - Ali: selam").unwrap();
        assert_eq!(record.timestamp.year(), 1999);
    }

    #[test]
    fn test_year_pivot() {
        assert_eq!(YearStyle::Short.resolve("68"), Some(2068));
        assert_eq!(YearStyle::Short.resolve("69"), Some(1969));
        assert_eq!(YearStyle::Short.resolve("2024"), None);
        assert_eq!(YearStyle::Full.resolve("24"), None);
        assert_eq!(YearStyle::Full.resolve("0000"), None);
    }

    #[test]
    fn test_three_digit_year_is_invalid_timestamp() {
        assert_eq!(
            inspect_line("01.01.224, 10:00 - Ali: selam"),
            Classification::InvalidTimestamp
        );
    }

    #[test]
    fn test_impossible_dates_are_invalid_timestamp() {
        assert_eq!(
            inspect_line("31.02.2024, 10:00 - Ali: selam"),
            Classification::InvalidTimestamp
        );
        assert_eq!(
            inspect_line("01.13.2024, 10:00 - Ali: selam"),
            Classification::InvalidTimestamp
        );
        assert_eq!(
            inspect_line("01.01.2024, 24:00 - Ali: selam"),
            Classification::InvalidTimestamp
        );
        assert_eq!(
            inspect_line("01.01.2024, 10:60 - Ali: selam"),
            Classification::InvalidTimestamp
        );
    }

    #[test]
    fn test_author_splits_on_first_colon_space() {
        let record = classify_line("01.01.2024, 10:00 - Ali: not: bir şey").unwrap();
        assert_eq!(record.author, "Ali");
        assert_eq!(record.body, "not: bir şey");
    }

    #[test]
    fn test_author_may_contain_dash_and_colon() {
        let record = classify_line("01.01.2024, 10:00 - Ali - Veli:x: selam").unwrap();
        assert_eq!(record.author, "Ali - Veli:x");
        assert_eq!(record.body, "selam");
    }

    #[test]
    fn test_author_is_not_trimmed() {
        let record = classify_line("01.01.2024, 10:00 -  Ali : selam").unwrap();
        assert_eq!(record.author, " Ali ");
    }

    #[test]
    fn test_empty_body() {
        let record = classify_line("01.01.2024, 10:00 - Ali: ").unwrap();
        assert_eq!(record.body, "");
    }

    #[test]
    fn test_system_notice_is_no_match() {
        // No ": " after the separator
        assert_eq!(
            inspect_line("01.01.2024, 10:00 - Ali gruba katıldı"),
            Classification::NoMatch
        );
    }

    #[test]
    fn test_other_formats_are_no_match() {
        assert!(classify_line("[15.01.24, 10:30:45] Alice: Hello").is_none());
        assert!(classify_line("1/15/24, 10:30 - Alice: Hello").is_none());
        assert!(classify_line("01.01.2024, 10:0 - Ali: selam").is_none());
        assert!(classify_line("01.01.2024, 10:00:00 - Ali: selam").is_none());
        assert!(classify_line("01.01.2024, 10:00 -Ali: selam").is_none());
        assert!(classify_line("").is_none());
        assert!(classify_line("   ").is_none());
    }

    #[test]
    fn test_trailing_newline_ignored() {
        let record = classify_line("01.01.2024, 10:00 - Ali: selam\r\n").unwrap();
        assert_eq!(record.body, "selam");
        let record = classify_line("01.01.2024, 10:00 - Ali: selam\n").unwrap();
        assert_eq!(record.body, "selam");
    }

    #[test]
    fn test_leading_whitespace_is_no_match() {
        assert!(classify_line(" 01.01.2024, 10:00 - Ali: selam").is_none());
    }

    #[test]
    fn test_classification_helpers() {
        let hit = inspect_line("01.01.2024, 10:00 - Ali: selam");
        assert!(hit.is_record());
        assert!(hit.into_record().is_some());
        assert!(!Classification::NoMatch.is_record());
        assert!(Classification::InvalidTimestamp.into_record().is_none());
    }
}

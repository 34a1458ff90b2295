//! Transcript parsing.
//!
//! - [`line`] - classifies a physical line as a chat message or not
//! - [`lexicon`] - phrase, word and emoji matchers applied to message bodies

pub mod lexicon;
pub mod line;

// Re-export commonly used items
pub use line::{Classification, LINE_PATTERN, YearStyle, classify_line, inspect_line, parse_timestamp};

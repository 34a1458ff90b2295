//! Statistics engine.
//!
//! This module contains:
//! - [`counters`] - frequency tables, time buckets and per-author counters
//! - [`aggregator`] - the fold from transcript lines to a [`Report`]
//! - [`report`] - the finished, read-only result
//! - [`output`] - JSON serialization of a report
//!
//! # Quick Start
//!
//! ```rust
//! use chatpulse::core::analyze_lines;
//!
//! let report = analyze_lines(["01.01.2024, 10:00 - Alice: merhaba"]);
//! assert_eq!(report.total_messages, 1);
//! ```

pub mod aggregator;
pub mod counters;
pub mod output;
pub mod report;

// Re-export main types for convenience
pub use aggregator::{
    StatsAggregator, analyze_lines, analyze_lines_with, analyze_str, analyze_str_with,
};
pub use counters::{AuthorCounters, FrequencyTable, LatencySamples, TimeBuckets, VocabularyCounters};
pub use output::{to_json, to_json_pretty, write_json};
pub use report::{Leader, Report, SlowestResponder};

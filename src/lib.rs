//! # Chatpulse
//!
//! A Rust library that turns an exported WhatsApp chat transcript into
//! participant statistics.
//!
//! ## Overview
//!
//! Given the lines of a transcript, chatpulse reports:
//! - **Volume**: messages per author and the most active author
//! - **Latency**: average seconds each author takes to answer someone else
//! - **Sentiment phrases**: apology and affection hits per author
//! - **Timing**: activity per hour, weekday, month and calendar day
//! - **Vocabulary**: the most frequent words and emoji runs
//! - **Conversation starters**: who speaks first after a three-hour silence
//!
//! Lines that are not messages (continuations, system notices, garbage) are
//! skipped silently. The engine performs no I/O: transcripts are read
//! through a [`TranscriptStore`](storage::TranscriptStore) by the
//! request-handling layer in [`service`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! let report = analyze_lines([
//!     "01.01.2024, 10:00 - Alice: merhaba",
//!     "01.01.2024, 10:05 - Bob: selam, özür dilerim",
//! ]);
//!
//! assert_eq!(report.total_messages, 2);
//! assert_eq!(report.user_apology_count.get("Bob"), Some(&1));
//! assert_eq!(report.avg_response.get("Bob"), Some(&300.0));
//! assert_eq!(report.hourly_activity["10:00"], 2);
//! ```
//!
//! ## Stored Transcripts
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! let store = MemoryStore::new();
//! let analyzer = Analyzer::new(&store);
//! analyzer.upload("chat.txt", b"01.01.2024, 10:00 - Alice: merhaba")?;
//!
//! let report = analyzer.analyze(&AnalyzeRequest::for_file("chat.txt"))?;
//! println!("{}", to_json_pretty(&report)?);
//! # Ok::<(), ChatpulseError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - line recognition and phrase matchers
//!   - [`classify_line`](parsing::classify_line), [`inspect_line`](parsing::inspect_line)
//!   - [`parsing::lexicon`] - apology, affection, word and emoji matchers
//! - [`core`] - the statistics engine
//!   - [`StatsAggregator`](crate::core::StatsAggregator), [`analyze_lines`], [`analyze_str`]
//!   - [`Report`], [`Leader`](crate::core::Leader), [`SlowestResponder`](crate::core::SlowestResponder)
//!   - [`core::output`](crate::core::output) - [`to_json`](crate::core::to_json), [`write_json`](crate::core::write_json)
//! - [`record`] - [`Record`], one recognized message
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig), [`Labels`](config::Labels)
//! - [`storage`] - [`DirectoryStore`](storage::DirectoryStore), [`MemoryStore`](storage::MemoryStore)
//! - [`service`] - [`Analyzer`](service::Analyzer) and request types
//! - `cli` - CLI types (feature `cli`)
//! - [`error`] - unified error types ([`ChatpulseError`], [`Result`])
//! - [`prelude`] - convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parsing;
pub mod record;
pub mod service;
pub mod storage;

// Re-export the main types at the crate root for convenience
pub use crate::core::{Report, analyze_lines, analyze_str};
pub use error::{ChatpulseError, Result};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::Record;
    pub use crate::core::{Leader, Report, SlowestResponder, StatsAggregator};

    // Error types
    pub use crate::error::{ChatpulseError, Result};

    // Configuration
    pub use crate::config::{AnalysisConfig, Labels, StoreConfig};

    // Analysis entry points
    pub use crate::core::{analyze_lines, analyze_lines_with, analyze_str, analyze_str_with};

    // Output
    pub use crate::core::{to_json, to_json_pretty, write_json};

    // Line recognition
    pub use crate::parsing::{classify_line, inspect_line};

    // Storage and request handling
    pub use crate::service::{AnalyzeRequest, Analyzer, UploadResponse};
    pub use crate::storage::{DirectoryStore, MemoryStore, TranscriptStore};
}

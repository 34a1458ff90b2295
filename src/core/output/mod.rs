//! Report serialization.
//!
//! - [`to_json`] / [`to_json_pretty`] - report as a JSON string
//! - [`write_json`] - report written to a file
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatpulse::Result<()> {
//! use chatpulse::core::output::{to_json, write_json};
//!
//! let report = chatpulse::analyze_lines(["01.01.2024, 10:00 - Alice: merhaba"]);
//!
//! let compact = to_json(&report)?;
//! write_json(&report, "report.json", true)?;
//! # Ok(())
//! # }
//! ```

mod json_writer;

pub use json_writer::{to_json, to_json_pretty, write_json};

//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - top-level CLI arguments
//! - [`Command`] - the `upload`, `analyze` and `file` subcommands
//! - [`LabelSet`] - which label table names the report keys
//!
//! # Using `LabelSet` in Libraries
//!
//! ```rust
//! use chatpulse::cli::LabelSet;
//!
//! let labels = "en".parse::<LabelSet>().unwrap().labels();
//! assert_eq!(labels.weekday(0), "Monday");
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, Labels};

/// Statistics for exported chat transcripts.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse upload ~/Downloads/chat.txt
    chatpulse analyze chat.txt --pretty
    chatpulse analyze chat.txt --labels en -o report.json
    chatpulse file chat.txt")]
pub struct Args {
    /// Log filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", env = "CHATPULSE_LOG")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Copy a local transcript into the uploads directory
    Upload {
        /// Path to the transcript
        path: PathBuf,

        /// Name to store the transcript under (defaults to the file name)
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        store: StoreArgs,
    },

    /// Analyze a transcript from the uploads directory
    Analyze {
        /// Name the transcript was uploaded under
        filename: String,

        #[command(flatten)]
        store: StoreArgs,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Analyze a local transcript without storing it
    File {
        /// Path to the transcript
        path: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },
}

/// Where uploaded transcripts live.
#[derive(clap::Args, Debug, Clone)]
pub struct StoreArgs {
    /// Uploads directory
    #[arg(long, value_name = "DIR", default_value = "uploads", env = "CHATPULSE_UPLOADS")]
    pub uploads_dir: PathBuf,
}

/// How the report is produced and written.
#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Weekday and month names used as report keys
    #[arg(long, value_enum, default_value = "tr")]
    pub labels: LabelSet,
}

impl ReportArgs {
    /// Builds the analysis configuration these flags describe.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::default().with_labels(self.labels.labels())
    }
}

/// Label tables selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSet {
    /// Turkish names
    #[default]
    #[value(alias = "turkish")]
    #[serde(alias = "turkish")]
    Tr,

    /// English names
    #[value(alias = "english")]
    #[serde(alias = "english")]
    En,
}

impl LabelSet {
    /// Returns the label table.
    pub fn labels(self) -> Labels {
        match self {
            LabelSet::Tr => Labels::turkish(),
            LabelSet::En => Labels::english(),
        }
    }

    /// Returns all accepted names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["tr", "turkish", "en", "english"]
    }
}

impl std::fmt::Display for LabelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelSet::Tr => write!(f, "tr"),
            LabelSet::En => write!(f, "en"),
        }
    }
}

impl std::str::FromStr for LabelSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tr" | "turkish" => Ok(LabelSet::Tr),
            "en" | "english" => Ok(LabelSet::En),
            _ => Err(format!(
                "Unknown label set: '{}'. Expected one of: {}",
                s,
                LabelSet::all_names().join(", ")
            )),
        }
    }
}

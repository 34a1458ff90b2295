//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::fs;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatpulse::cli::{Args, Command, ReportArgs};
use chatpulse::core::{analyze_str_with, to_json, to_json_pretty, write_json};
use chatpulse::service::Analyzer;
use chatpulse::storage::DirectoryStore;
use chatpulse::{ChatpulseError, Report};

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(&args.log_level);

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Installs a stderr subscriber so stdout carries only JSON.
fn setup_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn run(args: Args) -> Result<(), ChatpulseError> {
    let start = Instant::now();

    match args.command {
        Command::Upload { path, name, store } => {
            let filename = match name {
                Some(name) => name,
                None => file_name_of(&path)?,
            };
            let content = fs::read(&path)?;
            let store = DirectoryStore::new(store.uploads_dir);
            let response = Analyzer::new(&store).upload(&filename, &content)?;
            println!("{}", serde_json::to_string(&response)?);
        }
        Command::Analyze {
            filename,
            store,
            report,
        } => {
            let store = DirectoryStore::new(store.uploads_dir);
            let analyzer = Analyzer::with_config(&store, report.analysis_config());
            let result = analyzer.analyze_file(&filename)?;
            emit(&result, &report)?;
        }
        Command::File { path, report } => {
            info!(path = %path.display(), "analyzing local transcript");
            let bytes = fs::read(&path)?;
            let content = String::from_utf8(bytes)
                .map_err(|e| ChatpulseError::utf8(path.display().to_string(), e))?;
            let result = analyze_str_with(&content, &report.analysis_config());
            emit(&result, &report)?;
        }
    }

    debug!(elapsed_ms = start.elapsed().as_millis(), "done");
    Ok(())
}

/// Prints the report to stdout or writes it to `--output`.
fn emit(report: &Report, args: &ReportArgs) -> Result<(), ChatpulseError> {
    match &args.output {
        Some(path) => {
            write_json(report, path, args.pretty)?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let json = if args.pretty {
                to_json_pretty(report)?
            } else {
                to_json(report)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

fn file_name_of(path: &Path) -> Result<String, ChatpulseError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or(ChatpulseError::MissingFilename)
}

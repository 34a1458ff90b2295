//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::report::Report;
use crate::error::Result;

/// Converts a report to a single-line JSON string.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

/// Converts a report to an indented JSON string.
pub fn to_json_pretty(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report to `path` as JSON, followed by a newline.
pub fn write_json(report: &Report, path: impl AsRef<Path>, pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

//! Console report: one line per hashed file, then the checksum line
//!
//! Text reports stream each line as soon as the file is hashed. JSON reports
//! buffer records and write a single document on `finish`.

use crate::error::ApiError;
use crate::tree::Checksum;
use crate::types::FileRecord;
use serde_json::json;
use std::io::{self, Write};
use std::str::FromStr;

/// Label preceding the final checksum in text reports
pub const CHECKSUM_LABEL: &str = "Checksum : ";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(ApiError::ConfigError(format!(
                "Invalid output format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

/// `<hex digest> <relative path>`
pub fn format_record_line(record: &FileRecord) -> String {
    format!("{} {}", record.digest_hex(), record.relative_path)
}

/// `Checksum : <hex checksum>`
pub fn format_checksum_line(checksum: &Checksum) -> String {
    format!("{}{}", CHECKSUM_LABEL, checksum.to_hex())
}

/// Writes a checksum report to any sink
pub struct Report<W: Write> {
    writer: W,
    format: ReportFormat,
    records: Vec<serde_json::Value>,
}

impl<W: Write> Report<W> {
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self {
            writer,
            format,
            records: Vec::new(),
        }
    }

    /// Emit (text) or buffer (json) one file record
    pub fn record(&mut self, record: &FileRecord) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => writeln!(self.writer, "{}", format_record_line(record)),
            ReportFormat::Json => {
                self.records.push(json!({
                    "digest": record.digest_hex(),
                    "path": record.relative_path,
                }));
                Ok(())
            }
        }
    }

    /// Emit the final checksum and hand back the writer
    pub fn finish(mut self, checksum: &Checksum) -> io::Result<W> {
        match self.format {
            ReportFormat::Text => {
                writeln!(self.writer, "{}", format_checksum_line(checksum))?;
            }
            ReportFormat::Json => {
                let files = std::mem::take(&mut self.records);
                let document = json!({
                    "count": files.len(),
                    "files": files,
                    "checksum": checksum.to_hex(),
                });
                serde_json::to_writer_pretty(&mut self.writer, &document)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

//! Report exporters.
//!
//! The diff core hands the exporter an ordered, deduplicated sequence of
//! surviving records as flat rows; the output format is the exporter's
//! own concern. The exporter is an explicit collaborator passed into the
//! command, never process-global state.

mod csv;
mod json;

use std::path::Path;

pub use csv::CsvExporter;
pub use json::JsonExporter;
use serde::Serialize;
use thiserror::Error;

use crate::diff::DiffRecord;
use crate::types::Channel;

/// Defines errors that may occur while exporting the report.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error when the output path has no supported extension
    #[error("unsupported output format \"{0}\" (expected .csv or .json)")]
    UnsupportedFormat(String),
    /// Error when writing the output file fails
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    /// Error when serializing the report fails
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One row of the exported report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub project_name: String,
    pub resource_file_name: String,
    pub key: String,
    pub neutral_value: String,
    pub neutral_comment: String,
    pub german_value: String,
    pub german_comment: String,
    pub french_value: String,
    pub french_comment: String,
}

impl ExportRow {
    /// Builds a row from a surviving record, using the reported values
    /// (which rule processing may have cleared) and the carried comments.
    #[must_use]
    pub fn from_record(record: &DiffRecord) -> Self {
        Self {
            project_name: record.key.project_name.clone(),
            resource_file_name: record.key.file_name.clone(),
            key: record.key.key.clone(),
            neutral_value: record.reported.get(Channel::Neutral).to_string(),
            neutral_comment: record.comments.get(Channel::Neutral).to_string(),
            german_value: record.reported.get(Channel::German).to_string(),
            german_comment: record.comments.get(Channel::German).to_string(),
            french_value: record.reported.get(Channel::French).to_string(),
            french_comment: record.comments.get(Channel::French).to_string(),
        }
    }
}

/// A sink for the final report rows.
pub trait DiffExporter {
    /// Persists the rows.
    ///
    /// # Errors
    /// Returns an error when writing the output fails.
    fn export(&mut self, rows: &[ExportRow]) -> Result<(), ExportError>;
}

/// Picks an exporter implementation from the output file extension.
///
/// # Errors
/// Returns `ExportError::UnsupportedFormat` for unknown extensions.
pub fn exporter_for(path: &Path) -> Result<Box<dyn DiffExporter>, ExportError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(Box::new(CsvExporter::new(path))),
        Some("json") => Ok(Box::new(JsonExporter::new(path))),
        _ => Err(ExportError::UnsupportedFormat(path.display().to_string())),
    }
}

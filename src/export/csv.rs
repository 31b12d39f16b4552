//! CSV exporter.
//!
//! Writes the report as a spreadsheet-compatible CSV file with a fixed
//! header row.

use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    DiffExporter,
    ExportError,
    ExportRow,
};

const HEADER: &str = "ProjectName,ResourceFileName,Key,Neutral,NeutralComment,German,GermanComment,French,FrenchComment";

/// Exports rows to a CSV file.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl DiffExporter for CsvExporter {
    fn export(&mut self, rows: &[ExportRow]) -> Result<(), ExportError> {
        let mut file = std::fs::File::create(&self.path)?;

        writeln!(file, "{HEADER}")?;
        for row in rows {
            let fields = [
                &row.project_name,
                &row.resource_file_name,
                &row.key,
                &row.neutral_value,
                &row.neutral_comment,
                &row.german_value,
                &row.german_comment,
                &row.french_value,
                &row.french_comment,
            ];
            let line =
                fields.iter().map(|f| escape(f)).collect::<Vec<_>>().join(",");
            writeln!(file, "{line}")?;
        }

        tracing::info!(path = %self.path.display(), rows = rows.len(), "Wrote CSV report");

        Ok(())
    }
}

/// Quotes a field when it contains a separator, a quote or a line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

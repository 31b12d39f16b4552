//! JSON exporter.

use std::io::BufWriter;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    DiffExporter,
    ExportError,
    ExportRow,
};

/// Exports rows to a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self { path: path.to_path_buf() }
    }
}

impl DiffExporter for JsonExporter {
    fn export(&mut self, rows: &[ExportRow]) -> Result<(), ExportError> {
        let file = std::fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), rows)?;

        tracing::info!(path = %self.path.display(), rows = rows.len(), "Wrote JSON report");

        Ok(())
    }
}

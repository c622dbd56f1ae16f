use std::fs::File;
use std::path::{Path, PathBuf};

use parquet::file::reader::{FileReader, SerializedFileReader};
use parquet::record::Field;
use serde_json::Value;

use crate::error::PeekError;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;
pub const DEFAULT_PREVIEW_COLUMNS: usize = 3;

/// Extra cells of padding added to each header when sizing a column.
const COLUMN_PADDING: usize = 5;

/// The first rows of a file, ready to be shown in a table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TablePreview {
    pub source: PathBuf,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<Vec<String>>,
}

impl TablePreview {
    pub fn new(source: PathBuf, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let widths = headers.iter().map(|h| column_width(h)).collect();
        Self { source, headers, widths, rows }
    }
}

pub fn column_width(header: &str) -> u16 {
    (header.chars().count() + COLUMN_PADDING).min(u16::MAX as usize) as u16
}

/// Loads a preview of the file at `path`. Invoked synchronously when the user
/// selects a file.
pub trait PreviewLoader {
    fn load(&self, path: &Path) -> Result<TablePreview, PeekError>;
}

#[derive(Debug, Clone, Copy)]
pub struct ParquetLoader {
    pub max_rows: usize,
    pub max_columns: usize,
}

impl Default for ParquetLoader {
    fn default() -> Self {
        Self { max_rows: DEFAULT_PREVIEW_ROWS, max_columns: DEFAULT_PREVIEW_COLUMNS }
    }
}

impl ParquetLoader {
    pub fn new(max_rows: usize, max_columns: usize) -> Self {
        Self { max_rows, max_columns }
    }
}

impl PreviewLoader for ParquetLoader {
    fn load(&self, path: &Path) -> Result<TablePreview, PeekError> {
        let file = File::open(path).map_err(|e| PeekError::load_failure(path, e))?;
        let reader = SerializedFileReader::new(file).map_err(|e| PeekError::malformed(path, e))?;

        let headers: Vec<String> = reader
            .metadata()
            .file_metadata()
            .schema()
            .get_fields()
            .iter()
            .take(self.max_columns)
            .map(|field| field.name().to_string())
            .collect();

        let row_iter = reader.get_row_iter(None).map_err(|e| PeekError::malformed(path, e))?;

        let mut rows = Vec::with_capacity(self.max_rows);
        for row in row_iter.take(self.max_rows) {
            let row = row.map_err(|e| PeekError::malformed(path, e))?;
            let cells = row.get_column_iter().take(headers.len()).map(|(_, field)| cell_text(field)).collect();
            rows.push(cells);
        }

        tracing::debug!("Decoded {} rows x {} columns from {}", rows.len(), headers.len(), path.display());
        Ok(TablePreview::new(path.to_path_buf(), headers, rows))
    }
}

fn cell_text(field: &Field) -> String {
    match field.to_json_value() {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

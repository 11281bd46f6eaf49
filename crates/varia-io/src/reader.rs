//! Table reading entry points and error taxonomy
//!
//! The format is auto-detected from the file extension; readers load the
//! whole table eagerly, which suits the single-pass analyses built on top.

use std::path::Path;
use thiserror::Error;

use crate::schema::Table;

/// Errors that can occur while reading or writing tabular data
#[derive(Debug, Error)]
pub enum TableError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Non-numeric value in column '{column}' at data row {row}")]
    NonNumeric { column: String, row: usize },

    #[error("Failed to write workbook: {0}")]
    WorkbookWrite(String),
}

/// Result type for table I/O operations
pub type TableResult<T> = Result<T, TableError>;

/// Read a table, picking the reader from the file extension
///
/// Spreadsheets are read from their first worksheet; use [`read_sheet`] to
/// address a worksheet by name.
pub fn read_table(path: &Path) -> TableResult<Table> {
    if !path.exists() {
        return Err(TableError::FileNotFound(path.display().to_string()));
    }

    match extension_of(path).as_str() {
        "csv" | "tsv" => crate::csv_reader::read_csv(path),
        "xlsx" | "xlsm" | "xls" | "ods" => crate::xlsx_reader::read_workbook(path, None),
        other => Err(TableError::UnsupportedFormat(format!(
            "unknown file extension: {other}"
        ))),
    }
}

/// Read a named worksheet from a spreadsheet file
pub fn read_sheet(path: &Path, sheet: &str) -> TableResult<Table> {
    if !path.exists() {
        return Err(TableError::FileNotFound(path.display().to_string()));
    }
    crate::xlsx_reader::read_workbook(path, Some(sheet))
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = read_table(Path::new("no_such_file.csv")).unwrap_err();
        assert!(matches!(err, TableError::FileNotFound(_)));
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.parquet");
        std::fs::write(&path, b"").unwrap();
        let err = read_table(&path).unwrap_err();
        assert!(matches!(err, TableError::UnsupportedFormat(_)));
    }
}

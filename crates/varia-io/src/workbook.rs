//! Multi-sheet results workbook writer
//!
//! Sheets are accumulated in memory and materialized in a single scoped
//! `save`, so a failure part way through never leaves a truncated file that
//! could be mistaken for a complete one.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::reader::{TableError, TableResult};
use crate::schema::Cell;

/// One worksheet of data to be written
#[derive(Debug, Clone)]
struct SheetData {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

/// Accumulates named sheets and writes them as an XLSX workbook
#[derive(Debug, Default)]
pub struct WorkbookWriter {
    sheets: Vec<SheetData>,
}

impl WorkbookWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sheet; sheets are written in insertion order
    pub fn add_sheet(
        &mut self,
        name: impl Into<String>,
        headers: Vec<String>,
        rows: Vec<Vec<Cell>>,
    ) {
        self.sheets.push(SheetData {
            name: name.into(),
            headers,
            rows,
        });
    }

    /// Write all queued sheets to `path`
    pub fn save(&self, path: &Path) -> TableResult<()> {
        let mut workbook = Workbook::new();

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(&sheet.name)
                .map_err(|e| TableError::WorkbookWrite(e.to_string()))?;

            for (col, header) in sheet.headers.iter().enumerate() {
                worksheet
                    .write_string(0, col as u16, header)
                    .map_err(|e| TableError::WorkbookWrite(e.to_string()))?;
            }

            for (row_index, row) in sheet.rows.iter().enumerate() {
                let row_number = (row_index + 1) as u32;
                for (col, cell) in row.iter().enumerate() {
                    let col = col as u16;
                    let result = match cell {
                        Cell::Text(s) => worksheet.write_string(row_number, col, s),
                        Cell::Number(v) => worksheet.write_number(row_number, col, *v),
                        Cell::Bool(b) => worksheet.write_boolean(row_number, col, *b),
                        Cell::Empty => continue,
                    };
                    result.map_err(|e| TableError::WorkbookWrite(e.to_string()))?;
                }
            }
        }

        workbook
            .save(path)
            .map_err(|e| TableError::WorkbookWrite(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        let mut writer = WorkbookWriter::new();
        writer.add_sheet(
            "Results",
            vec!["Metric".into(), "Value".into()],
            vec![vec![Cell::Text("F".into()), Cell::Number(3.0)]],
        );
        writer.save(&path).unwrap();

        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_invalid_sheet_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");

        let mut writer = WorkbookWriter::new();
        // Worksheet names may not contain brackets
        writer.add_sheet("Bad[Name]", vec![], vec![]);
        assert!(writer.save(&path).is_err());
        assert!(!path.exists());
    }
}

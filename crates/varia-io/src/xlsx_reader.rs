//! Spreadsheet reader backed by calamine

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::reader::{TableError, TableResult};
use crate::schema::{Cell, Table};

/// Read a worksheet into a [`Table`]
///
/// With `sheet == None` the first worksheet is used. The first row is taken
/// as the header row.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> TableResult<Table> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| TableError::OpenFailed(e.to_string()))?;

    let sheet_name = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s.as_str() == name) {
                return Err(TableError::SheetNotFound(name.to_string()));
            }
            name.to_string()
        }
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| TableError::InvalidFormat("workbook has no worksheets".into()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| TableError::InvalidFormat(e.to_string()))?;

    let mut rows_iter = range.rows();
    let headers = match rows_iter.next() {
        Some(header_row) => header_row.iter().map(|c| convert(c).display()).collect(),
        None => Vec::new(),
    };

    let rows = rows_iter
        .map(|row| row.iter().map(convert).collect())
        .collect();

    Ok(Table::new(headers, rows))
}

/// Convert a calamine cell into our typed cell
fn convert(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(_) => Cell::Empty,
        // Dates, durations, and ISO strings keep their display form
        other => Cell::Text(other.to_string()),
    }
}

//! CSV file reader with per-cell type inference

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::reader::{TableError, TableResult};
use crate::schema::{Cell, Table};

/// Read a CSV (or TSV) file into a [`Table`]
///
/// The first record is taken as the header row. Cells parse as numbers or
/// booleans where possible and fall back to text.
pub fn read_csv(path: &Path) -> TableResult<Table> {
    let delimiter = match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") => b'\t',
        _ => b',',
    };

    let file = File::open(path).map_err(|e| TableError::OpenFailed(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| TableError::InvalidFormat(e.to_string()))?
        .iter()
        .map(|s| s.trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| TableError::InvalidFormat(e.to_string()))?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Infer a typed cell from a raw CSV field
fn parse_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if let Ok(number) = trimmed.parse::<f64>() {
        return Cell::Number(number);
    }
    match trimmed.to_lowercase().as_str() {
        "true" => Cell::Bool(true),
        "false" => Cell::Bool(false),
        _ => Cell::Text(trimmed.to_string()),
    }
}

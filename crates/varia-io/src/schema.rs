//! Cell and table types for tabular data

use serde::{Deserialize, Serialize};

use crate::reader::{TableError, TableResult};

/// A single table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl Cell {
    /// Numeric view of the cell, if it has one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Display form, used for group labels
    ///
    /// Integral numbers render without a fractional part so that numeric
    /// label columns group stably across formats.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                format!("{}", *v as i64)
            }
            Cell::Number(v) => format!("{v}"),
            Cell::Bool(b) => b.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// A table loaded eagerly into memory: header row plus typed data rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    /// Column names from the header row
    pub headers: Vec<String>,
    /// Data rows; each row has one cell per column
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create a table from headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.headers.len()
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Require a column to exist, returning its index
    pub fn require_column(&self, name: &str) -> TableResult<usize> {
        self.column_index(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
    }

    /// Read a column as display strings (group labels)
    pub fn text_column(&self, name: &str) -> TableResult<Vec<String>> {
        let index = self.require_column(name)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).unwrap_or(&Cell::Empty).display())
            .collect())
    }

    /// Read a column as numbers, failing on the first non-numeric cell
    pub fn numeric_column(&self, name: &str) -> TableResult<Vec<f64>> {
        let index = self.require_column(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .get(index)
                    .and_then(Cell::as_number)
                    .ok_or(TableError::NonNumeric {
                        column: name.to_string(),
                        row: row + 1,
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::new(
            vec!["Group".into(), "Value".into()],
            vec![
                vec![Cell::Text("A".into()), Cell::Number(10.0)],
                vec![Cell::Text("B".into()), Cell::Number(20.5)],
            ],
        )
    }

    #[test]
    fn test_column_lookup() {
        let table = sample_table();
        assert_eq!(table.column_index("Group"), Some(0));
        assert_eq!(table.column_index("Value"), Some(1));
        assert_eq!(table.column_index("Missing"), None);
        assert!(matches!(
            table.require_column("Missing"),
            Err(TableError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_numeric_column() {
        let table = sample_table();
        assert_eq!(table.numeric_column("Value").unwrap(), vec![10.0, 20.5]);

        let err = table.numeric_column("Group").unwrap_err();
        assert!(matches!(err, TableError::NonNumeric { row: 1, .. }));
    }

    #[test]
    fn test_label_display_trims_integral_floats() {
        assert_eq!(Cell::Number(3.0).display(), "3");
        assert_eq!(Cell::Number(3.5).display(), "3.5");
        assert_eq!(Cell::Text("A".into()).display(), "A");
    }
}

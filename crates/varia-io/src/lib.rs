//! varia-io - Tabular data I/O
//!
//! Reads tabular measurement data from CSV or XLSX files into a uniform
//! [`Table`] representation with typed cells and named-column access, and
//! writes multi-sheet results workbooks.
//!
//! The format is chosen from the file extension:
//!
//! ```no_run
//! use varia_io::read_table;
//!
//! let table = read_table(std::path::Path::new("data.xlsx"))?;
//! let values = table.numeric_column("Value")?;
//! # Ok::<(), varia_io::TableError>(())
//! ```

pub mod csv_reader;
pub mod reader;
pub mod schema;
pub mod workbook;
pub mod xlsx_reader;

pub use reader::{read_sheet, read_table, TableError, TableResult};
pub use schema::{Cell, Table};
pub use workbook::WorkbookWriter;

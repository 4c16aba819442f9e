//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `table_reader` - Numeric CSV loader with by-name column lookup
//! - `csv_format` - Disease matrix serialization

pub mod csv_format;
pub mod table_reader;

pub use csv_format::{format_value, write_disease_csv, write_disease_csv_to, OUTPUT_PRECISION};
pub use table_reader::{load_table, load_table_from, NumericTable};

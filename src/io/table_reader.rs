//! Numeric CSV table loader
//!
//! Reads a header line plus data rows into column-major storage so that
//! columns can be looked up by name. Every field must parse as `f64`.
//!
//! # Design
//!
//! The csv reader runs with `flexible(false)`, so a row whose field count
//! disagrees with the header is rejected by csv itself and surfaces as a
//! `ConvertError::Format` with the offending line number. Fields are trimmed
//! before parsing, so `" 5.0 "` is accepted.

use crate::types::ConvertError;
use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

/// Source name reported for streams that have no path
const STREAM_SOURCE: &str = "<stream>";

/// Column-addressable numeric table
///
/// Columns are stored in header order; `column` resolves a name to its values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericTable {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
    rows: usize,
}

impl NumericTable {
    /// Header names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Values of the named column, in row order
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Number of data rows (the header line is not counted)
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

/// Load a numeric table from any reader
///
/// I/O failures are attributed to a generic stream name; use
/// [`load_table_from`] when the reader is backed by a known path.
pub fn load_table<R: Read>(reader: R) -> Result<NumericTable, ConvertError> {
    load_table_from(reader, Path::new(STREAM_SOURCE))
}

/// Load a numeric table, reporting I/O failures against `source`
///
/// # Errors
///
/// - `ConvertError::Io` if reading fails
/// - `ConvertError::Format` on a duplicated header name, a row with the wrong
///   number of fields, invalid UTF-8, or a field that is not a number
pub fn load_table_from<R: Read>(reader: R, source: &Path) -> Result<NumericTable, ConvertError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .has_headers(true)
        .flexible(false)
        .buffer_capacity(8 * 1024)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ConvertError::from_csv(source, e))?
        .iter()
        .map(String::from)
        .collect();

    for (idx, name) in headers.iter().enumerate() {
        if headers[..idx].contains(name) {
            return Err(ConvertError::format(
                Some(1),
                format!("duplicate column '{}'", name),
            ));
        }
    }

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); headers.len()];
    let mut rows = 0;

    for result in reader.records() {
        let record = result.map_err(|e| ConvertError::from_csv(source, e))?;
        let line = record.position().map(|p| p.line());

        for ((field, column), name) in record.iter().zip(columns.iter_mut()).zip(&headers) {
            let value = field.parse::<f64>().map_err(|_| {
                ConvertError::format(
                    line,
                    format!("column '{}': '{}' is not a number", name, field),
                )
            })?;
            column.push(value);
        }
        rows += 1;
    }

    Ok(NumericTable {
        headers,
        columns,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_table_preserves_rows_and_headers() {
        let data = "incubation_time,infectious_time,r_zero\n5.0,7.0,2.5\n3.2,10.1,1.8\n";

        let table = load_table(data.as_bytes()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.headers(),
            &["incubation_time", "infectious_time", "r_zero"]
        );
        assert_eq!(table.column("incubation_time"), Some(&[5.0, 3.2][..]));
        assert_eq!(table.column("infectious_time"), Some(&[7.0, 10.1][..]));
        assert_eq!(table.column("r_zero"), Some(&[2.5, 1.8][..]));
        assert_eq!(table.column("seed"), None);
    }

    #[rstest]
    #[case::header_only("a,b\n", 0)]
    #[case::empty_input("", 0)]
    #[case::no_trailing_newline("a,b\n1,2", 1)]
    #[case::whitespace("a , b\n  1 , 2  \n", 1)]
    #[case::scientific("a,b\n1e-3,2.5E2\n", 1)]
    fn test_load_table_row_count(#[case] data: &str, #[case] expected_rows: usize) {
        let table = load_table(data.as_bytes()).unwrap();
        assert_eq!(table.row_count(), expected_rows);
    }

    #[test]
    fn test_load_table_trims_fields() {
        let data = " a , b \n 1.5 , -2 \n";

        let table = load_table(data.as_bytes()).unwrap();

        assert_eq!(table.headers(), &["a", "b"]);
        assert_eq!(table.column("a"), Some(&[1.5][..]));
        assert_eq!(table.column("b"), Some(&[-2.0][..]));
    }

    #[test]
    fn test_load_table_empty_input_has_no_columns() {
        let table = load_table("".as_bytes()).unwrap();
        assert!(table.headers().is_empty());
    }

    #[rstest]
    #[case::too_few_fields(b"a,b\n1,2\n3\n", Some(3), "")]
    #[case::too_many_fields(b"a,b\n1,2,3\n", Some(2), "")]
    #[case::not_a_number(b"a,b\n1,2\n3,abc\n", Some(3), "column 'b': 'abc' is not a number")]
    #[case::empty_field(b"a,b\n1,\n", Some(2), "column 'b': '' is not a number")]
    #[case::duplicate_header(b"a,a\n1,2\n", Some(1), "duplicate column 'a'")]
    #[case::invalid_utf8(b"a,b\n1,\xff2\n", Some(2), "invalid utf-8")]
    #[case::non_numeric_extra_column(
        b"incubation_time,infectious_time,r_zero,label\n5,7,2.5,x\n",
        Some(2),
        "column 'label': 'x' is not a number"
    )]
    fn test_load_table_format_errors(
        #[case] data: &[u8],
        #[case] expected_line: Option<u64>,
        #[case] expected_message: &str,
    ) {
        let err = load_table(data).unwrap_err();

        match err {
            ConvertError::Format { line, message } => {
                assert_eq!(line, expected_line);
                assert!(
                    message.contains(expected_message),
                    "unexpected message: {}",
                    message
                );
            }
            other => panic!("Expected Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_table_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"x,y\n1,2\n3,4\n")
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");

        let handle = std::fs::File::open(file.path()).unwrap();
        let table = load_table_from(handle, file.path()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("y"), Some(&[2.0, 4.0][..]));
    }
}

//! CSV output format for disease parameters
//!
//! The header is written as a literal first line, followed by one line per
//! matrix row. Values are fixed-point with six decimals, never scientific
//! notation, and there is no index column.

use crate::types::{ConvertError, DiseaseParameters, DISEASE_HEADER};
use csv::Writer;
use std::io::Write;
use std::path::Path;

/// Decimal places used for every output value
pub const OUTPUT_PRECISION: usize = 6;

/// Destination name reported for writers that have no path
const STREAM_DESTINATION: &str = "<stream>";

/// Format a value the way the disease matrix expects
///
/// Non-finite values are written as `nan`, `inf` and `-inf`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{:.*}", OUTPUT_PRECISION, value)
}

/// Write the disease matrix in CSV format
///
/// # Arguments
///
/// * `matrix` - Rows to write, in order
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_disease_csv(
    matrix: &[DiseaseParameters],
    output: &mut dyn Write,
) -> Result<(), ConvertError> {
    write_disease_csv_to(matrix, output, Path::new(STREAM_DESTINATION))
}

/// Write the disease matrix, reporting I/O failures against `destination`
pub fn write_disease_csv_to(
    matrix: &[DiseaseParameters],
    output: &mut dyn Write,
    destination: &Path,
) -> Result<(), ConvertError> {
    let mut writer = Writer::from_writer(output);

    writer
        .write_record(DISEASE_HEADER)
        .map_err(|e| ConvertError::from_csv(destination, e))?;

    for params in matrix {
        writer
            .write_record(params.to_array().map(format_value))
            .map_err(|e| ConvertError::from_csv(destination, e))?;
    }

    writer
        .flush()
        .map_err(|e| ConvertError::io(destination, e))?;

    Ok(())
}

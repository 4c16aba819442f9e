//! Batch driver
//!
//! Orchestrates a single conversion run:
//! 1. Opens the input, then the output according to the configured [`OpenMode`]
//! 2. Loads the input into a numeric table
//! 3. Extracts the epidemiology columns by name
//! 4. Maps every row through the transform, keeping row order
//! 5. Writes the disease matrix
//!
//! Both file handles are acquired before any processing starts and are
//! dropped on every exit path. An output created before a later failure is
//! left in place.
//!
//! [`OpenMode`]: crate::config::OpenMode

use crate::config::RunConfig;
use crate::io::{load_table_from, write_disease_csv_to};
use crate::transform::EpidemiologyTransform;
use crate::types::{ConvertError, DiseaseMatrix, EpidemiologyTable};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of disease rows written
    pub rows: usize,
    /// Where they were written
    pub output: PathBuf,
}

/// Map every epidemiology record through `transform`
///
/// Row `i` of the result is derived from row `i` of `table`.
pub fn build_disease_matrix(
    table: &EpidemiologyTable,
    transform: &dyn EpidemiologyTransform,
) -> DiseaseMatrix {
    table
        .records()
        .iter()
        .map(|record| transform.transform(record))
        .collect()
}

/// Run the conversion described by `config`
pub fn run(
    config: &RunConfig,
    transform: &dyn EpidemiologyTransform,
) -> Result<RunSummary, ConvertError> {
    let input = File::open(&config.input).map_err(|e| ConvertError::io(&config.input, e))?;
    let output = config.open_mode.open(&config.output)?;
    debug!(
        input = %config.input.display(),
        output = %config.output.display(),
        mode = ?config.open_mode,
        "opened files"
    );

    let mut writer = BufWriter::new(output);
    let rows = convert_with_paths(
        BufReader::new(input),
        &config.input,
        &mut writer,
        &config.output,
        transform,
    )?;
    writer
        .flush()
        .map_err(|e| ConvertError::io(&config.output, e))?;

    info!(rows, output = %config.output.display(), "disease matrix written");

    Ok(RunSummary {
        rows,
        output: config.output.clone(),
    })
}

/// Convert an epidemiology CSV stream into a disease CSV stream
///
/// Returns the number of rows written.
pub fn convert<R: Read, W: Write>(
    input: R,
    mut output: W,
    transform: &dyn EpidemiologyTransform,
) -> Result<usize, ConvertError> {
    convert_with_paths(
        input,
        Path::new("<input>"),
        &mut output,
        Path::new("<output>"),
        transform,
    )
}

fn convert_with_paths<R: Read>(
    input: R,
    input_path: &Path,
    output: &mut dyn Write,
    output_path: &Path,
    transform: &dyn EpidemiologyTransform,
) -> Result<usize, ConvertError> {
    let table = load_table_from(input, input_path)?;
    let epidemiology = EpidemiologyTable::from_table(&table)?;
    debug!(
        rows = epidemiology.len(),
        columns = ?epidemiology.header_names(),
        "loaded epidemiology table"
    );
    let matrix = build_disease_matrix(&epidemiology, transform);
    debug!(rows = matrix.len(), "transformed rows");

    write_disease_csv_to(&matrix, output, output_path)?;
    Ok(matrix.len())
}

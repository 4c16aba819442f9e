//! Epidemiology input types
//!
//! An epidemiology table is the typed view of the input CSV: one record per
//! row, with the three parameters pulled out of the loaded numeric table by
//! column name.

use super::error::ConvertError;
use crate::io::NumericTable;

/// Column holding the incubation time
pub const INCUBATION_TIME: &str = "incubation_time";

/// Column holding the infectious time
pub const INFECTIOUS_TIME: &str = "infectious_time";

/// Column holding the basic reproduction number
pub const R_ZERO: &str = "r_zero";

/// One row of epidemiological parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpidemiologyRecord {
    /// Duration from infection to symptom onset
    pub incubation_time: f64,

    /// Duration an individual remains infectious
    pub infectious_time: f64,

    /// Basic reproduction number
    pub r_zero: f64,
}

impl EpidemiologyRecord {
    pub fn new(incubation_time: f64, infectious_time: f64, r_zero: f64) -> Self {
        EpidemiologyRecord {
            incubation_time,
            infectious_time,
            r_zero,
        }
    }
}

/// Ordered epidemiology records plus the input's header names
#[derive(Debug, Clone, PartialEq)]
pub struct EpidemiologyTable {
    records: Vec<EpidemiologyRecord>,
    header_names: Vec<String>,
}

impl EpidemiologyTable {
    /// Build the typed table from a loaded numeric table
    ///
    /// Columns are located by name, so their position in the header does not
    /// matter. Columns other than the three required ones are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::MissingColumn` naming the first required column
    /// that is absent.
    pub fn from_table(table: &NumericTable) -> Result<Self, ConvertError> {
        let column = |name: &str| {
            table
                .column(name)
                .ok_or_else(|| ConvertError::missing_column(name))
        };

        let incubation = column(INCUBATION_TIME)?;
        let infectious = column(INFECTIOUS_TIME)?;
        let r_zeros = column(R_ZERO)?;

        let records = incubation
            .iter()
            .zip(infectious)
            .zip(r_zeros)
            .map(|((&inc, &inf), &r0)| EpidemiologyRecord::new(inc, inf, r0))
            .collect();

        Ok(EpidemiologyTable {
            records,
            header_names: table.headers().to_vec(),
        })
    }

    pub fn records(&self) -> &[EpidemiologyRecord] {
        &self.records
    }

    pub fn header_names(&self) -> &[String] {
        &self.header_names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

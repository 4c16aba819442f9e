//! Epidemiology to disease parameter converter
//! # Overview
//!
//! This library implements step 3B of the uncertainty-quantification input
//! pipeline: it reads a CSV of per-sample epidemiological parameters and
//! writes a CSV of the disease-model rates derived from them, one output row
//! per input row.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (epidemiology records, disease parameters, errors)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`config`] - Run configuration and output open mode
//! - [`io`] - Numeric CSV loading and disease matrix output
//! - [`transform`] - The per-row transform and its default model
//! - [`core`] - The batch driver tying the pieces together
//!
//! # Formats
//!
//! Input must carry `incubation_time`, `infectious_time` and `r_zero`
//! columns, in any order. Output always starts with
//! `beta[2],beta[3],progress[1],progress[2],progress[3]`.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod transform;
pub mod types;

pub use config::{OpenMode, RunConfig};
pub use core::{convert, run, RunSummary};
pub use io::{load_table, write_disease_csv, NumericTable};
pub use transform::{EpidemiologyTransform, StagedSeirTransform};
pub use types::{
    ConvertError, DiseaseMatrix, DiseaseParameters, EpidemiologyRecord, EpidemiologyTable,
    DISEASE_HEADER,
};

//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `epidemiology`: Input records and the typed input table
//! - `disease`: Output parameter records and the output header
//! - `error`: Error type for the converter

pub mod disease;
pub mod epidemiology;
pub mod error;

pub use disease::{DiseaseMatrix, DiseaseParameters, DISEASE_HEADER};
pub use epidemiology::{EpidemiologyRecord, EpidemiologyTable};
pub use error::ConvertError;

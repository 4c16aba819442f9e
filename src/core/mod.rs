//! Core conversion logic
//!
//! - `driver` - Orchestrates load, transform and write for one run

pub mod driver;

pub use driver::{build_disease_matrix, convert, run, RunSummary};

//! Epidemiological to disease parameter transform
//!
//! The driver only depends on the [`EpidemiologyTransform`] trait, so the
//! formula used to derive disease parameters can be swapped without touching
//! the loading or writing code.
//!
//! # Default model
//!
//! [`StagedSeirTransform`] assumes the chain `S -> E -> I1 -> I2 -> R`, where
//! compartment 1 is the exposed stage and the infectious period is split into
//! two equal stages (compartments 2 and 3). Both infectious stages transmit
//! at the same rate, chosen so that the expected number of secondary
//! infections over the whole infectious period equals `r_zero`.

use crate::types::{DiseaseParameters, EpidemiologyRecord};

/// Maps one epidemiology record to one set of disease parameters
///
/// Implementations must be pure: the same record always yields the same
/// parameters, and no row depends on any other. The driver does not
/// validate inputs before calling `transform`.
pub trait EpidemiologyTransform {
    fn transform(&self, record: &EpidemiologyRecord) -> DiseaseParameters;
}

impl<F> EpidemiologyTransform for F
where
    F: Fn(&EpidemiologyRecord) -> DiseaseParameters,
{
    fn transform(&self, record: &EpidemiologyRecord) -> DiseaseParameters {
        self(record)
    }
}

/// Two-stage infectious SEIR transform
#[derive(Debug, Clone, Copy, Default)]
pub struct StagedSeirTransform;

impl StagedSeirTransform {
    /// Number of infectious stages the infectious period is split into
    pub const INFECTIOUS_STAGES: f64 = 2.0;
}

impl EpidemiologyTransform for StagedSeirTransform {
    fn transform(&self, record: &EpidemiologyRecord) -> DiseaseParameters {
        let progress1 = 1.0 / record.incubation_time;
        let stage_rate = Self::INFECTIOUS_STAGES / record.infectious_time;
        let beta = record.r_zero / record.infectious_time;

        DiseaseParameters {
            beta2: beta,
            beta3: beta,
            progress1,
            progress2: stage_rate,
            progress3: stage_rate,
        }
    }
}

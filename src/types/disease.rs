//! Disease-model parameter types
//!
//! The compartmental model downstream consumes two transmission rates and
//! three stage-progression rates per sample. Their column names are fixed.

use serde::Serialize;

/// Output column names, in write order
pub const DISEASE_HEADER: [&str; 5] = [
    "beta[2]",
    "beta[3]",
    "progress[1]",
    "progress[2]",
    "progress[3]",
];

/// Disease parameters derived from a single epidemiology record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiseaseParameters {
    /// Transmission rate from compartment 2
    #[serde(rename = "beta[2]")]
    pub beta2: f64,

    /// Transmission rate from compartment 3
    #[serde(rename = "beta[3]")]
    pub beta3: f64,

    /// Progression rate out of compartment 1
    #[serde(rename = "progress[1]")]
    pub progress1: f64,

    /// Progression rate out of compartment 2
    #[serde(rename = "progress[2]")]
    pub progress2: f64,

    /// Progression rate out of compartment 3
    #[serde(rename = "progress[3]")]
    pub progress3: f64,
}

impl DiseaseParameters {
    /// Values in `DISEASE_HEADER` order
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.beta2,
            self.beta3,
            self.progress1,
            self.progress2,
            self.progress3,
        ]
    }
}

impl From<[f64; 5]> for DiseaseParameters {
    fn from([beta2, beta3, progress1, progress2, progress3]: [f64; 5]) -> Self {
        DiseaseParameters {
            beta2,
            beta3,
            progress1,
            progress2,
            progress3,
        }
    }
}

/// Disease parameters for every input row, index-aligned with the input
pub type DiseaseMatrix = Vec<DiseaseParameters>;

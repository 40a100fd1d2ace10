//! Calibration result series
//!
//! Parallel arrays indexed by test point. Any array may be shorter than the
//! point count, or missing entirely; absent entries read as invalid.

use serde::{Deserialize, Serialize};

use crate::core::reading::{RawReading, Reading};

/// Accuracy, repeatability and eccentricity results for one range
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationResultSeries {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nominal_values: Vec<RawReading>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub corrections: Vec<RawReading>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub coverage_factors: Vec<RawReading>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expanded_uncertainties: Vec<RawReading>,

    /// Repeatability test
    #[serde(default)]
    pub rtest: RepeatabilityTest,

    /// Eccentricity test
    #[serde(default)]
    pub etest: EccentricityTest,
}

/// Repeatability test results, one entry per test load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatabilityTest {
    /// Standard deviation of the repeated readings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub std: Vec<RawReading>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub max_diff_between_readings: Vec<RawReading>,
}

/// Eccentricity (off-centre loading) test results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EccentricityTest {
    /// Reading at each load position
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<RawReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_load: Option<RawReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_error: Option<RawReading>,
}

/// Strictly normalized entry `idx` of a series
pub fn reading_at(values: &[RawReading], idx: usize) -> Reading {
    Reading::strict(values.get(idx))
}

impl CalibrationResultSeries {
    pub fn nominal(&self, idx: usize) -> Reading {
        reading_at(&self.nominal_values, idx)
    }

    pub fn correction(&self, idx: usize) -> Reading {
        reading_at(&self.corrections, idx)
    }

    pub fn coverage_factor(&self, idx: usize) -> Reading {
        reading_at(&self.coverage_factors, idx)
    }

    pub fn expanded_uncertainty(&self, idx: usize) -> Reading {
        reading_at(&self.expanded_uncertainties, idx)
    }
}

//! Calibrated measurement range and its display unit

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core::reading::{RawReading, Reading};

/// Mass unit a certificate is printed in
///
/// Readings are always stored in grams; this only selects the display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Gram,
    Kilogram,
}

impl MassUnit {
    /// Resolve a stored unit code, falling back to grams for anything unknown
    pub fn from_code(code: Option<&str>) -> Self {
        code.and_then(|c| c.parse().ok()).unwrap_or_default()
    }

    /// Display units per gram
    pub fn per_gram(&self) -> Decimal {
        match self {
            MassUnit::Gram => dec!(1),
            MassUnit::Kilogram => dec!(0.001),
        }
    }

    /// Symbol used in certificate column headers
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
        }
    }
}

impl std::fmt::Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MassUnit::Gram => write!(f, "gram"),
            MassUnit::Kilogram => write!(f, "kilogram"),
        }
    }
}

impl std::str::FromStr for MassUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gram" | "g" => Ok(MassUnit::Gram),
            "kilogram" | "kg" => Ok(MassUnit::Kilogram),
            _ => Err(format!("Unknown unit: {}. Expected gram or kilogram", s)),
        }
    }
}

/// One calibrated measurement range of a calibration record
///
/// Numeric fields keep their stored form; accessors normalize them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationRange {
    /// Smallest reading increment, in grams
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<RawReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_min_calibration: Option<RawReading>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_max_calibration: Option<RawReading>,

    /// Display unit code (`gram` / `kilogram`)
    #[serde(
        default,
        rename = "unitUsedForCOC",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_used_for_coc: Option<String>,

    /// Number of accuracy test points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration_point_no: Option<RawReading>,
}

impl CalibrationRange {
    /// Create a range with a resolution and display unit
    pub fn new(resolution: f64, unit: MassUnit) -> Self {
        Self {
            resolution: Some(RawReading::Number(resolution)),
            unit_used_for_coc: Some(unit.to_string()),
            ..Default::default()
        }
    }

    /// Display unit, defaulting to grams
    pub fn unit(&self) -> MassUnit {
        MassUnit::from_code(self.unit_used_for_coc.as_deref())
    }

    /// Resolution in grams; NaN when missing so formatting degrades to blank
    pub fn resolution_value(&self) -> f64 {
        Reading::lenient(self.resolution.as_ref())
            .value()
            .unwrap_or(f64::NAN)
    }

    /// Lower bound of the calibrated span
    pub fn range_min(&self) -> Reading {
        Reading::lenient(self.range_min_calibration.as_ref())
    }

    /// Upper bound of the calibrated span
    pub fn range_max(&self) -> Reading {
        Reading::lenient(self.range_max_calibration.as_ref())
    }

    /// Number of accuracy rows to render, `None` when absent or unparseable
    pub fn point_count(&self) -> Option<usize> {
        self.calibration_point_no.as_ref().and_then(RawReading::as_count)
    }
}

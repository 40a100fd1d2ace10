//! Certificate sheet assembly
//!
//! Turns a calibration record into the display strings a certificate prints:
//! one block per calibrated range plus the traceability statement and due
//! date. Layout is left to the caller.

use serde::Serialize;

use crate::core::correction::format_signed_correction;
use crate::core::due_date::resolve_due_date;
use crate::core::precision::format_to_decimal_string;
use crate::core::reading::Reading;
use crate::core::traceability::TraceabilityResolver;
use crate::core::uncertainty::round_uncertainty_for_display;
use crate::core::units::convert_value_for_display;
use crate::entities::results::reading_at;
use crate::entities::{CalibrationRange, CalibrationRecord, MassUnit, RangeRecord};

/// Decimals a coverage factor is printed with
const COVERAGE_FACTOR_DECIMALS: i32 = 2;

/// Formatted certificate content for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CertificateSheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_no: Option<String>,
    pub traceability: String,
    pub due_date: String,
    pub ranges: Vec<RangeSheet>,
}

/// Formatted tables for one calibrated range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSheet {
    pub unit: MassUnit,
    pub unit_symbol: &'static str,
    pub resolution: String,
    pub range_min: String,
    pub range_max: String,
    pub accuracy: Vec<AccuracyRow>,
    pub repeatability: Vec<RepeatabilityRow>,
    pub eccentricity: EccentricitySheet,
}

/// One accuracy test point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracyRow {
    /// 1-based point number
    pub point: usize,
    pub nominal: String,
    pub correction: String,
    pub expanded_uncertainty: String,
    pub coverage_factor: String,
}

/// One repeatability test load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatabilityRow {
    pub point: usize,
    pub std_dev: String,
    pub max_diff: String,
}

/// Eccentricity test block
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EccentricitySheet {
    pub test_load: String,
    pub values: Vec<String>,
    pub max_error: String,
}

/// Formats readings for one range's resolution and display unit
#[derive(Debug, Clone, Copy)]
pub struct RangeFormatter {
    resolution: f64,
    unit: MassUnit,
}

impl RangeFormatter {
    pub fn new(resolution: f64, unit: MassUnit) -> Self {
        Self { resolution, unit }
    }

    pub fn for_range(range: &CalibrationRange) -> Self {
        Self::new(range.resolution_value(), range.unit())
    }

    pub fn value(&self, reading: impl Into<Reading>) -> String {
        convert_value_for_display(reading, self.resolution, self.unit)
    }

    pub fn correction(&self, reading: impl Into<Reading>) -> String {
        format_signed_correction(&self.value(reading))
    }

    pub fn uncertainty(&self, reading: impl Into<Reading>) -> String {
        round_uncertainty_for_display(reading, self.resolution, self.unit)
    }
}

impl CertificateSheet {
    /// Format every table of a record
    pub fn build(record: &CalibrationRecord, resolver: &TraceabilityResolver) -> Self {
        Self {
            certificate_no: record.certificate_no.clone(),
            traceability: resolver.resolve_statement(&record.traceability),
            due_date: resolve_due_date(&record.due),
            ranges: record.ranges.iter().map(RangeSheet::build).collect(),
        }
    }
}

impl RangeSheet {
    pub fn build(entry: &RangeRecord) -> Self {
        let range = &entry.range;
        let results = &entry.results;
        let fmt = RangeFormatter::for_range(range);

        let accuracy = (0..range.point_count().unwrap_or(0))
            .map(|idx| AccuracyRow {
                point: idx + 1,
                nominal: fmt.value(results.nominal(idx)),
                correction: fmt.correction(results.correction(idx)),
                expanded_uncertainty: fmt.uncertainty(results.expanded_uncertainty(idx)),
                coverage_factor: format_coverage_factor(results.coverage_factor(idx)),
            })
            .collect();

        let repeatability = (0..results.rtest.std.len())
            .map(|idx| RepeatabilityRow {
                point: idx + 1,
                std_dev: fmt.value(reading_at(&results.rtest.std, idx)),
                max_diff: fmt.value(reading_at(&results.rtest.max_diff_between_readings, idx)),
            })
            .collect();

        let etest = &results.etest;
        let eccentricity = EccentricitySheet {
            test_load: fmt.value(etest.test_load.as_ref()),
            values: etest.values.iter().map(|v| fmt.value(v)).collect(),
            max_error: fmt.value(etest.max_error.as_ref()),
        };

        Self {
            unit: range.unit(),
            unit_symbol: range.unit().symbol(),
            resolution: fmt.value(Reading::from(range.resolution_value())),
            range_min: fmt.value(range.range_min()),
            range_max: fmt.value(range.range_max()),
            accuracy,
            repeatability,
            eccentricity,
        }
    }
}

fn format_coverage_factor(k: Reading) -> String {
    k.value()
        .map(|k| format_to_decimal_string(k, COVERAGE_FACTOR_DECIMALS))
        .unwrap_or_default()
}

//! Core module - formatting engine, lookup tables and configuration

pub mod certificate;
pub mod config;
pub mod correction;
pub mod due_date;
pub mod precision;
pub mod reading;
pub mod tables;
pub mod traceability;
pub mod uncertainty;
pub mod units;

pub use certificate::{
    AccuracyRow, CertificateSheet, EccentricitySheet, RangeFormatter, RangeSheet, RepeatabilityRow,
};
pub use config::{Config, ConfigError};
pub use correction::format_signed_correction;
pub use due_date::{add_months, resolve_due_date, DUE_DATE_FORMAT, NOT_APPLICABLE};
pub use precision::{count_decimals, format_to_decimal_string, render_decimal, to_decimal, MAX_DECIMALS};
pub use reading::{RawReading, Reading};
pub use tables::{CalibrationLab, TablesError, TraceabilityTables, DEFAULT_LAB_INDEX};
pub use traceability::{join_accreditation_numbers, TraceabilityResolver};
pub use uncertainty::round_uncertainty_for_display;
pub use units::{convert_value_for_display, display_precision};

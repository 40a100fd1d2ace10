//! Calibration record documents
//!
//! A record bundles everything one certificate needs: the traceability
//! selection, the due-date request and one or more calibrated ranges with
//! their results. Field names follow the document store's camelCase.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::reading::deserialize_code;
use crate::entities::{CalibrationRange, CalibrationResultSeries, DueDateRequest, TraceabilityConfig};
use crate::yaml::{parse_yaml_file, YamlError};

/// File extensions recognised as record documents
pub const RECORD_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// A calibrated range together with its results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeRecord {
    #[serde(flatten)]
    pub range: CalibrationRange,

    #[serde(default)]
    pub results: CalibrationResultSeries,
}

/// One calibration record, as exported from the lab database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationRecord {
    #[serde(
        default,
        deserialize_with = "deserialize_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_no: Option<String>,

    #[serde(flatten)]
    pub traceability: TraceabilityConfig,

    #[serde(flatten)]
    pub due: DueDateRequest,

    #[serde(default)]
    pub ranges: Vec<RangeRecord>,
}

/// Errors reading a record file
#[derive(Debug, Error, Diagnostic)]
pub enum RecordError {
    #[error("Not a record file (expected .yaml, .yml or .json): {0}")]
    #[diagnostic(code(calcert::record::extension))]
    UnsupportedFile(PathBuf),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Yaml(#[from] YamlError),
}

impl CalibrationRecord {
    /// Read a record from a YAML or JSON file
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        if !is_record_file(path) {
            return Err(RecordError::UnsupportedFile(path.to_path_buf()));
        }
        Ok(parse_yaml_file(path)?)
    }
}

/// Whether a path has a record file extension
pub fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| RECORD_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

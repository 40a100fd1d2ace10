//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get a calcert command isolated from the user's config
pub fn calcert() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("calcert"));
    cmd.env("CALCERT_CONFIG", "/nonexistent/calcert/config.yaml")
        .env_remove("CALCERT_TABLES")
        .env_remove("RUST_LOG");
    cmd
}

/// A two-point gram range with every result table filled in
pub const GRAM_RECORD: &str = r#"
certificateNo: COC-2024-0117
traceabilityType: "3"
traceabilityCalibrationLab: [lab-a, lab-c]
dueDateRequested: "yes"
dateCalibrated: "2024-01-31"
dueDateDuration: 1
ranges:
  - resolution: 0.01
    rangeMinCalibration: 0
    rangeMaxCalibration: 220
    unitUsedForCOC: gram
    calibrationPointNo: 2
    results:
      nominalValues: [100, 200]
      corrections: [0.004, -0.013]
      coverageFactors: [2, 2.1]
      expandedUncertainties: [0.0031, 0.07]
      rtest:
        std: [0.005]
        maxDiffBetweenReadings: [0.02]
      etest:
        testLoad: 100
        values: [0, 0.01, -0.01]
        maxError: 0.01
"#;

/// A kilogram range with a manual due date and a fixed statement
pub const KILOGRAM_RECORD: &str = r#"
certificateNo: COC-2024-0200
traceabilityType: "1"
dueDateRequested: "no"
dueDate: "On request"
ranges:
  - resolution: 0.01
    rangeMinCalibration: 0
    rangeMaxCalibration: 30000
    unitUsedForCOC: kilogram
    calibrationPointNo: 1
    results:
      nominalValues: [12345]
      corrections: ["-0.0001"]
      expandedUncertainties: [0.011]
"#;

/// Write a file (creating parent directories) and return its path
pub fn write_file(tmp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = tmp.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Lookup tables with a single lab, used to check table overrides
pub const SMALL_TABLES: &str = r#"
map:
  "1": Traceable through the house standard.
  "2": Traceable through an accredited laboratory.
countries: [Freedonia]
accreditation_bodies: [Freedonia Accreditation Service]
calibration_labs:
  - value: house
    accreditation_no: "900"
    signatory: Freedonia Mutual Recognition Scheme
"#;

/// Path as a UTF-8 string for command arguments
pub fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

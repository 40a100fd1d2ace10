//! Formatting engine tests through the public library API

use calcert::core::{
    convert_value_for_display, count_decimals, format_signed_correction,
    join_accreditation_numbers, resolve_due_date, round_uncertainty_for_display,
    CertificateSheet, TraceabilityResolver, TraceabilityTables, NOT_APPLICABLE,
};
use calcert::entities::{CalibrationRecord, DueDateRequest, MassUnit, TraceabilityConfig};

fn builtin_resolver() -> TraceabilityResolver {
    TraceabilityResolver::new(TraceabilityTables::builtin().unwrap())
}

// ============================================================================
// Display Formatting
// ============================================================================

#[test]
fn test_gram_and_kilogram_display() {
    assert_eq!(convert_value_for_display(12.345, 0.01, MassUnit::Gram), "12.35");
    assert_eq!(convert_value_for_display(12345.0, 0.01, MassUnit::Kilogram), "12.34500");
}

#[test]
fn test_kilogram_precision_shift() {
    for (resolution, grams, kilograms) in [(0.01, 2, 5), (0.1, 1, 4), (1.0, 0, 3), (0.5, 1, 4)] {
        assert_eq!(count_decimals(resolution), grams, "resolution {resolution}");
        assert_eq!(count_decimals(resolution / 1000.0), kilograms, "resolution {resolution}");
    }
}

#[test]
fn test_uncertainty_ceiling() {
    assert_eq!(round_uncertainty_for_display(0.0031, 0.01, MassUnit::Gram), "0.01");
    assert_eq!(round_uncertainty_for_display(0.011, 0.01, MassUnit::Kilogram), "0.00002");
}

#[test]
fn test_signed_corrections() {
    assert_eq!(format_signed_correction("0.00"), "0.00");
    assert_eq!(format_signed_correction("-0.00"), "0.00");
    assert_eq!(format_signed_correction("0.05"), "+0.05");
    assert_eq!(format_signed_correction("-0.05"), "-0.05");
}

// ============================================================================
// Traceability
// ============================================================================

#[test]
fn test_composed_statement_defaults() {
    let tables = TraceabilityTables::builtin().unwrap();
    let default_lab = tables.default_lab().unwrap().clone();
    let statement = builtin_resolver().resolve_statement(&TraceabilityConfig::of_type("3"));

    assert!(statement.contains(&format!("to {}'s national standards", tables.countries[0])));
    assert!(statement.contains(&format!("{} is a signatory", tables.accreditation_bodies[0])));
    assert!(statement.contains(&default_lab.accreditation_no));
    assert!(statement.ends_with(&default_lab.signatory));
}

#[test]
fn test_three_labs_join_naturally() {
    assert_eq!(join_accreditation_numbers(&["A", "B", "C"]), "A, B and C");

    let config = TraceabilityConfig::of_type("3").with_labs(["lab-a", "lab-b", "lab-c"]);
    let statement = builtin_resolver().resolve_statement(&config);
    assert!(statement.contains("through SAMM 001, 002 and 003 via"));
}

#[test]
fn test_empty_lab_selection_leaves_blank_fragment() {
    let config = TraceabilityConfig::of_type("3").with_labs(Vec::<String>::new());
    let statement = builtin_resolver().resolve_statement(&config);
    assert!(statement.contains("through SAMM  via"));
    assert!(statement.ends_with("is a signatory to the "));
}

// ============================================================================
// Due Dates
// ============================================================================

#[test]
fn test_due_date_month_end_clamp() {
    let request = DueDateRequest::computed("2024-01-31", 1);
    assert_eq!(resolve_due_date(&request), "29 February 2024");

    let request = DueDateRequest::computed("2023-01-31", 1);
    assert_eq!(resolve_due_date(&request), "28 February 2023");
}

#[test]
fn test_due_date_manual_override() {
    assert_eq!(resolve_due_date(&DueDateRequest::manual(Some("Custom text"))), "Custom text");
    assert_eq!(resolve_due_date(&DueDateRequest::manual(None)), NOT_APPLICABLE);
}

// ============================================================================
// Certificate Sheets
// ============================================================================

#[test]
fn test_certificate_sheet_from_record() {
    let yaml = r#"
certificateNo: COC-2024-0300
traceabilityType: "2"
dueDateRequested: "yes"
dateCalibrated: {seconds: 1706659200, nanoseconds: 0}
dueDateDuration: "6"
ranges:
  - resolution: 0.1
    rangeMinCalibration: 0
    rangeMaxCalibration: 6000
    unitUsedForCOC: kilogram
    calibrationPointNo: 3
    results:
      nominalValues: [1000, 3000]
      corrections: [0.2, -0.4]
      coverageFactors: [2]
      expandedUncertainties: [0.31, 0.5]
"#;
    let record: CalibrationRecord = serde_yml::from_str(yaml).unwrap();
    let sheet = CertificateSheet::build(&record, &builtin_resolver());

    assert_eq!(sheet.certificate_no.as_deref(), Some("COC-2024-0300"));
    assert!(sheet.traceability.contains("accredited under SAMM"));
    assert_eq!(sheet.due_date, "31 July 2024");

    let range = &sheet.ranges[0];
    assert_eq!(range.unit_symbol, "kg");
    assert_eq!(range.resolution, "0.0001");
    assert_eq!(range.range_max, "6.0000");
    assert_eq!(range.accuracy.len(), 3);

    let first = &range.accuracy[0];
    assert_eq!(first.nominal, "1.0000");
    assert_eq!(first.correction, "+0.0002");
    assert_eq!(first.expanded_uncertainty, "0.0004");
    assert_eq!(first.coverage_factor, "2.00");

    let second = &range.accuracy[1];
    assert_eq!(second.correction, "-0.0004");
    assert_eq!(second.expanded_uncertainty, "0.0005");
    assert_eq!(second.coverage_factor, "");

    let third = &range.accuracy[2];
    assert_eq!(third.nominal, "");
    assert_eq!(third.correction, "");
}

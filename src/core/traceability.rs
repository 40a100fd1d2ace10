//! Traceability statement resolution
//!
//! Types `"1"` and `"2"` map straight to a fixed sentence. Type `"3"` composes
//! one from a country, an accreditation body and the accreditation numbers of
//! the selected calibration labs.

use log::debug;

use crate::core::tables::{CalibrationLab, TraceabilityTables};
use crate::entities::TraceabilityConfig;

/// Resolves traceability statements against a set of lookup tables
#[derive(Debug, Clone)]
pub struct TraceabilityResolver {
    tables: TraceabilityTables,
}

impl TraceabilityResolver {
    pub fn new(tables: TraceabilityTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &TraceabilityTables {
        &self.tables
    }

    /// The statement printed on the certificate, or `""` when none applies
    pub fn resolve_statement(&self, config: &TraceabilityConfig) -> String {
        match config.traceability_type.as_deref().map(str::trim) {
            None | Some("") => String::new(),
            Some(code @ ("1" | "2")) => self.tables.map.get(code).cloned().unwrap_or_else(|| {
                debug!("no fixed traceability statement for type {code}");
                String::new()
            }),
            Some("3") => self.composed_statement(config),
            Some(other) => {
                debug!("unknown traceability type '{other}'");
                String::new()
            }
        }
    }

    /// Labs a type `"3"` selection resolves to, in selection order
    ///
    /// Without a selection this is the table's default lab. Keys with no
    /// table entry are dropped.
    pub fn matched_labs(&self, config: &TraceabilityConfig) -> Vec<&CalibrationLab> {
        match &config.traceability_calibration_lab {
            None => self.tables.default_lab().into_iter().collect(),
            Some(keys) => keys
                .iter()
                .filter_map(|key| {
                    let lab = self.tables.lab(key);
                    if lab.is_none() {
                        debug!("calibration lab '{key}' not found in lookup tables");
                    }
                    lab
                })
                .collect(),
        }
    }

    fn composed_statement(&self, config: &TraceabilityConfig) -> String {
        let country = non_empty(config.traceability_country.as_deref())
            .or_else(|| self.tables.default_country())
            .unwrap_or_default();
        let accreditation_body = non_empty(config.traceability_accreditation_body.as_deref())
            .or_else(|| self.tables.default_accreditation_body())
            .unwrap_or_default();

        let labs = self.matched_labs(config);
        let numbers: Vec<&str> = labs.iter().map(|lab| lab.accreditation_no.as_str()).collect();
        // Signatory comes from the first lab only
        let signatory = labs.first().map(|lab| lab.signatory.as_str()).unwrap_or_default();

        format!(
            "The measurement results included in this document are traceable to {}'s national standards through SAMM {} via calibration Certificate No. as indicated below. {} is a signatory to the {}",
            country,
            join_accreditation_numbers(&numbers),
            accreditation_body,
            signatory
        )
    }
}

/// Join as a natural-language list: `"A"`, `"A and B"`, `"A, B and C"`
pub fn join_accreditation_numbers(numbers: &[&str]) -> String {
    match numbers {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

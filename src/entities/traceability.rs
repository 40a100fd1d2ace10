//! Traceability selection of a calibration record

use serde::{Deserialize, Serialize};

use crate::core::reading::deserialize_code;

/// Which traceability statement a certificate carries
///
/// Types `"1"` and `"2"` are fixed statements. Type `"3"` composes a
/// statement from a country, an accreditation body and one or more
/// calibration labs; those fields are ignored for the other types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceabilityConfig {
    #[serde(
        default,
        deserialize_with = "deserialize_code",
        skip_serializing_if = "Option::is_none"
    )]
    pub traceability_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traceability_country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traceability_accreditation_body: Option<String>,

    /// Lab lookup keys (`value` field of the lab table)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traceability_calibration_lab: Option<Vec<String>>,
}

impl TraceabilityConfig {
    /// Selection of a traceability type with no overrides
    pub fn of_type(code: impl Into<String>) -> Self {
        Self {
            traceability_type: Some(code.into()),
            ..Default::default()
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.traceability_country = Some(country.into());
        self
    }

    pub fn with_accreditation_body(mut self, body: impl Into<String>) -> Self {
        self.traceability_accreditation_body = Some(body.into());
        self
    }

    pub fn with_labs<I, S>(mut self, labs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.traceability_calibration_lab = Some(labs.into_iter().map(Into::into).collect());
        self
    }
}

//! Recalibration due-date request and calibration date inputs

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::reading::RawReading;

/// Date formats tried, in order, for textual calibration dates
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%Y/%m/%d", "%d.%m.%Y", "%Y%m%d"];

/// Datetime formats without an offset
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A calibration date in any of the shapes records store it in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateLike {
    /// Document-store timestamp
    Timestamp {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
    /// Milliseconds since the Unix epoch
    EpochMillis(i64),
    /// Textual date or timestamp
    Text(String),
}

impl DateLike {
    /// Calendar date (UTC for instants), `None` when unparseable
    pub fn to_date(&self) -> Option<NaiveDate> {
        match self {
            DateLike::Timestamp {
                seconds,
                nanoseconds,
            } => DateTime::from_timestamp(*seconds, *nanoseconds).map(|dt| dt.date_naive()),
            DateLike::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.date_naive()),
            DateLike::Text(s) => parse_date_text(s.trim()),
        }
    }
}

impl From<NaiveDate> for DateLike {
    fn from(date: NaiveDate) -> Self {
        DateLike::Text(date.format("%Y-%m-%d").to_string())
    }
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        DateLike::Text(s.to_string())
    }
}

fn parse_date_text(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// How a certificate's recalibration due date is decided
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDateRequest {
    /// `"yes"` computes the date, `"no"` uses the `due_date` override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_requested: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_calibrated: Option<DateLike>,

    /// Months between calibration and the due date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date_duration: Option<RawReading>,

    /// Free-text due date, used only when no date is requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl DueDateRequest {
    /// A computed due date `months` after `calibrated`
    pub fn computed(calibrated: impl Into<DateLike>, months: i32) -> Self {
        Self {
            due_date_requested: Some("yes".to_string()),
            date_calibrated: Some(calibrated.into()),
            due_date_duration: Some(RawReading::Number(f64::from(months))),
            due_date: None,
        }
    }

    /// An explicit due date override
    pub fn manual(due_date: Option<&str>) -> Self {
        Self {
            due_date_requested: Some("no".to_string()),
            due_date: due_date.map(String::from),
            ..Default::default()
        }
    }
}

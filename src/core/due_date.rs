//! Recalibration due-date resolution

use chrono::{Months, NaiveDate};
use log::debug;

use crate::core::reading::Reading;
use crate::entities::DueDateRequest;

/// Shown when no due date applies or one cannot be computed
pub const NOT_APPLICABLE: &str = "N/A";

/// Certificate date format, e.g. `05 March 2025`
pub const DUE_DATE_FORMAT: &str = "%d %B %Y";

/// Resolve the due date printed on a certificate
///
/// `"no"` returns the manual override (or `N/A`). Any other request computes
/// calibration date plus the duration in calendar months. Missing or
/// unparseable inputs give `N/A`.
pub fn resolve_due_date(request: &DueDateRequest) -> String {
    let Some(requested) = non_empty(request.due_date_requested.as_deref()) else {
        return NOT_APPLICABLE.to_string();
    };

    if requested.trim().eq_ignore_ascii_case("no") {
        return non_empty(request.due_date.as_deref())
            .unwrap_or(NOT_APPLICABLE)
            .to_string();
    }

    let Some(calibrated) = request.date_calibrated.as_ref() else {
        return NOT_APPLICABLE.to_string();
    };
    let Some(calibrated) = calibrated.to_date() else {
        debug!("unparseable calibration date {calibrated:?}");
        return NOT_APPLICABLE.to_string();
    };
    let Some(months) = Reading::lenient(request.due_date_duration.as_ref()).value() else {
        debug!("due date requested without a usable duration");
        return NOT_APPLICABLE.to_string();
    };

    add_months(calibrated, months.trunc() as i32)
        .map(|due| due.format(DUE_DATE_FORMAT).to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Calendar month addition, clamping to the end of shorter months
///
/// Jan 31 + 1 month is Feb 29 in a leap year and Feb 28 otherwise.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reading::RawReading;
    use crate::entities::DateLike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_computed_due_date_clamps_to_leap_day() {
        let request = DueDateRequest::computed("2024-01-31", 1);
        assert_eq!(resolve_due_date(&request), "29 February 2024");
    }

    #[test]
    fn test_computed_due_date_non_leap_year() {
        let request = DueDateRequest::computed("2023-01-31", 1);
        assert_eq!(resolve_due_date(&request), "28 February 2023");
    }

    #[test]
    fn test_computed_due_date_across_years() {
        let request = DueDateRequest::computed("2024-03-05", 12);
        assert_eq!(resolve_due_date(&request), "05 March 2025");
        let request = DueDateRequest::computed("2024-02-29", 12);
        assert_eq!(resolve_due_date(&request), "28 February 2025");
    }

    #[test]
    fn test_manual_due_date() {
        assert_eq!(
            resolve_due_date(&DueDateRequest::manual(Some("Custom text"))),
            "Custom text"
        );
        assert_eq!(resolve_due_date(&DueDateRequest::manual(None)), "N/A");
        assert_eq!(resolve_due_date(&DueDateRequest::manual(Some(""))), "N/A");
    }

    #[test]
    fn test_missing_inputs_are_not_applicable() {
        assert_eq!(resolve_due_date(&DueDateRequest::default()), "N/A");

        let mut request = DueDateRequest::computed("2024-01-31", 6);
        request.date_calibrated = None;
        assert_eq!(resolve_due_date(&request), "N/A");

        let mut request = DueDateRequest::computed("2024-01-31", 6);
        request.due_date_duration = None;
        assert_eq!(resolve_due_date(&request), "N/A");

        let mut request = DueDateRequest::computed("2024-01-31", 6);
        request.due_date_duration = Some(RawReading::from("twelve"));
        assert_eq!(resolve_due_date(&request), "N/A");
    }

    #[test]
    fn test_unparseable_calibration_date() {
        let request = DueDateRequest::computed("not a date", 6);
        assert_eq!(resolve_due_date(&request), "N/A");
    }

    #[test]
    fn test_duration_as_text_and_timestamp_date() {
        let request = DueDateRequest {
            due_date_requested: Some("yes".to_string()),
            date_calibrated: Some(DateLike::Timestamp {
                seconds: 1_706_659_200,
                nanoseconds: 0,
            }),
            due_date_duration: Some(RawReading::from("6")),
            due_date: Some("ignored".to_string()),
        };
        assert_eq!(resolve_due_date(&request), "31 July 2024");
    }

    #[test]
    fn test_add_months_negative() {
        assert_eq!(add_months(ymd(2024, 3, 31), -1), Some(ymd(2024, 2, 29)));
        assert_eq!(add_months(ymd(2024, 3, 31), 0), Some(ymd(2024, 3, 31)));
    }
}

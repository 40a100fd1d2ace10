//! Mass unit conversion for certificate display
//!
//! Readings and resolutions are always recorded in grams. Showing them in
//! kilograms moves the decimal point three places, which also changes how many
//! decimals the resolution implies, so display precision is recomputed from
//! the scaled resolution rather than carried over.

use log::debug;

use crate::core::precision::{count_decimals, render_decimal, to_decimal};
use crate::core::reading::Reading;
use crate::entities::MassUnit;

/// Decimal places a reading gets when shown in `unit`
///
/// Returns `None` when the resolution is zero, negative or not a number.
pub fn display_precision(resolution: f64, unit: MassUnit) -> Option<i32> {
    if !(resolution.is_finite() && resolution > 0.0) {
        return None;
    }
    let decimals = match unit {
        MassUnit::Gram => count_decimals(resolution),
        MassUnit::Kilogram => count_decimals(resolution / 1000.0),
    };
    Some(decimals as i32)
}

/// Convert a gram reading to `unit` and format it at the resolution's precision
///
/// Missing or non-numeric readings and degenerate resolutions produce an
/// empty string, which callers render as a blank cell.
pub fn convert_value_for_display(
    value: impl Into<Reading>,
    resolution: f64,
    unit: MassUnit,
) -> String {
    let Some(value) = value.into().value() else {
        return String::new();
    };
    let Some(precision) = display_precision(resolution, unit) else {
        debug!("resolution {resolution} is not positive, leaving value blank");
        return String::new();
    };

    let Some(grams) = to_decimal(value) else {
        return String::new();
    };
    match grams.checked_mul(unit.per_gram()) {
        Some(scaled) => render_decimal(scaled, precision),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reading::RawReading;

    #[test]
    fn test_gram_display_uses_resolution_decimals() {
        assert_eq!(convert_value_for_display(12.345, 0.01, MassUnit::Gram), "12.35");
        assert_eq!(convert_value_for_display(200.0, 0.1, MassUnit::Gram), "200.0");
        assert_eq!(convert_value_for_display(-0.004, 0.01, MassUnit::Gram), "0.00");
    }

    #[test]
    fn test_kilogram_display_rescales_precision() {
        assert_eq!(convert_value_for_display(12345.0, 0.01, MassUnit::Kilogram), "12.34500");
        assert_eq!(convert_value_for_display(500.0, 1.0, MassUnit::Kilogram), "0.500");
        assert_eq!(convert_value_for_display(20000.0, 10.0, MassUnit::Kilogram), "20.00");
    }

    #[test]
    fn test_precision_shift_between_units() {
        assert_eq!(display_precision(0.01, MassUnit::Gram), Some(2));
        assert_eq!(display_precision(0.01, MassUnit::Kilogram), Some(5));
        assert_eq!(display_precision(100.0, MassUnit::Kilogram), Some(1));
    }

    #[test]
    fn test_missing_or_text_values_are_blank() {
        assert_eq!(convert_value_for_display(None::<f64>, 0.01, MassUnit::Gram), "");
        assert_eq!(convert_value_for_display(f64::NAN, 0.01, MassUnit::Gram), "");
        let text = RawReading::from("12.3");
        assert_eq!(convert_value_for_display(&text, 0.01, MassUnit::Gram), "");
    }

    #[test]
    fn test_kilogram_shift_is_exact() {
        assert_eq!(convert_value_for_display(1005.0, 1.0, MassUnit::Kilogram), "1.005");
        assert_eq!(convert_value_for_display(1234.5, 0.1, MassUnit::Kilogram), "1.2345");
        assert_eq!(convert_value_for_display(1e30, 0.01, MassUnit::Gram), "");
    }

    #[test]
    fn test_degenerate_resolution_is_blank() {
        assert_eq!(convert_value_for_display(1.0, 0.0, MassUnit::Gram), "");
        assert_eq!(convert_value_for_display(1.0, -0.01, MassUnit::Kilogram), "");
        assert_eq!(convert_value_for_display(1.0, f64::NAN, MassUnit::Gram), "");
    }
}

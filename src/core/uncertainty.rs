//! Expanded uncertainty rounding
//!
//! An expanded uncertainty is never reported smaller than the instrument can
//! resolve: the value is rounded UP to the next multiple of the display
//! resolution, never to nearest and never down.

use log::debug;
use rust_decimal::Decimal;

use crate::core::precision::{render_decimal, to_decimal};
use crate::core::reading::Reading;
use crate::core::units::display_precision;
use crate::entities::MassUnit;

/// Round an expanded uncertainty up to the resolution in `unit` and format it
///
/// Same blank-on-missing contract as
/// [`convert_value_for_display`](crate::core::units::convert_value_for_display).
/// The ceiling is taken in exact decimal arithmetic, so a value a hair above
/// a step always moves to the next step.
pub fn round_uncertainty_for_display(
    value: impl Into<Reading>,
    resolution: f64,
    unit: MassUnit,
) -> String {
    let Some(value) = value.into().value() else {
        return String::new();
    };
    let Some(precision) = display_precision(resolution, unit) else {
        debug!("resolution {resolution} cannot bound an uncertainty, leaving value blank");
        return String::new();
    };

    match ceil_to_step(value, resolution, unit.per_gram()) {
        Some(rounded) => render_decimal(rounded, precision),
        None => String::new(),
    }
}

/// Smallest multiple of `resolution * factor` not below `value * factor`
fn ceil_to_step(value: f64, resolution: f64, factor: Decimal) -> Option<Decimal> {
    let step = to_decimal(resolution)?.checked_mul(factor)?;
    if step <= Decimal::ZERO {
        return None;
    }
    let scaled = to_decimal(value)?.checked_mul(factor)?;
    scaled.checked_div(step)?.ceil().checked_mul(step)
}

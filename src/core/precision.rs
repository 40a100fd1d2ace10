//! Decimal precision helpers
//!
//! Display precision for a reading is derived from the instrument resolution:
//! a balance reading to 0.01 g shows two decimals. Both helpers work on the
//! shortest round-trip decimal form of an `f64` (Rust's `Display`), which is
//! never exponential, so `1e-7` is seen as `0.0000001`.

use log::debug;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of digits after the decimal point in a value's canonical form
///
/// Returns 0 for integers and for NaN/infinite input.
pub fn count_decimals(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let repr = value.to_string();
    match repr.split_once('.') {
        Some((_, frac)) => frac.len() as u32,
        None => 0,
    }
}

/// Most decimals a formatted value can carry
pub const MAX_DECIMALS: u32 = 28;

/// Magnitudes below this round to zero at every supported precision
const UNDERFLOW: f64 = 1e-29;

/// Render `value` with exactly `precision` decimals
///
/// Rounds half away from zero at the last kept digit of the canonical decimal
/// form, so `12.345` at two decimals gives `"12.35"`. Negative precision is
/// clamped to 0, a result of zero never carries a minus sign, and non-finite
/// input renders as an empty string. So do precisions above [`MAX_DECIMALS`]
/// and magnitudes beyond what a [`Decimal`] holds.
pub fn format_to_decimal_string(value: f64, precision: i32) -> String {
    to_decimal(value)
        .map(|decimal| render_decimal(decimal, precision))
        .unwrap_or_default()
}

/// Exact decimal form of an `f64`'s shortest round-trip representation
///
/// `None` for NaN, infinities and magnitudes a [`Decimal`] cannot hold.
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    if value.abs() < UNDERFLOW {
        return Some(Decimal::ZERO);
    }
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .or_else(|| {
            debug!("{value} is outside the decimal range");
            None
        })
}

/// Round half away from zero and pad to exactly `precision` decimals
pub fn render_decimal(value: Decimal, precision: i32) -> String {
    let precision = precision.max(0) as u32;
    if precision > MAX_DECIMALS {
        debug!("precision {precision} exceeds {MAX_DECIMALS} decimals, leaving value blank");
        return String::new();
    }

    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{:.*}", precision as usize, rounded)
}

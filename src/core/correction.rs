//! Signed correction display
//!
//! A correction that rounds to zero is shown unsigned. Only genuinely
//! non-zero corrections carry a `+` or `-`.

/// Add an explicit sign to an already formatted correction
///
/// Input that does not parse as a number is returned unchanged.
pub fn format_signed_correction(formatted: &str) -> String {
    let trimmed = formatted.trim();
    let Ok(parsed) = trimmed.parse::<f64>() else {
        return formatted.to_string();
    };
    let formatted = trimmed;

    if parsed > 0.0 {
        if is_all_zeros(formatted) {
            formatted.to_string()
        } else {
            format!("+{formatted}")
        }
    } else if formatted.contains('-') {
        let magnitude = formatted.replace('-', "");
        if is_all_zeros(&magnitude) {
            magnitude
        } else {
            format!("-{magnitude}")
        }
    } else {
        formatted.to_string()
    }
}

/// Matches `0*\.?0*`: optional zeros, optional point, optional zeros
fn is_all_zeros(s: &str) -> bool {
    let zeros = |part: &str| part.chars().all(|c| c == '0');
    match s.split_once('.') {
        Some((int_part, frac_part)) => zeros(int_part) && zeros(frac_part),
        None => zeros(s),
    }
}

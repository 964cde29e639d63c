//! Result formatting for the display.

/// Decimal places kept for non-integral results.
const MAX_DECIMALS: usize = 10;

/// Render a finite value for the entry line.
///
/// Integral values print without a decimal point. Anything else is rounded
/// to ten decimal places with trailing zeros (and a bare trailing '.')
/// removed. Negative zero prints as "0".
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        // Display for f64 never switches to exponent notation.
        return if n == 0.0 { "0".to_string() } else { format!("{}", n) };
    }

    let s = format!("{:.*}", MAX_DECIMALS, n);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Render a finite value at full precision.
///
/// Uses the shortest representation that reads back as the same f64, so
/// nothing is rounded away. Integral values print without a decimal point.
pub fn format_decimal(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    let s = format!("{}", n);
    match s.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => s,
    }
}

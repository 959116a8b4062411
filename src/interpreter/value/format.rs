/// Significant digits kept when rendering a number.
pub const PRECISION: usize = 14;
/// Smallest decimal exponent rendered positionally.
pub const LOWER_EXP: i32 = -3;
/// Decimal exponents at or above this use exponent notation.
pub const UPPER_EXP: i32 = 5;

/// Renders a float for display.
///
/// The value is rounded to [`PRECISION`] significant digits and trailing
/// zeros are dropped. Values whose decimal exponent lies in
/// `[LOWER_EXP, UPPER_EXP)` are written positionally, everything else as
/// `<mantissa>e+<exp>` or `<mantissa>e-<exp>`. Non-finite values are spelled
/// `Infinity`, `-Infinity` and `NaN`.
///
/// # Example
/// ```
/// use numtap::interpreter::value::format::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.1 + 0.2), "0.3");
/// assert_eq!(format_number(2000.0), "2000");
/// assert_eq!(format_number(123_456.0), "1.23456e+5");
/// assert_eq!(format_number(0.000_25), "2.5e-4");
/// assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{:.*e}", PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (LOWER_EXP..UPPER_EXP).contains(&exponent) {
        let rounded: f64 = scientific.parse().unwrap_or(value);
        return rounded.to_string();
    }

    let mantissa = trim_fraction(mantissa);
    if exponent < 0 {
        format!("{mantissa}e-{}", exponent.unsigned_abs())
    } else {
        format!("{mantissa}e+{exponent}")
    }
}

/// Drops trailing zeros, and a trailing dot, from a decimal fraction.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

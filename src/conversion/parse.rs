//! Numeric input parsing and result formatting

/// Parse the raw text field value. Anything unparsable is 0.0.
///
/// The input is not trimmed: " 12" is treated as unparsable, like the
/// decimal pad it stands in for never produces whitespace.
pub fn parse_numeric(raw: &str) -> f64 {
    raw.parse::<f64>().unwrap_or(0.0)
}

/// Largest magnitude still written out in positional notation (2^53)
const POSITIONAL_MAX: f64 = 9_007_199_254_740_992.0;

/// Format a computed value for the result label
///
/// Integral values keep a single decimal place ("32.0"), everything else uses
/// the shortest representation that round-trips ("273.15"). Magnitudes below
/// 1e-4 or above 2^53 switch to exponent form with a signed, two-digit
/// exponent ("1e-05", "9.5e+15").
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        let exponent: i32 = exponent.parse().unwrap_or(0);
        if value != 0.0 && (exponent < -4 || value.abs() > POSITIONAL_MAX) {
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
        }
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

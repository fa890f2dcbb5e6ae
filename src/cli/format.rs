//! Number formatting for displayed durations

use crate::cli::constants::*;

/// Most fraction digits ever printed for a sub-unit value
const MAX_FRACTION_DIGITS: usize = 30;

/// Formats a duration for display
///
/// Values of one or more keep up to three fraction digits. Smaller values keep
/// three significant digits so 0.000012 s does not collapse to zero. Trailing
/// zeros are dropped and the integer part is grouped by thousands:
///
/// ```
/// use packettime::cli::format_duration;
///
/// assert_eq!(format_duration(1200.0), "1,200");
/// assert_eq!(format_duration(0.012), "0.012");
/// assert_eq!(format_duration(12.000000000000002), "12");
/// ```
pub fn format_duration(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() >= SCIENTIFIC_THRESHOLD {
        return format!("{:.3e}", value);
    }

    let magnitude = value.abs();
    let text = format!("{:.*}", fraction_digits(magnitude), magnitude);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(text.len() + text.len() / GROUP_SIZE + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn fraction_digits(magnitude: f64) -> usize {
    if magnitude >= 1.0 {
        return DISPLAY_FRACTION_DIGITS;
    }
    // zeros between the decimal point and the first significant digit
    let leading_zeros = (-magnitude.log10().floor()) as usize - 1;
    (leading_zeros + DISPLAY_FRACTION_DIGITS).min(MAX_FRACTION_DIGITS)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / GROUP_SIZE);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % GROUP_SIZE == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

//! Fixed-point rendering.

use super::decimal::Digits;
use super::precision::Precision;

/// Magnitude from which fixed-point rendering falls back to scientific text.
const SCIENTIFIC_THRESHOLD: f64 = 1e21;

/// Render `value` with exactly `precision` fraction digits.
///
/// The exact binary value is rounded half up. NaN and infinities render as
/// `NaN`, `Infinity` and `-Infinity`; negative zero renders as zero; magnitudes
/// of `1e21` and above use shortest scientific text such as `1e+21`.
pub fn render(value: f64, precision: Precision) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    if value.abs() >= SCIENTIFIC_THRESHOLD {
        return scientific(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let digits = Digits::exact(value.abs()).round_half_up(precision.digits());

    if digits.fraction.is_empty() {
        format!("{}{}", sign, digits.integer)
    } else {
        format!("{}{}.{}", sign, digits.integer, digits.fraction)
    }
}

/// Shortest round-trip scientific text with an explicit exponent sign.
fn scientific(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(digits: u32) -> Precision {
        Precision::new(digits).unwrap()
    }

    #[test]
    fn test_render_pads_and_keeps_digits() {
        assert_eq!(render(3.0, p(2)), "3.00");
        assert_eq!(render(1.5, p(0)), "2");
        assert_eq!(render(2.5, p(0)), "3");
        assert_eq!(render(-2.5, p(0)), "-3");
        assert_eq!(render(0.125, p(2)), "0.13");
    }

    #[test]
    fn test_render_uses_exact_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(render(1.005, p(2)), "1.00");
        assert_eq!(render(0.1, p(20)), "0.10000000000000000555");
    }

    #[test]
    fn test_render_sentinels() {
        assert_eq!(render(f64::NAN, p(2)), "NaN");
        assert_eq!(render(f64::INFINITY, p(2)), "Infinity");
        assert_eq!(render(f64::NEG_INFINITY, p(2)), "-Infinity");
    }

    #[test]
    fn test_render_negative_zero_as_zero() {
        assert_eq!(render(-0.0, p(2)), "0.00");
        assert_eq!(render(-0.0, p(0)), "0");
    }

    #[test]
    fn test_render_large_magnitudes() {
        assert_eq!(render(1e21, p(2)), "1e+21");
        assert_eq!(render(-1.5e22, p(2)), "-1.5e+22");
        assert_eq!(render(1.2345e300, p(0)), "1.2345e+300");
        assert_eq!(render(999_999_999_999_999_900_000.0, p(1)), "999999999999999868928.0");
    }
}

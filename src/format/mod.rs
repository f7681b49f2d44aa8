// Copyright (c) 2025-2026 the truncfmt contributors
// SPDX-License-Identifier: Apache-2.0

//! Floor-truncating number formatting.
//!
//! Every formatter runs the same two steps:
//!
//! 1. **Truncate** - `floor(value * 10^p) / 10^p` in binary floating point, so
//!    negative values move toward negative infinity (`-1.236` becomes `-1.24`).
//! 2. **Render** - either fixed-point text ([`format_fixed`]) or locale-grouped
//!    text ([`format_grouped`]), with exactly `p` fraction digits.
//!
//! Inputs may be numbers or text. Malformed text is not an error; it becomes NaN
//! and renders as the NaN sentinel.
//!
//! ```
//! use truncfmt::format::{Precision, format_fixed, format_grouped};
//!
//! let two = Precision::default();
//! assert_eq!(format_fixed(-1.236, two), "-1.24");
//! assert_eq!(format_fixed("42", Precision::new(0)?), "42");
//! assert_eq!(format_grouped(1234567.891, two), "1,234,567.89");
//! # Ok::<(), truncfmt::utils::error::TruncfmtError>(())
//! ```

mod decimal;
pub mod fixed;
pub mod grouped;
pub mod input;
pub mod precision;

pub use input::{NumericInput, parse_decimal_prefix};
pub use precision::Precision;

use crate::utils::error::TruncfmtError;
use clap::ValueEnum;
use num_format::Locale;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Floor `value` at `precision` decimal places.
///
/// Arithmetic is plain `f64`, so results carry binary artifacts:
/// `truncate(0.29, 2)` is `0.28` because `0.29 * 100` is `28.999999999999996`.
pub fn truncate(value: f64, precision: Precision) -> f64 {
    let factor = precision.factor();
    (value * factor).floor() / factor
}

/// Truncate and render as fixed-point text.
pub fn format_fixed(value: impl Into<NumericInput>, precision: Precision) -> String {
    let truncated = truncate(value.into().to_f64(), precision);
    fixed::render(truncated, precision)
}

/// Truncate and render with `en` digit grouping.
pub fn format_grouped(value: impl Into<NumericInput>, precision: Precision) -> String {
    format_grouped_with_locale(value, precision, &Locale::en)
}

/// Truncate and render with the digit grouping of `locale`.
pub fn format_grouped_with_locale(
    value: impl Into<NumericInput>,
    precision: Precision,
    locale: &Locale,
) -> String {
    let truncated = truncate(value.into().to_f64(), precision);
    grouped::render(truncated, precision, locale)
}

/// Look up a `num_format` locale by name, e.g. `en`, `de`, `en-IN`.
pub fn resolve_locale(name: &str) -> Result<Locale, TruncfmtError> {
    Locale::from_name(name).map_err(|_| TruncfmtError::unknown_locale(name))
}

/// Rendering style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum Style {
    /// Fixed-point text, e.g. `1234567.89`
    #[default]
    Fixed,
    /// Locale digit grouping, e.g. `1,234,567.89`
    Grouped,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Fixed => "fixed",
            Style::Grouped => "grouped",
        }
    }

    /// Truncate and render `value` in this style. `locale` only affects `Grouped`.
    pub fn render(
        self,
        value: impl Into<NumericInput>,
        precision: Precision,
        locale: &Locale,
    ) -> String {
        match self {
            Style::Fixed => format_fixed(value, precision),
            Style::Grouped => format_grouped_with_locale(value, precision, locale),
        }
    }
}

impl FromStr for Style {
    type Err = TruncfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Ok(Style::Fixed),
            "grouped" => Ok(Style::Grouped),
            _ => Err(TruncfmtError::invalid_style(s)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::approx_constant)]
mod tests {
    use super::*;

    fn p(digits: u32) -> Precision {
        Precision::new(digits).unwrap()
    }

    fn fraction_len(text: &str) -> usize {
        text.split_once('.').map_or(0, |(_, frac)| frac.len())
    }

    #[test]
    fn test_format_fixed_basic() {
        assert_eq!(format_fixed(3.14159, p(2)), "3.14");
        assert_eq!(format_fixed("42", p(0)), "42");
        assert_eq!(format_fixed(7, Precision::default()), "7.00");
    }

    #[test]
    fn test_negative_values_floor_toward_negative_infinity() {
        assert_eq!(format_fixed(-1.236, p(2)), "-1.24");
        assert_eq!(format_fixed(-0.001, p(2)), "-0.01");
        assert_eq!(format_fixed(-5.5, p(0)), "-6");
        assert_eq!(format_grouped(-1234.567, p(1)), "-1,234.6");
    }

    #[test]
    fn test_truncation_never_rounds_up() {
        assert_eq!(format_fixed(9.999, p(2)), "9.99");
        assert_eq!(format_fixed(0.129, p(2)), "0.12");
        assert_eq!(format_grouped(999.999, p(2)), "999.99");
    }

    #[test]
    fn test_binary_artifacts_are_preserved() {
        // 2.005 * 100 evaluates to exactly 200.5
        assert_eq!(format_fixed(2.005, p(2)), "2.00");
        // 1.005 * 100 evaluates to 100.49999999999999
        assert_eq!(format_fixed(1.005, p(2)), "1.00");
        // 0.29 * 100 evaluates to 28.999999999999996
        assert_eq!(format_fixed(0.29, p(2)), "0.28");
        assert_eq!(format_grouped(0.29, p(2)), "0.28");
    }

    #[test]
    fn test_format_grouped_basic() {
        assert_eq!(format_grouped(1234567.891, p(2)), "1,234,567.89");
        assert_eq!(format_grouped("9876543.21", p(2)), "9,876,543.21");
        assert_eq!(format_grouped(12345.678, p(0)), "12,345");
        assert_eq!(format_grouped(0.5, p(3)), "0.500");
    }

    #[test]
    fn test_fraction_digit_count_matches_precision() {
        let values = [0.0, 1.0, -1.5, 3.14159, 1234567.891, -0.000_123, 42.424_242];
        for value in values {
            for digits in [0, 1, 2, 5, 10] {
                let fixed = format_fixed(value, p(digits));
                let grouped = format_grouped(value, p(digits));
                assert_eq!(fraction_len(&fixed), digits as usize, "{fixed}");
                assert_eq!(fraction_len(&grouped), digits as usize, "{grouped}");
            }
        }
    }

    #[test]
    fn test_malformed_text_yields_nan_sentinel() {
        assert_eq!(format_fixed("abc", p(2)), "NaN");
        assert_eq!(format_grouped("", p(2)), "NaN");
        assert_eq!(format_fixed("12abc", p(2)), "12.00");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_fixed(-0.0, p(2)), "0.00");
        assert_eq!(format_fixed("-0", p(2)), "0.00");
        assert_eq!(format_grouped(-0.0, p(2)), "-0.00");
    }

    #[test]
    fn test_large_magnitudes() {
        assert_eq!(format_fixed(1e22, p(2)), "1e+22");
        // 1e23 / 100 lands just below 1e21
        assert_eq!(format_fixed(1e21, p(2)), "999999999999999868928.00");
        assert_eq!(format_grouped(1e22, p(2)), "10,000,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_high_precision_uses_exact_power_of_ten() {
        // 0.1 * 1e80 floors back to the double just above 0.1
        assert_eq!(
            format_fixed(0.1, p(80)),
            "0.10000000000000001942890293094023945741355419158935546875000000000000000000000000"
        );
        assert_eq!(truncate(0.5, p(100)), 0.5);
    }

    #[test]
    fn test_overflow_to_infinity() {
        assert_eq!(format_fixed(1e300, p(10)), "Infinity");
        assert_eq!(format_fixed("-Infinity", p(2)), "-Infinity");
        assert_eq!(format_grouped(f64::INFINITY, p(2)), "\u{221e}");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(3.14159, p(2)), 3.14);
        assert_eq!(truncate(-1.236, p(2)), -1.24);
        assert_eq!(truncate(0.29, p(2)), 0.28);
        assert!(truncate(f64::NAN, p(2)).is_nan());
    }

    #[test]
    fn test_style_render_and_parse() {
        assert_eq!(Style::Fixed.render(1234.5, p(1), &Locale::en), "1234.5");
        assert_eq!(Style::Grouped.render(1234.5, p(1), &Locale::de), "1.234,5");
        assert_eq!("Grouped".parse::<Style>().unwrap(), Style::Grouped);
        assert!("scientific".parse::<Style>().is_err());
        assert_eq!(Style::default().as_str(), "fixed");
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("en").unwrap(), Locale::en);
        assert!(matches!(
            resolve_locale("not-a-locale"),
            Err(TruncfmtError::UnknownLocale(_))
        ));
    }
}

//! Locale-grouped rendering.
//!
//! Separator, decimal mark, minus sign and the NaN/infinity symbols come from
//! `num_format::Locale`. Digits come from the shortest round-trip form of the value,
//! so large magnitudes render as `1,000,000,000,000,000,000,000` rather than their
//! exact binary expansion.

use super::decimal::Digits;
use super::precision::Precision;
use num_format::{Grouping, Locale};

/// Render `value` with locale digit grouping and exactly `precision` fraction digits.
pub fn render(value: f64, precision: Precision, locale: &Locale) -> String {
    if value.is_nan() {
        return locale.nan().to_string();
    }

    // Negative zero keeps its sign here.
    let sign = if value.is_sign_negative() {
        locale.minus_sign()
    } else {
        ""
    };

    if value.is_infinite() {
        return format!("{}{}", sign, locale.infinity());
    }

    let digits = Digits::shortest(value.abs()).round_half_up(precision.digits());
    let integer = group_digits(&digits.integer, locale.grouping(), locale.separator());

    if digits.fraction.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!(
            "{}{}{}{}",
            sign,
            integer,
            locale.decimal(),
            digits.fraction
        )
    }
}

/// Insert `separator` between digit groups, counting from the right.
///
/// `Standard` groups by three, `Indian` groups the last three and then by two,
/// `Posix` leaves the digits alone.
fn group_digits(integer: &str, grouping: Grouping, separator: &str) -> String {
    let sizes: (usize, usize) = match grouping {
        Grouping::Standard => (3, 3),
        Grouping::Indian => (3, 2),
        Grouping::Posix => return integer.to_string(),
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = integer.len();
    let mut size = sizes.0;
    while end > size {
        groups.push(&integer[end - size..end]);
        end -= size;
        size = sizes.1;
    }
    groups.push(&integer[..end]);
    groups.reverse();
    groups.join(separator)
}

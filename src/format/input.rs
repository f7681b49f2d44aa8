//! Numeric input accepted by the formatters.
//!
//! Values arrive either as numbers or as text. Text goes through lenient
//! decimal-prefix parsing: leading whitespace is skipped, the longest prefix that
//! reads as a decimal literal is taken, and anything after it is ignored. Text
//! with no such prefix becomes NaN rather than an error.

/// A number, or text that should be read as one.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// Resolve to a float. Malformed text yields NaN.
    pub fn to_f64(&self) -> f64 {
        match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => parse_decimal_prefix(s),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<f32> for NumericInput {
    fn from(n: f32) -> Self {
        NumericInput::Number(f64::from(n))
    }
}

impl From<i32> for NumericInput {
    fn from(n: i32) -> Self {
        NumericInput::Number(f64::from(n))
    }
}

impl From<u32> for NumericInput {
    fn from(n: u32) -> Self {
        NumericInput::Number(f64::from(n))
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Text(s)
    }
}

impl From<&String> for NumericInput {
    fn from(s: &String) -> Self {
        NumericInput::Text(s.clone())
    }
}

const INFINITY_LITERAL: &str = "Infinity";

/// Whitespace skipped before a literal: Unicode white space, line terminators and BOM.
fn is_leading_space(c: char) -> bool {
    // NEL is Unicode whitespace but not an ECMAScript one
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Parse the longest decimal literal at the start of `text`.
///
/// Accepts `[+-]? (Infinity | digits [. digits] | . digits) ([eE] [+-]? digits)?`.
/// Returns NaN when no literal is present.
pub fn parse_decimal_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(is_leading_space);
    let bytes = trimmed.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if trimmed[pos..].starts_with(INFINITY_LITERAL) {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(&bytes[pos + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp_end = pos + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            pos = exp_end + exp_digits;
        }
    }

    // The prefix is plain ASCII and always a valid float literal by construction.
    trimmed[..pos].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

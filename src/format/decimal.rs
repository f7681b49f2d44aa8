//! Decimal digit strings for finite, non-negative floats.
//!
//! Both renderers work on plain digit strings split at the decimal point. The
//! fixed-point renderer starts from the exact binary value, the grouped renderer
//! from the shortest round-trip digits; both then round half up to the requested
//! number of fraction digits.

/// Integer and fraction digits of a non-negative decimal, without separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    pub integer: String,
    pub fraction: String,
}

impl Digits {
    fn split(text: &str) -> Self {
        match text.split_once('.') {
            Some((integer, fraction)) => Digits {
                integer: integer.to_string(),
                fraction: fraction.to_string(),
            },
            None => Digits {
                integer: text.to_string(),
                fraction: String::new(),
            },
        }
    }

    /// Exact decimal expansion of `value`, which must be finite and non-negative.
    pub fn exact(value: f64) -> Self {
        Self::split(&format!("{:.*}", exact_fraction_digits(value), value))
    }

    /// Shortest digits that round-trip to `value`, which must be finite and non-negative.
    pub fn shortest(value: f64) -> Self {
        Self::split(&value.to_string())
    }

    /// Round to exactly `digits` fraction digits, ties away from zero.
    pub fn round_half_up(mut self, digits: usize) -> Self {
        if self.fraction.len() <= digits {
            let pad = digits - self.fraction.len();
            self.fraction.extend(std::iter::repeat_n('0', pad));
            return self;
        }

        let round_up = self.fraction.as_bytes()[digits] >= b'5';
        self.fraction.truncate(digits);
        if round_up {
            self.increment();
        }
        self
    }

    /// Add one unit in the last fraction place, carrying into the integer part.
    fn increment(&mut self) {
        let mut combined: Vec<u8> = self
            .integer
            .bytes()
            .chain(self.fraction.bytes())
            .collect();

        let mut carry = true;
        for digit in combined.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            combined.insert(0, b'1');
        }

        let split_at = combined.len() - self.fraction.len();
        let fraction = combined.split_off(split_at);
        self.integer = String::from_utf8_lossy(&combined).into_owned();
        self.fraction = String::from_utf8_lossy(&fraction).into_owned();
    }
}

/// Number of fraction digits in the exact decimal expansion of a finite float.
///
/// A float is `m * 2^e`; when `e < 0` the expansion has exactly `-e` fraction
/// digits once trailing zero bits of `m` are folded into `e`.
fn exact_fraction_digits(value: f64) -> usize {
    const MANTISSA_BITS: u64 = 52;
    const EXPONENT_BIAS: i64 = 1075;

    let bits = value.to_bits();
    let biased = i64::try_from((bits >> MANTISSA_BITS) & 0x7ff).unwrap_or(0);
    let mut mantissa = bits & ((1 << MANTISSA_BITS) - 1);

    if mantissa == 0 && biased == 0 {
        return 0;
    }

    let mut exponent = if biased == 0 {
        1 - EXPONENT_BIAS
    } else {
        mantissa |= 1 << MANTISSA_BITS;
        biased - EXPONENT_BIAS
    };
    exponent += i64::from(mantissa.trailing_zeros());

    usize::try_from(-exponent).unwrap_or(0)
}

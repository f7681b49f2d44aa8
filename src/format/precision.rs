use crate::utils::error::TruncfmtError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits kept after the decimal separator.
///
/// Bounded to `0..=100`, the same range fixed-point renderers traditionally accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Precision(u8);

impl Precision {
    /// Largest accepted precision.
    pub const MAX: u8 = 100;

    /// Precision used when none is given.
    pub const DEFAULT: Precision = Precision(2);

    pub fn new(digits: u32) -> Result<Self, TruncfmtError> {
        match u8::try_from(digits) {
            Ok(d) if d <= Self::MAX => Ok(Precision(d)),
            _ => Err(TruncfmtError::invalid_precision(digits)),
        }
    }

    pub fn digits(self) -> usize {
        usize::from(self.0)
    }

    /// `10^digits` rounded to the nearest `f64`.
    ///
    /// `powi` drifts by an ulp past `10^22`, so the literal is parsed instead.
    pub fn factor(self) -> f64 {
        format!("1e{}", self.0).parse().unwrap_or(f64::INFINITY)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for Precision {
    type Error = TruncfmtError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<Precision> for u32 {
    fn from(p: Precision) -> Self {
        u32::from(p.0)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

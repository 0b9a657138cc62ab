use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;

/// A signed amount applied to a [`TemperatureCell`](crate::TemperatureCell).
///
/// Only whole numbers are representable, so a malformed request is turned
/// away when the `Delta` is built rather than when it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delta(i64);

impl Delta {
    /// The "increase" action.
    pub const UP: Delta = Delta(1);
    /// The "decrease" action.
    pub const DOWN: Delta = Delta(-1);

    pub const fn new(amount: i64) -> Self {
        Delta(amount)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for Delta {
    fn from(amount: i64) -> Self {
        Delta(amount)
    }
}

impl FromStr for Delta {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Delta)
            .map_err(|_| RangeError::InvalidDelta(s.to_string()))
    }
}

impl TryFrom<f64> for Delta {
    type Error = RangeError;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        // 2^63 is exactly representable; i64::MAX is not.
        let in_range = amount >= i64::MIN as f64 && amount < i64::MAX as f64;
        if amount.is_finite() && amount.fract() == 0.0 && in_range {
            Ok(Delta(amount as i64))
        } else {
            Err(RangeError::InvalidDelta(amount.to_string()))
        }
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

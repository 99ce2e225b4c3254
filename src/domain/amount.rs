//! Raw token amount.

use core::fmt;

use super::Rounding;
use crate::error::AmmError;

/// `2^128` as an `f64`. Anything at or above it does not fit a `u128`.
const U128_LIMIT_F64: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// A raw token amount in the smallest unit (wei for an 18-decimal token).
///
/// `Amount` never interprets decimals; use [`Decimals`](super::Decimals)
/// to convert to and from human-readable values.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::{Amount, Rounding};
///
/// let a = Amount::from_f64(1.7, Rounding::Down).expect("finite, positive");
/// assert_eq!(a, Amount::new(1));
/// let b = Amount::from_f64(1.2, Rounding::Up).expect("finite, positive");
/// assert_eq!(b, Amount::new(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Converts a float result to an integer amount.
    ///
    /// [`Rounding::Down`] truncates toward zero, matching an integer cast of
    /// the float. [`Rounding::Up`] takes the ceiling.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] if `value` is negative or not finite.
    /// - [`AmmError::Overflow`] if the rounded value is `>= 2^128`.
    pub fn from_f64(value: f64, rounding: Rounding) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmmError::InvalidQuantity(
                "amount must be finite and non-negative",
            ));
        }
        let rounded = rounding.apply(value);
        if rounded >= U128_LIMIT_F64 {
            return Err(AmmError::Overflow("amount exceeds u128"));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let raw = rounded as u128;
        Ok(Self(raw))
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns the amount as `f64`, rounded to nearest (ties to even).
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let v = self.0 as f64;
        v
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

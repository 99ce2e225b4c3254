//! Basis-point representation for percentages.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::AmmError;

/// Value that represents 100%.
const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Used for fee tiers and slippage tolerances. All `u32` values can be
/// stored; [`complement`](Self::complement) rejects anything above 100%.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::{Amount, BasisPoints, Rounding};
///
/// // Keep 99.5% of a deposit: a 50 bp slippage tolerance.
/// let kept = BasisPoints::new(50).complement().expect("<= 100%");
/// let min = kept.apply(Amount::new(1_000_000), Rounding::Down).expect("no overflow");
/// assert_eq!(min, Amount::new(995_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `100% - self`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `self` exceeds 100%.
    pub const fn complement(&self) -> crate::error::Result<Self> {
        if self.0 > MAX_BPS {
            return Err(AmmError::InvalidConfiguration(
                "basis points exceed 100%",
            ));
        }
        Ok(Self(MAX_BPS - self.0))
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the intermediate multiplication overflows.
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = match amount.get().checked_mul(self.0 as u128) {
            Some(v) => v,
            None => return Err(AmmError::Overflow("basis points apply overflow")),
        };

        let divisor = MAX_BPS as u128;
        let quotient = product / divisor;
        match rounding {
            Rounding::Down => Ok(Amount::new(quotient)),
            // quotient < u128::MAX / 10_000 here, so the increment cannot overflow.
            Rounding::Up if product % divisor != 0 => Ok(Amount::new(quotient + 1)),
            Rounding::Up => Ok(Amount::new(quotient)),
        }
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

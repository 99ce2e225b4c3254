//! Liquidity of a concentrated position.

use core::fmt;

use crate::error::AmmError;

/// Liquidity `L` of a position over a price range.
///
/// Distinct from a token amount: it measures depth across the range, and
/// converts to token amounts only together with a pair of sqrt prices.
/// Held as `f64` because the Q96 formulas producing it are evaluated in
/// floating point; must be finite and non-negative.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::Liquidity;
///
/// let l = Liquidity::new(1e18);
/// assert!(l.is_ok());
/// assert!(Liquidity::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Liquidity(f64);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Liquidity`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidLiquidity`] if `value` is negative or
    /// not finite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmmError::InvalidLiquidity(
                "liquidity must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Returns the smaller of two liquidity values.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

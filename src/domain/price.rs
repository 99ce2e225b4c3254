//! Exchange rate between two tokens.

use core::fmt;

use crate::error::AmmError;

/// Exchange rate between two tokens, quoted as asset1 per asset0.
///
/// Wraps an `f64` value that must be finite and non-negative. Functions
/// that take a logarithm of the price additionally reject zero.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::Price;
///
/// let price = Price::new(3805.28);
/// assert!(price.is_ok());
/// assert!(Price::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrice`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AmmError::InvalidPrice(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Returns `true` if the price is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Square root of the price, as used by every range formula.
    #[must_use]
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }

    /// Computes the reciprocal price (`1 / self`), i.e. the same rate
    /// quoted as asset0 per asset1.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the price is zero.
    /// Returns [`AmmError::InvalidPrice`] if the reciprocal is not finite.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        if self.0 == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        Self::new(1.0 / self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

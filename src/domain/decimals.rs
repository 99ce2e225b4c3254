//! Token decimal places.

use super::Amount;
use crate::error::AmmError;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places of a token (6 for USDC, 18 for WETH).
///
/// Valid range is `0..=18`. Every `10^d` in that range is exactly
/// representable as an `f64`, so the float scale factors below are exact.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::Decimals;
///
/// let usdc = Decimals::new(6).expect("6 is valid");
/// assert_eq!(usdc.factor_f64(), 1_000_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places: scale factor 1, i.e. raw pool units.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> crate::error::Result<Self> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals` as an exact `f64`.
    #[must_use]
    pub fn factor_f64(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }

    /// Converts a raw amount to a human-readable value (`raw / 10^decimals`).
    #[must_use]
    pub fn to_human(&self, amount: Amount) -> f64 {
        amount.as_f64() / self.factor_f64()
    }

    /// Converts a human-readable value to raw units (`value * 10^decimals`),
    /// left as `f64` so callers choose the rounding.
    #[must_use]
    pub fn to_raw(&self, value: f64) -> f64 {
        value * self.factor_f64()
    }
}

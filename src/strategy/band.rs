//! Price band around a current price.

use tracing::trace;

use crate::domain::{Amount, Liquidity, Price, SqrtPriceX96};
use crate::error::AmmError;
use crate::math::{calc_amount0, calc_amount1, price_to_sqrt_price_x96};

/// A current price with a lower and upper bound placed by percentage.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::{Liquidity, Price};
/// use ranger_math::strategy::PriceBand;
///
/// let band = PriceBand::around(Price::new(5000.0).expect("valid"), 2.5, 2.5)
///     .expect("valid percentages");
/// assert_eq!(band.lower().get(), 4875.0);
/// assert_eq!(band.upper().get(), 5125.0);
///
/// let (a0, a1) = band
///     .amounts_for_liquidity(Liquidity::new(1e18).expect("valid"))
///     .expect("encodable prices");
/// assert_eq!(a0.get(), 173_529_708_339_385);
/// assert_eq!(a1.get(), 889_477_899_810_046_336);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    lower: Price,
    current: Price,
    upper: Price,
}

impl PriceBand {
    /// Places bounds at `price * (1 - lower_pct / 100)` and
    /// `price * (1 + upper_pct / 100)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if a percentage is
    /// negative or not finite, or if `lower_pct >= 100`.
    pub fn around(price: Price, lower_pct: f64, upper_pct: f64) -> crate::error::Result<Self> {
        if !lower_pct.is_finite() || !upper_pct.is_finite() || lower_pct < 0.0 || upper_pct < 0.0
        {
            return Err(AmmError::InvalidConfiguration(
                "band percentage must be finite and non-negative",
            ));
        }
        if lower_pct >= 100.0 {
            return Err(AmmError::InvalidConfiguration(
                "lower band percentage must be below 100",
            ));
        }
        let lower = Price::new(price.get() * (1.0 - lower_pct / 100.0))?;
        let upper = Price::new(price.get() * (1.0 + upper_pct / 100.0))?;
        trace!(%lower, %price, %upper, "placed price band");
        Ok(Self {
            lower,
            current: price,
            upper,
        })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn lower(&self) -> Price {
        self.lower
    }

    /// Returns the price the band was placed around.
    #[must_use]
    pub const fn current(&self) -> Price {
        self.current
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn upper(&self) -> Price {
        self.upper
    }

    /// Encodes `(lower, current, upper)` as `sqrtPriceX96`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if a bound is at or above `2^320`.
    pub fn sqrt_prices(&self) -> crate::error::Result<(SqrtPriceX96, SqrtPriceX96, SqrtPriceX96)> {
        Ok((
            price_to_sqrt_price_x96(self.lower)?,
            price_to_sqrt_price_x96(self.current)?,
            price_to_sqrt_price_x96(self.upper)?,
        ))
    }

    /// Token amounts backing `liquidity` at the current price: token0 over
    /// `[current, upper]` and token1 over `[lower, current]`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::Overflow`] if a price cannot be encoded or an amount
    ///   exceeds `u128`.
    /// - [`AmmError::DivisionByZero`] if the current price is zero.
    pub fn amounts_for_liquidity(
        &self,
        liquidity: Liquidity,
    ) -> crate::error::Result<(Amount, Amount)> {
        let (lower, current, upper) = self.sqrt_prices()?;
        let amount0 = calc_amount0(liquidity, upper, current)?;
        let amount1 = calc_amount1(liquidity, lower, current)?;
        trace!(%amount0, %amount1, %liquidity, "band amounts");
        Ok((amount0, amount1))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn band(price: f64, lower_pct: f64, upper_pct: f64) -> PriceBand {
        let Ok(p) = Price::new(price) else {
            panic!("valid price expected");
        };
        let Ok(b) = PriceBand::around(p, lower_pct, upper_pct) else {
            panic!("expected Ok");
        };
        b
    }

    #[test]
    fn symmetric_band_bounds() {
        let b = band(5000.0, 2.5, 2.5);
        assert_eq!(b.lower().get(), 4875.0);
        assert_eq!(b.current().get(), 5000.0);
        assert_eq!(b.upper().get(), 5125.0);
    }

    #[test]
    fn sqrt_prices_of_band() {
        let Ok((lower, current, upper)) = band(5000.0, 2.5, 2.5).sqrt_prices() else {
            panic!("expected Ok");
        };
        assert_eq!(lower, SqrtPriceX96::new(5_531_805_397_879_617_316_569_726_582_784));
        assert_eq!(current, SqrtPriceX96::new(5_602_277_097_478_614_198_912_276_234_240));
        assert_eq!(upper, SqrtPriceX96::new(5_671_873_270_257_079_291_705_280_167_936));
    }

    #[test]
    fn amounts_for_one_eth_of_liquidity() {
        let Ok(l) = Liquidity::new(1e18) else {
            panic!("valid liquidity expected");
        };
        let Ok((a0, a1)) = band(5000.0, 2.5, 2.5).amounts_for_liquidity(l) else {
            panic!("expected Ok");
        };
        assert_eq!(a0, Amount::new(173_529_708_339_385));
        assert_eq!(a1, Amount::new(889_477_899_810_046_336));
    }

    #[test]
    fn zero_width_band_holds_nothing() {
        let Ok(l) = Liquidity::new(1e18) else {
            panic!("valid liquidity expected");
        };
        let Ok((a0, a1)) = band(5000.0, 0.0, 0.0).amounts_for_liquidity(l) else {
            panic!("expected Ok");
        };
        assert!(a0.is_zero() && a1.is_zero());
    }

    #[test]
    fn invalid_percentages() {
        let Ok(p) = Price::new(5000.0) else {
            panic!("valid price expected");
        };
        assert!(PriceBand::around(p, -1.0, 2.5).is_err());
        assert!(PriceBand::around(p, 2.5, f64::NAN).is_err());
        assert!(PriceBand::around(p, 100.0, 2.5).is_err());
    }

    #[test]
    fn zero_price_band_cannot_price_token0() {
        let Ok(l) = Liquidity::new(1.0) else {
            panic!("valid liquidity expected");
        };
        assert_eq!(
            band(0.0, 2.5, 2.5).amounts_for_liquidity(l),
            Err(AmmError::DivisionByZero)
        );
    }
}

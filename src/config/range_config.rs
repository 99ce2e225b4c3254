//! Parameters for planning a liquidity range.

use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, Decimals, FeeTier};
use crate::error::AmmError;

/// Band widths, pool fee, slippage tolerances and token decimals used to
/// plan a position.
///
/// Every field has a default, so a TOML file only needs the values it
/// changes. The defaults describe a WETH/USDC pool at the 0.05% tier:
///
/// | Field | Default |
/// |-------|---------|
/// | `lower_pct` / `upper_pct` | `2.5` |
/// | `fee_pips` | `500` |
/// | `withdraw_slippage_bps` | `10` |
/// | `mint_slippage_bps` | `50` |
/// | `decimals0` / `decimals1` | `18` / `6` |
///
/// # Validation
///
/// - Band percentages must be finite and non-negative; `lower_pct < 100`.
/// - `fee_pips` must be one of the standard tiers (100, 500, 3000, 10000).
/// - Slippage tolerances must not exceed 10 000 bp.
/// - Decimals must be in `0..=18`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeConfig {
    /// Band width below the current price, in percent.
    pub lower_pct: f64,
    /// Band width above the current price, in percent.
    pub upper_pct: f64,
    /// Pool fee in Uniswap fee units (hundredths of a basis point).
    pub fee_pips: u32,
    /// Tolerance applied to amounts expected back from a withdrawal.
    pub withdraw_slippage_bps: u32,
    /// Tolerance applied to amounts deposited by a mint.
    pub mint_slippage_bps: u32,
    /// Decimals of token0.
    pub decimals0: u8,
    /// Decimals of token1.
    pub decimals1: u8,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            lower_pct: 2.5,
            upper_pct: 2.5,
            fee_pips: 500,
            withdraw_slippage_bps: 10,
            mint_slippage_bps: 50,
            decimals0: 18,
            decimals1: 6,
        }
    }
}

impl RangeConfig {
    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] for a bad band percentage or a
    ///   slippage above 100%.
    /// - [`AmmError::InvalidFee`] for a non-standard fee.
    /// - [`AmmError::InvalidPrecision`] for decimals above 18.
    pub fn validate(&self) -> crate::error::Result<()> {
        for pct in [self.lower_pct, self.upper_pct] {
            if !pct.is_finite() || pct < 0.0 {
                return Err(AmmError::InvalidConfiguration(
                    "band percentage must be finite and non-negative",
                ));
            }
        }
        if self.lower_pct >= 100.0 {
            return Err(AmmError::InvalidConfiguration(
                "lower band percentage must be below 100",
            ));
        }
        self.tick_spacing()?;
        self.withdraw_slippage().complement()?;
        self.mint_slippage().complement()?;
        self.decimals0()?;
        self.decimals1()?;
        Ok(())
    }

    /// Returns the fee tier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee_pips` is not a whole number
    /// of basis points.
    pub const fn fee_tier(&self) -> crate::error::Result<FeeTier> {
        FeeTier::from_pips(self.fee_pips)
    }

    /// Returns the tick spacing of the fee tier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] for a non-standard fee.
    pub fn tick_spacing(&self) -> crate::error::Result<u16> {
        self.fee_tier()?.tick_spacing()
    }

    /// Returns the withdrawal slippage tolerance.
    #[must_use]
    pub const fn withdraw_slippage(&self) -> BasisPoints {
        BasisPoints::new(self.withdraw_slippage_bps)
    }

    /// Returns the mint slippage tolerance.
    #[must_use]
    pub const fn mint_slippage(&self) -> BasisPoints {
        BasisPoints::new(self.mint_slippage_bps)
    }

    /// Returns the decimals of token0.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] above 18.
    pub const fn decimals0(&self) -> crate::error::Result<Decimals> {
        Decimals::new(self.decimals0)
    }

    /// Returns the decimals of token1.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] above 18.
    pub const fn decimals1(&self) -> crate::error::Result<Decimals> {
        Decimals::new(self.decimals1)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = RangeConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.tick_spacing(), Ok(10));
        assert_eq!(config.fee_tier(), Ok(FeeTier::TIER_0_05_PERCENT));
        assert_eq!(config.withdraw_slippage(), BasisPoints::new(10));
        assert_eq!(config.mint_slippage(), BasisPoints::new(50));
    }

    #[test]
    fn negative_band_rejected() {
        let config = RangeConfig {
            upper_pct: -1.0,
            ..RangeConfig::default()
        };
        assert!(matches!(config.validate(), Err(AmmError::InvalidConfiguration(_))));
    }

    #[test]
    fn full_lower_band_rejected() {
        let config = RangeConfig {
            lower_pct: 100.0,
            ..RangeConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(AmmError::InvalidConfiguration("lower band percentage must be below 100"))
        );
    }

    #[test]
    fn wide_upper_band_allowed() {
        let config = RangeConfig {
            upper_pct: 250.0,
            ..RangeConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn non_standard_fee_rejected() {
        let config = RangeConfig {
            fee_pips: 2_500,
            ..RangeConfig::default()
        };
        assert!(matches!(config.validate(), Err(AmmError::InvalidFee(_))));
    }

    #[test]
    fn slippage_above_hundred_percent_rejected() {
        let config = RangeConfig {
            mint_slippage_bps: 10_001,
            ..RangeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn bad_decimals_rejected() {
        let config = RangeConfig {
            decimals1: 19,
            ..RangeConfig::default()
        };
        assert!(matches!(config.validate(), Err(AmmError::InvalidPrecision(_))));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let Ok(config) = toml::from_str::<RangeConfig>("fee_pips = 3000\nlower_pct = 5.0\n") else {
            panic!("expected valid TOML");
        };
        assert_eq!(config.tick_spacing(), Ok(60));
        assert!((config.lower_pct - 5.0).abs() < f64::EPSILON);
        assert!((config.upper_pct - 2.5).abs() < f64::EPSILON);
        assert_eq!(config.decimals0, 18);
    }

    #[test]
    fn unknown_toml_key_rejected() {
        assert!(toml::from_str::<RangeConfig>("fee = 500\n").is_err());
    }
}

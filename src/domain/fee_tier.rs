//! Pool fee tiers built on [`BasisPoints`].

use core::fmt;

use super::BasisPoints;
use crate::error::AmmError;

/// Uniswap fee units per basis point: fees are quoted in hundredths of a bp.
const PIPS_PER_BP: u32 = 100;

/// A pool fee tier wrapping [`BasisPoints`], with the four Uniswap V3
/// presets.
///
/// The fee tier fixes the pool's tick spacing, which decides where a
/// position's bounds may sit.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::FeeTier;
///
/// let tier = FeeTier::from_pips(500).expect("whole basis points");
/// assert_eq!(tier, FeeTier::TIER_0_05_PERCENT);
/// assert_eq!(tier.tick_spacing(), Ok(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.01% fee (1 bp), tick spacing 1.
    pub const TIER_0_01_PERCENT: Self = Self(BasisPoints::new(1));

    /// 0.05% fee (5 bp), tick spacing 10.
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30% fee (30 bp), tick spacing 60.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00% fee (100 bp), tick spacing 200.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a fee tier from Uniswap fee units (`500` is 0.05%).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `pips` is not a whole number of
    /// basis points.
    pub const fn from_pips(pips: u32) -> crate::error::Result<Self> {
        if pips % PIPS_PER_BP != 0 {
            return Err(AmmError::InvalidFee(
                "fee must be a whole number of basis points",
            ));
        }
        Ok(Self(BasisPoints::new(pips / PIPS_PER_BP)))
    }

    /// Returns the tick spacing the factory assigns to this tier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] for a non-standard tier.
    pub const fn tick_spacing(&self) -> crate::error::Result<u16> {
        match self.0.get() {
            1 => Ok(1),
            5 => Ok(10),
            30 => Ok(60),
            100 => Ok(200),
            _ => Err(AmmError::InvalidFee("no tick spacing for fee tier")),
        }
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn from_pips_presets() {
        assert_eq!(FeeTier::from_pips(100), Ok(FeeTier::TIER_0_01_PERCENT));
        assert_eq!(FeeTier::from_pips(500), Ok(FeeTier::TIER_0_05_PERCENT));
        assert_eq!(FeeTier::from_pips(3_000), Ok(FeeTier::TIER_0_30_PERCENT));
        assert_eq!(FeeTier::from_pips(10_000), Ok(FeeTier::TIER_1_00_PERCENT));
    }

    #[test]
    fn from_pips_fractional_bp() {
        assert_eq!(
            FeeTier::from_pips(250),
            Err(AmmError::InvalidFee("fee must be a whole number of basis points"))
        );
    }

    #[test]
    fn spacings() {
        assert_eq!(FeeTier::TIER_0_01_PERCENT.tick_spacing(), Ok(1));
        assert_eq!(FeeTier::TIER_0_05_PERCENT.tick_spacing(), Ok(10));
        assert_eq!(FeeTier::TIER_0_30_PERCENT.tick_spacing(), Ok(60));
        assert_eq!(FeeTier::TIER_1_00_PERCENT.tick_spacing(), Ok(200));
    }

    #[test]
    fn non_standard_tier_has_no_spacing() {
        let Ok(tier) = FeeTier::from_pips(4_200) else {
            panic!("whole basis points");
        };
        assert_eq!(tier.tick_spacing(), Err(AmmError::InvalidFee("no tick spacing for fee tier")));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", FeeTier::TIER_0_30_PERCENT), "FeeTier(30bp)");
    }
}

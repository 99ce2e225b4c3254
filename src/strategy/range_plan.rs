//! Tick range and token split for a new position.

use core::fmt;

use tracing::{debug, trace};

use super::PriceBand;
use crate::config::RangeConfig;
use crate::domain::{Decimals, Price, Tick, TickRange};
use crate::math::{nearest_initialized_tick, price_to_tick, tick_to_price, token_ratio_at_price};

/// A position range derived from a human price and a [`RangeConfig`].
///
/// Steps:
///
/// 1. Place a [`PriceBand`] around the price.
/// 2. Convert both edges to raw pool prices (`× 10^decimals1 / 10^decimals0`)
///    and take their ticks.
/// 3. Snap each tick to the fee tier's spacing.
/// 4. Re-derive human prices from the snapped ticks.
/// 5. Compute the value split of both tokens on the snapped band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePlan {
    range: TickRange,
    lower_price: Price,
    upper_price: Price,
    price: Price,
    ratio0: f64,
    ratio1: f64,
}

impl RangePlan {
    /// Plans a range around `price`.
    ///
    /// # Errors
    ///
    /// - Any error of [`RangeConfig::validate`].
    /// - [`AmmError::InvalidPrice`](crate::error::AmmError::InvalidPrice) if `price` is zero.
    /// - [`AmmError::InvalidTickRange`](crate::error::AmmError::InvalidTickRange) if the
    ///   snapped band collapses to a single tick.
    pub fn compute(price: Price, config: &RangeConfig) -> crate::error::Result<Self> {
        config.validate()?;
        let decimals0 = config.decimals0()?;
        let decimals1 = config.decimals1()?;
        let spacing = config.tick_spacing()?;

        let band = PriceBand::around(price, config.lower_pct, config.upper_pct)?;
        let lower_tick = snapped_tick(band.lower(), decimals0, decimals1, spacing)?;
        let upper_tick = snapped_tick(band.upper(), decimals0, decimals1, spacing)?;
        let range = TickRange::new(lower_tick, upper_tick)?;

        let lower_price = tick_to_price(lower_tick, decimals0, decimals1)?;
        let upper_price = tick_to_price(upper_tick, decimals0, decimals1)?;
        let (ratio0, ratio1) = token_ratio_at_price(price, lower_price, upper_price)?;

        let plan = Self {
            range,
            lower_price,
            upper_price,
            price,
            ratio0,
            ratio1,
        };
        debug!(%plan, "planned range");
        Ok(plan)
    }

    /// Returns the snapped tick range.
    #[must_use]
    pub const fn range(&self) -> TickRange {
        self.range
    }

    /// Returns the snapped lower tick.
    #[must_use]
    pub const fn lower_tick(&self) -> Tick {
        self.range.lower()
    }

    /// Returns the snapped upper tick.
    #[must_use]
    pub const fn upper_tick(&self) -> Tick {
        self.range.upper()
    }

    /// Returns the human price at the lower tick.
    #[must_use]
    pub const fn lower_price(&self) -> Price {
        self.lower_price
    }

    /// Returns the human price at the upper tick.
    #[must_use]
    pub const fn upper_price(&self) -> Price {
        self.upper_price
    }

    /// Returns the price the plan was computed at.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Share of the position's value held in token0, in percent.
    #[must_use]
    pub const fn ratio0(&self) -> f64 {
        self.ratio0
    }

    /// Share of the position's value held in token1, in percent.
    #[must_use]
    pub const fn ratio1(&self) -> f64 {
        self.ratio1
    }
}

impl fmt::Display for RangePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ticks {} ({} .. {}) at {}, split {:.4}% / {:.4}%",
            self.range, self.lower_price, self.upper_price, self.price, self.ratio0, self.ratio1
        )
    }
}

fn snapped_tick(
    human: Price,
    decimals0: Decimals,
    decimals1: Decimals,
    spacing: u16,
) -> crate::error::Result<Tick> {
    let raw = Price::new(human.get() * decimals1.factor_f64() / decimals0.factor_f64())?;
    let tick = price_to_tick(raw)?;
    let snapped = nearest_initialized_tick(tick, spacing)?;
    trace!(%human, %tick, %snapped, "snapped band edge");
    Ok(snapped)
}

//! Convenience re-exports for common types.
//!
//! ```rust
//! use ranger_math::prelude::*;
//!
//! let tick = price_to_tick(Price::new(4545.0).expect("valid")).expect("in range");
//! assert_eq!(tick, Tick::new(84_222).expect("valid"));
//! ```

pub use crate::config::RangeConfig;
pub use crate::domain::{
    Amount, BasisPoints, Decimals, FeeTier, Liquidity, Price, Rounding, SqrtPriceX96, Tick,
    TickRange, Q96,
};
pub use crate::error::{AmmError, Result};
pub use crate::math::{
    amounts_for_liquidity, calc_amount0, calc_amount1, liquidity0, liquidity1,
    liquidity_for_amounts, nearest_initialized_tick, price_to_sqrt_price_x96, price_to_tick,
    sqrt_price_x96_to_price, tick_to_price,
};
pub use crate::strategy::{minimum_amounts, PriceBand, RangePlan, Rebalance, SwapAction};

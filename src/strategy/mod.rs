//! Range planning on top of the formulas in [`crate::math`].
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`PriceBand`] | bounds at a percentage around a price, and their amounts |
//! | [`RangePlan`] | snapped tick range and token split for a new position |
//! | [`Rebalance`] | swap that brings wallet balances to a plan's split |
//! | [`minimum_amounts`] | slippage floors for withdraw and mint |
//!
//! Whether an existing position needs replacing is
//! [`TickRange::is_out_of_range`](crate::domain::TickRange::is_out_of_range).

mod band;
mod range_plan;
mod rebalance;
mod slippage;

pub use band::PriceBand;
pub use range_plan::RangePlan;
pub use rebalance::{Rebalance, SwapAction};
pub use slippage::minimum_amounts;

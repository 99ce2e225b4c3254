//! Value types for concentrated-liquidity range math.
//!
//! Every type is a newtype with a validated constructor, so a value that
//! reaches the math layer already satisfies its invariants.
//!
//! | Type | Wraps | Invariant |
//! |------|-------|-----------|
//! | [`Price`] | `f64` | finite, `>= 0` |
//! | [`Tick`] | `i32` | `MIN..=MAX` |
//! | [`TickRange`] | two [`Tick`]s | `lower < upper` |
//! | [`SqrtPriceX96`] | `U256` | none (raw pool value) |
//! | [`Liquidity`] | `f64` | finite, `>= 0` |
//! | [`Amount`] | `u128` | none |
//! | [`Decimals`] | `u8` | `0..=18` |
//! | [`BasisPoints`] | `u32` | none; `complement` rejects > 100% |
//! | [`FeeTier`] | [`BasisPoints`] | whole basis points; spacing only for presets |

mod amount;
mod basis_points;
mod decimals;
mod fee_tier;
mod liquidity;
mod price;
mod rounding;
mod sqrt_price;
mod tick;
mod tick_range;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use liquidity::Liquidity;
pub use price::Price;
pub use rounding::Rounding;
pub use sqrt_price::{SqrtPriceX96, Q96, Q96_F64};
pub use tick::Tick;
pub use tick_range::TickRange;

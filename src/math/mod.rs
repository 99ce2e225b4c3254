//! Pure concentrated-liquidity formulas.
//!
//! Nothing here holds state. Inputs are validated domain types and every
//! fallible function returns [`crate::error::Result`].
//!
//! | Module | Contents |
//! |--------|----------|
//! | `tick_math` | price <-> tick, snapping to a tick spacing |
//! | `sqrt_price_math` | `sqrtPriceX96` encode/decode |
//! | `liquidity_math` | liquidity and amounts from `sqrtPriceX96` bounds |
//! | `range_math` | liquidity and deposits from plain prices |
//! | `wide` | exact wide-integer conversions to and from `f64` |

mod liquidity_math;
mod range_math;
mod sqrt_price_math;
mod tick_math;
mod wide;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use liquidity_math::{
    amounts_for_liquidity, calc_amount0, calc_amount1, liquidity0, liquidity1,
    liquidity_for_amounts,
};
pub use range_math::{
    amount_x, amount_y, liquidity_x, liquidity_y, percent_diff, token_ratio_at_price,
};
pub use sqrt_price_math::{
    price_to_sqrt_price_x96, scaled_price_to_sqrt_price_x96, sqrt_price_x96_at_tick,
    sqrt_price_x96_to_price, sqrt_price_x96_to_scaled_price, tick_at_sqrt_price_x96,
};
pub use tick_math::{fractional_tick, nearest_initialized_tick, price_to_tick, tick_to_price};
pub use wide::{product_to_f64, truncate_to_u256, u256_to_f64};

//! Conversion between prices and ticks.
//!
//! A tick is the integer exponent of the base `1.0001`:
//! `price = 1.0001^tick`. Every conversion here is evaluated in `f64`
//! with `ln`/`powf`, and flooring is applied to the raw logarithm without
//! any snapping, so `price -> tick` may land one tick below an exact
//! power.
//!
//! | Function | Direction |
//! |----------|-----------|
//! | [`price_to_tick`] | price -> greatest tick not above it |
//! | [`fractional_tick`] | price -> unfloored log |
//! | [`tick_to_price`] | tick -> price, optionally decimal-scaled |
//! | [`nearest_initialized_tick`] | tick -> tick on the pool's spacing grid |
//!
//! # Examples
//!
//! ```
//! use ranger_math::domain::{Decimals, Price, Tick};
//! use ranger_math::math::{price_to_tick, tick_to_price};
//!
//! let tick = price_to_tick(Price::new(5000.0).expect("valid")).expect("in range");
//! assert_eq!(tick.get(), 85_176);
//!
//! let price = tick_to_price(tick, Decimals::ZERO, Decimals::ZERO).expect("finite");
//! assert!(price.get() <= 5000.0);
//! ```

use crate::domain::{Decimals, Price, Tick};
use crate::error::AmmError;

/// Base of the tick-price exponential: `price = BASE^tick`.
const BASE: f64 = 1.0001;

/// Remainders above this round a tick up to the next multiple of the
/// spacing. Fixed, whatever the spacing.
const ROUND_UP_THRESHOLD: i32 = 5;

/// Returns `log_1.0001(price)` without flooring.
///
/// # Errors
///
/// Returns [`AmmError::InvalidPrice`] if `price` is zero.
pub fn fractional_tick(price: Price) -> crate::error::Result<f64> {
    if !price.is_positive() {
        return Err(AmmError::InvalidPrice(
            "price must be positive for tick conversion",
        ));
    }
    Ok(price.get().ln() / BASE.ln())
}

/// Computes `floor(log_1.0001(price))`, the greatest tick whose price does
/// not exceed `price` up to float rounding.
///
/// # Errors
///
/// - [`AmmError::InvalidPrice`] if `price` is zero.
/// - [`AmmError::InvalidTick`] if the tick falls outside
///   `[-887272, 887272]`.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::Price;
/// use ranger_math::math::price_to_tick;
///
/// let tick = price_to_tick(Price::new(0.5).expect("valid")).expect("in range");
/// assert_eq!(tick.get(), -6_932);
/// ```
pub fn price_to_tick(price: Price) -> crate::error::Result<Tick> {
    let floored = fractional_tick(price)?.floor();
    if floored < f64::from(Tick::MIN.get()) || floored > f64::from(Tick::MAX.get()) {
        return Err(AmmError::InvalidTick("price maps outside the tick range"));
    }
    #[allow(clippy::cast_possible_truncation)]
    let tick = floored as i32;
    Tick::new(tick)
}

/// Computes `1.0001^tick * 10^decimals0 / 10^decimals1`.
///
/// The multiplication and division are applied in that order, even for
/// equal decimals, where the two roundings can move the result by an ulp.
/// With [`Decimals::ZERO`] on both sides the factors are exactly `1.0` and
/// the result is the plain power.
///
/// # Errors
///
/// Returns [`AmmError::InvalidPrice`] if the scaled price is not finite.
pub fn tick_to_price(
    tick: Tick,
    decimals0: Decimals,
    decimals1: Decimals,
) -> crate::error::Result<Price> {
    let scaled = BASE.powf(f64::from(tick.get())) * decimals0.factor_f64() / decimals1.factor_f64();
    Price::new(scaled)
}

/// Snaps `tick` onto the grid of multiples of `spacing`.
///
/// With `r = tick mod spacing` (floored, so `r >= 0` for negative ticks
/// too), the tick rounds up to `tick + (spacing - r)` when `r > 5` and
/// down to `tick - r` otherwise.
///
/// # Errors
///
/// - [`AmmError::InvalidConfiguration`] if `spacing` is zero.
/// - [`AmmError::InvalidTick`] if the snapped tick leaves the valid range.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::Tick;
/// use ranger_math::math::nearest_initialized_tick;
///
/// let tick = Tick::new(-7).expect("valid");
/// let snapped = nearest_initialized_tick(tick, 10).expect("in range");
/// assert_eq!(snapped.get(), -10);
/// ```
pub fn nearest_initialized_tick(tick: Tick, spacing: u16) -> crate::error::Result<Tick> {
    if !Tick::spacing_is_valid(spacing) {
        return Err(AmmError::InvalidConfiguration(
            "tick spacing must be non-zero",
        ));
    }
    let spacing = i32::from(spacing);
    let remainder = tick.get().rem_euclid(spacing);
    let snapped = if remainder > ROUND_UP_THRESHOLD {
        tick.checked_add(spacing - remainder)
    } else {
        tick.checked_sub(remainder)
    };
    snapped.ok_or(AmmError::InvalidTick("snapped tick outside the tick range"))
}

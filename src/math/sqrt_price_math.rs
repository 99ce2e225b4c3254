//! `sqrtPriceX96` encoding and decoding.
//!
//! A pool stores its price as `sqrt(price) * 2^96`, truncated. Encoding
//! runs in `f64`: the square root times `2^96` is rounded once, then
//! truncated toward zero to an integer. Every `f64` at or above `2^53` is
//! already an integer, so the truncation is exact.
//!
//! Raw pool prices are quoted in smallest token units. The `scaled`
//! variants convert to and from human prices for a token pair with
//! different decimals.

use crate::domain::{Decimals, Price, SqrtPriceX96, Tick, Q96_F64};
use crate::error::AmmError;
use crate::math::{price_to_tick, tick_to_price, truncate_to_u256};

/// Encodes a raw price: `trunc(sqrt(price) * 2^96)`.
///
/// Monotonically non-decreasing in `price`. The product is rounded once in
/// `f64` and then truncated exactly, so encodings past `2^128` carry the
/// float's value digit for digit.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the encoding does not fit in 256 bits,
/// i.e. for prices at or above `2^320`.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::{Price, SqrtPriceX96};
/// use ranger_math::math::price_to_sqrt_price_x96;
///
/// let sqrt = price_to_sqrt_price_x96(Price::new(4000.0).expect("valid")).expect("fits");
/// assert_eq!(sqrt, SqrtPriceX96::new(5_010_828_967_500_958_503_831_733_272_576));
/// ```
pub fn price_to_sqrt_price_x96(price: Price) -> crate::error::Result<SqrtPriceX96> {
    let encoded = price.sqrt() * Q96_F64;
    truncate_to_u256(encoded)
        .map(SqrtPriceX96::from_u256)
        .ok_or(AmmError::Overflow("sqrtPriceX96 exceeds 256 bits"))
}

/// Decodes a raw price: `(sqrt / 2^96)^2`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidPrice`] if the result is not finite.
pub fn sqrt_price_x96_to_price(sqrt_price: SqrtPriceX96) -> crate::error::Result<Price> {
    let ratio = sqrt_price.as_f64() / Q96_F64;
    Price::new(ratio * ratio)
}

/// Decodes to a human price: the raw price divided by
/// `10^decimals1 / 10^decimals0`.
///
/// For an 18-decimal token0 and a 6-decimal token1 this multiplies the raw
/// price by `10^12`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidPrice`] if the result is not finite.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::{Decimals, SqrtPriceX96};
/// use ranger_math::math::sqrt_price_x96_to_scaled_price;
///
/// let sqrt = SqrtPriceX96::new(4_398_119_394_579_009_462_326_040);
/// let weth = Decimals::new(18).expect("valid");
/// let usdc = Decimals::new(6).expect("valid");
/// let price = sqrt_price_x96_to_scaled_price(sqrt, weth, usdc).expect("finite");
/// assert!((price.get() - 3081.590043367433).abs() < 1e-9);
/// ```
pub fn sqrt_price_x96_to_scaled_price(
    sqrt_price: SqrtPriceX96,
    decimals0: Decimals,
    decimals1: Decimals,
) -> crate::error::Result<Price> {
    let raw = sqrt_price_x96_to_price(sqrt_price)?;
    Price::new(raw.get() / decimal_shift(decimals0, decimals1))
}

/// Encodes a human price, the inverse of [`sqrt_price_x96_to_scaled_price`].
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the encoding does not fit in 256 bits.
pub fn scaled_price_to_sqrt_price_x96(
    price: Price,
    decimals0: Decimals,
    decimals1: Decimals,
) -> crate::error::Result<SqrtPriceX96> {
    let raw = Price::new(price.get() * decimal_shift(decimals0, decimals1))?;
    price_to_sqrt_price_x96(raw)
}

/// Tick of the raw price encoded by `sqrt_price`.
///
/// # Errors
///
/// - [`AmmError::InvalidPrice`] if `sqrt_price` is zero.
/// - [`AmmError::InvalidTick`] if the tick leaves the valid range.
pub fn tick_at_sqrt_price_x96(sqrt_price: SqrtPriceX96) -> crate::error::Result<Tick> {
    price_to_tick(sqrt_price_x96_to_price(sqrt_price)?)
}

/// Encoding of the raw price `1.0001^tick`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidPrice`] only if the price at `tick` is not
/// finite, which no tick in the valid range produces.
pub fn sqrt_price_x96_at_tick(tick: Tick) -> crate::error::Result<SqrtPriceX96> {
    price_to_sqrt_price_x96(tick_to_price(tick, Decimals::ZERO, Decimals::ZERO)?)
}

/// `10^decimals1 / 10^decimals0`: multiply a human price by this to get a
/// raw price.
fn decimal_shift(decimals0: Decimals, decimals1: Decimals) -> f64 {
    decimals1.factor_f64() / decimals0.factor_f64()
}

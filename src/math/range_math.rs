//! Liquidity and deposit amounts from plain (non-fixed-point) prices.
//!
//! This family works directly on human prices and returns raw `f64`
//! values that keep their sign: a price above the top of the range gives
//! a negative liquidity from [`liquidity_x`] rather than an error. It is
//! kept separate from the `sqrtPriceX96` formulas in
//! [`liquidity_math`](super::liquidity_math) and the two are not
//! reconciled.
//!
//! With `x` units of token0 at `price` and a range up to `price_high`,
//! the matching token1 deposit is
//! `amount_y(liquidity_x(x, price, price_high), price, price_low)`.

use crate::domain::Price;
use crate::error::AmmError;

/// Liquidity of `x` units of token0 between `price` and `price_high`:
/// `x * √price * √price_high / (√price_high − √price)`.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `price == price_high`.
pub fn liquidity_x(x: f64, price: Price, price_high: Price) -> crate::error::Result<f64> {
    let denominator = price_high.sqrt() - price.sqrt();
    if denominator == 0.0 {
        return Err(AmmError::DivisionByZero);
    }
    Ok(x * price.sqrt() * price_high.sqrt() / denominator)
}

/// Liquidity of `y` units of token1 between `price_low` and `price`:
/// `y / (√price − √price_low)`.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `price == price_low`.
pub fn liquidity_y(y: f64, price: Price, price_low: Price) -> crate::error::Result<f64> {
    let denominator = price.sqrt() - price_low.sqrt();
    if denominator == 0.0 {
        return Err(AmmError::DivisionByZero);
    }
    Ok(y / denominator)
}

/// Token1 needed next to `liquidity` between `price_low` and `price`:
/// `liquidity * (√price − √price_low)`.
#[must_use]
pub fn amount_y(liquidity: f64, price: Price, price_low: Price) -> f64 {
    liquidity * (price.sqrt() - price_low.sqrt())
}

/// Token0 paired with `liquidity` towards `price_high`:
/// `liquidity * (√price − √price_high)`.
///
/// Negative when `price < price_high`. Pass inverted prices (`1 / p`) to
/// get the token0 deposit for a token1 liquidity, which flips the sign.
#[must_use]
pub fn amount_x(liquidity: f64, price: Price, price_high: Price) -> f64 {
    liquidity * (price.sqrt() - price_high.sqrt())
}

/// Value split, in percent, of a position at `price` in
/// `[price_low, price_high]`.
///
/// Takes one unit of token0, derives the matching token1 deposit `Y`,
/// then returns `(price / (price + Y) * 100, Y / (price + Y) * 100)`.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `price == price_high` or if the
/// position has no value (`price + Y == 0`).
///
/// # Examples
///
/// ```
/// use ranger_math::domain::Price;
/// use ranger_math::math::token_ratio_at_price;
///
/// let p = |v: f64| Price::new(v).expect("valid");
/// let (ratio0, ratio1) = token_ratio_at_price(p(3805.28), p(3710.7589), p(3901.0039))
///     .expect("non-degenerate range");
/// assert!((ratio0 + ratio1 - 100.0).abs() < 1e-9);
/// assert!(ratio0 < ratio1);
/// ```
pub fn token_ratio_at_price(
    price: Price,
    price_low: Price,
    price_high: Price,
) -> crate::error::Result<(f64, f64)> {
    let y = amount_y(liquidity_x(1.0, price, price_high)?, price, price_low);
    let total = price.get() + y;
    if total == 0.0 {
        return Err(AmmError::DivisionByZero);
    }
    Ok((price.get() / total * 100.0, y / total * 100.0))
}

/// Relative difference of `x` from `y` in percent: `(x − y) / y * 100`.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `y` is zero.
pub fn percent_diff(x: f64, y: f64) -> crate::error::Result<f64> {
    if y == 0.0 {
        return Err(AmmError::DivisionByZero);
    }
    Ok((x - y) / y * 100.0)
}

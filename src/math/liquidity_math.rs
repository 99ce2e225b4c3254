//! Liquidity and token amounts over a range bounded by two `sqrtPriceX96`
//! values.
//!
//! Every function takes its two bounds in either order and normalizes so
//! that `pa <= pb`. Integer inputs become `f64` with round-to-nearest-even;
//! `pa * pb` is formed exactly in 512 bits and rounded once. Expressions
//! are evaluated left to right, as written in each function's docs.
//!
//! | Function | Formula |
//! |----------|---------|
//! | [`liquidity0`] | `(amount * (pa * pb) / Q96) / (pb - pa)` |
//! | [`liquidity1`] | `amount * Q96 / (pb - pa)` |
//! | [`calc_amount0`] | `trunc(L * Q96 * (pb - pa) / pa / pb)` |
//! | [`calc_amount1`] | `trunc(L * (pb - pa) / Q96)` |
//!
//! [`amounts_for_liquidity`] and [`liquidity_for_amounts`] compose these
//! for a position whose current price may sit below, inside or above its
//! range.
//!
//! # Examples
//!
//! ```
//! use ranger_math::domain::{Liquidity, Price};
//! use ranger_math::math::{calc_amount0, calc_amount1, price_to_sqrt_price_x96};
//!
//! let encode = |p: f64| price_to_sqrt_price_x96(Price::new(p).expect("valid")).expect("fits");
//! let (lower, current, upper) = (encode(4875.0), encode(5000.0), encode(5125.0));
//! let liquidity = Liquidity::new(1e18).expect("valid");
//!
//! let amount0 = calc_amount0(liquidity, upper, current).expect("non-zero bound");
//! let amount1 = calc_amount1(liquidity, lower, current).expect("fits");
//! assert_eq!(amount0.get(), 173_529_708_339_385);
//! assert_eq!(amount1.get(), 889_477_899_810_046_336);
//! ```

use crate::domain::{Amount, Liquidity, Rounding, SqrtPriceX96, Q96_F64};
use crate::error::AmmError;
use crate::math::{product_to_f64, u256_to_f64};

/// Liquidity provided by `amount` of token0 over `[pa, pb]`.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `amount` is negative or not finite.
/// - [`AmmError::DivisionByZero`] if `pa == pb`.
/// - [`AmmError::InvalidLiquidity`] if the result is not finite.
pub fn liquidity0(
    amount: f64,
    pa: SqrtPriceX96,
    pb: SqrtPriceX96,
) -> crate::error::Result<Liquidity> {
    check_amount(amount)?;
    let (pa, pb) = SqrtPriceX96::sorted(pa, pb);
    let width = width(pa, pb)?;
    Liquidity::new((amount * product_to_f64(pa.get(), pb.get()) / Q96_F64) / width)
}

/// Liquidity provided by `amount` of token1 over `[pa, pb]`.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `amount` is negative or not finite.
/// - [`AmmError::DivisionByZero`] if `pa == pb`.
/// - [`AmmError::InvalidLiquidity`] if the result is not finite.
pub fn liquidity1(
    amount: f64,
    pa: SqrtPriceX96,
    pb: SqrtPriceX96,
) -> crate::error::Result<Liquidity> {
    check_amount(amount)?;
    let (pa, pb) = SqrtPriceX96::sorted(pa, pb);
    let width = width(pa, pb)?;
    Liquidity::new(amount * Q96_F64 / width)
}

/// Token0 held by `liquidity` over `[pa, pb]`, truncated toward zero.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if the lower bound is zero.
/// - [`AmmError::Overflow`] if the amount does not fit in `u128`.
pub fn calc_amount0(
    liquidity: Liquidity,
    pa: SqrtPriceX96,
    pb: SqrtPriceX96,
) -> crate::error::Result<Amount> {
    let (pa, pb) = SqrtPriceX96::sorted(pa, pb);
    if pa.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let diff = difference(pa, pb);
    truncate(liquidity.get() * Q96_F64 * diff / pa.as_f64() / pb.as_f64())
}

/// Token1 held by `liquidity` over `[pa, pb]`, truncated toward zero.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the amount does not fit in `u128`.
pub fn calc_amount1(
    liquidity: Liquidity,
    pa: SqrtPriceX96,
    pb: SqrtPriceX96,
) -> crate::error::Result<Amount> {
    let (pa, pb) = SqrtPriceX96::sorted(pa, pb);
    truncate(liquidity.get() * difference(pa, pb) / Q96_F64)
}

/// Token amounts `(amount0, amount1)` held by a position with `liquidity`
/// over `[lower, upper]` while the pool sits at `current`.
///
/// - `current <= lower`: the whole position is token0.
/// - `current >= upper`: the whole position is token1.
/// - otherwise token0 covers `[current, upper]` and token1 covers
///   `[lower, current]`.
///
/// # Errors
///
/// Propagates the errors of [`calc_amount0`] and [`calc_amount1`].
pub fn amounts_for_liquidity(
    liquidity: Liquidity,
    current: SqrtPriceX96,
    lower: SqrtPriceX96,
    upper: SqrtPriceX96,
) -> crate::error::Result<(Amount, Amount)> {
    let (lower, upper) = SqrtPriceX96::sorted(lower, upper);
    if current <= lower {
        Ok((calc_amount0(liquidity, lower, upper)?, Amount::ZERO))
    } else if current >= upper {
        Ok((Amount::ZERO, calc_amount1(liquidity, lower, upper)?))
    } else {
        Ok((
            calc_amount0(liquidity, current, upper)?,
            calc_amount1(liquidity, lower, current)?,
        ))
    }
}

/// Largest liquidity that `amount0` and `amount1` can fund over
/// `[lower, upper]` at `current`.
///
/// Below the range only token0 counts; above it only token1. Inside the
/// range the result is the smaller of the two sides.
///
/// # Errors
///
/// Propagates the errors of [`liquidity0`] and [`liquidity1`]; in
/// particular [`AmmError::DivisionByZero`] when `current` sits on a bound
/// inside a degenerate range.
pub fn liquidity_for_amounts(
    amount0: f64,
    amount1: f64,
    current: SqrtPriceX96,
    lower: SqrtPriceX96,
    upper: SqrtPriceX96,
) -> crate::error::Result<Liquidity> {
    let (lower, upper) = SqrtPriceX96::sorted(lower, upper);
    if current <= lower {
        liquidity0(amount0, lower, upper)
    } else if current >= upper {
        liquidity1(amount1, lower, upper)
    } else {
        let from0 = liquidity0(amount0, current, upper)?;
        let from1 = liquidity1(amount1, lower, current)?;
        Ok(from0.min(from1))
    }
}

fn check_amount(amount: f64) -> crate::error::Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(AmmError::InvalidQuantity(
            "amount must be finite and non-negative",
        ));
    }
    Ok(())
}

/// `pb - pa` as `f64`, for ordered bounds.
fn difference(pa: SqrtPriceX96, pb: SqrtPriceX96) -> f64 {
    u256_to_f64(pb.get().saturating_sub(pa.get()))
}

/// Non-zero `pb - pa`, for ordered bounds.
fn width(pa: SqrtPriceX96, pb: SqrtPriceX96) -> crate::error::Result<f64> {
    if pa == pb {
        return Err(AmmError::DivisionByZero);
    }
    Ok(difference(pa, pb))
}

fn truncate(value: f64) -> crate::error::Result<Amount> {
    if !value.is_finite() {
        return Err(AmmError::Overflow("amount exceeds u128"));
    }
    Amount::from_f64(value, Rounding::Down)
}

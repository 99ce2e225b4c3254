//! Minimum acceptable amounts under a slippage tolerance.

use crate::domain::{Amount, BasisPoints, Rounding};

/// Returns `amount * (10_000 - tolerance) / 10_000` for both tokens.
///
/// Withdrawals round [`Rounding::Up`]; mints round [`Rounding::Down`].
///
/// # Errors
///
/// - [`AmmError::InvalidConfiguration`](crate::error::AmmError::InvalidConfiguration)
///   if `tolerance` exceeds 100%.
/// - [`AmmError::Overflow`](crate::error::AmmError::Overflow) if an amount
///   is too large to scale.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::{Amount, BasisPoints, Rounding};
/// use ranger_math::strategy::minimum_amounts;
///
/// let (min0, min1) = minimum_amounts(
///     Amount::new(1_000_000_000_000_000_000),
///     Amount::new(3_805_280_000),
///     BasisPoints::new(50),
///     Rounding::Down,
/// )
/// .expect("tolerance below 100%");
/// assert_eq!(min0, Amount::new(995_000_000_000_000_000));
/// assert_eq!(min1, Amount::new(3_786_253_600));
/// ```
pub fn minimum_amounts(
    amount0: Amount,
    amount1: Amount,
    tolerance: BasisPoints,
    rounding: Rounding,
) -> crate::error::Result<(Amount, Amount)> {
    let kept = tolerance.complement()?;
    Ok((kept.apply(amount0, rounding)?, kept.apply(amount1, rounding)?))
}

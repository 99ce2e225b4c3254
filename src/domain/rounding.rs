//! Explicit rounding direction for float-to-integer conversions.

/// Rounding direction used when a float result becomes an integer
/// [`Amount`](super::Amount).
///
/// The range math is evaluated in `f64`; every conversion back to raw
/// token units names its direction. Slippage minimums use it to round in
/// the pool's favour (`Down`, for mints) or the withdrawer's (`Up`).
///
/// # Examples
///
/// ```
/// use ranger_math::domain::Rounding;
///
/// assert_eq!(Rounding::Down.apply(2.7), 2.0);
/// assert_eq!(Rounding::Up.apply(2.1), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (truncation, the floor for non-negative values).
    Down,
}

impl Rounding {
    /// Rounds `value` to an integral `f64` in this direction.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Up => value.ceil(),
            Self::Down => value.trunc(),
        }
    }
}

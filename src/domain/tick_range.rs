//! Tick-bounded liquidity range.

use core::fmt;

use super::Tick;
use crate::error::AmmError;

/// The `[lower, upper]` tick bounds of a concentrated liquidity position.
///
/// # Invariants
///
/// - `lower < upper`: the range is never empty.
///
/// # Examples
///
/// ```
/// use ranger_math::domain::{Tick, TickRange};
///
/// let lower = Tick::new(-194_130).unwrap_or(Tick::ZERO);
/// let upper = Tick::new(-193_630).unwrap_or(Tick::ZERO);
/// let range = TickRange::new(lower, upper).expect("ordered bounds");
/// assert_eq!(range.width(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickRange {
    lower: Tick,
    upper: Tick,
}

impl TickRange {
    /// Creates a new `TickRange` with validated ordering.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTickRange`] if `lower >= upper`.
    pub const fn new(lower: Tick, upper: Tick) -> crate::error::Result<Self> {
        if lower.get() >= upper.get() {
            return Err(AmmError::InvalidTickRange(
                "lower tick must be less than upper tick",
            ));
        }
        Ok(Self { lower, upper })
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn lower(&self) -> Tick {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn upper(&self) -> Tick {
        self.upper
    }

    /// Returns `upper - lower`. Always positive.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.upper.get() - self.lower.get()
    }

    /// Returns `true` when `tick` lies strictly outside the bounds.
    ///
    /// Both bounds count as in range: a position sitting exactly on its
    /// upper tick is not rebalanced.
    #[must_use]
    pub const fn is_out_of_range(&self, tick: Tick) -> bool {
        tick.get() < self.lower.get() || tick.get() > self.upper.get()
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

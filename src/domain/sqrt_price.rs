//! Q64.96 fixed-point square-root price.

use core::fmt;

use primitive_types::U256;

use crate::math::u256_to_f64;

/// Fixed-point scale factor `2^96`.
pub const Q96: u128 = 1 << 96;

/// `2^96` as an `f64`. Powers of two are exact in binary floating point.
pub const Q96_F64: f64 = Q96 as f64;

/// `sqrt(price) * 2^96`, truncated to an integer.
///
/// This is the encoding Uniswap V3 stores in `slot0.sqrtPriceX96`. The
/// on-chain type is `uint160`; the value is held in a [`U256`], so every
/// tick's encoding fits, as do prices well beyond the tick range.
///
/// # Examples
///
/// ```
/// use primitive_types::U256;
/// use ranger_math::domain::{SqrtPriceX96, Q96};
///
/// let one = SqrtPriceX96::ONE;
/// assert_eq!(one.get(), U256::from(Q96));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SqrtPriceX96(U256);

impl SqrtPriceX96 {
    /// Encoding of price `1.0`.
    pub const ONE: Self = Self::new(Q96);

    /// Wraps a raw `sqrtPriceX96` value that fits in 128 bits, for example
    /// one read from a pool.
    pub const fn new(value: u128) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let limbs = [value as u64, (value >> 64) as u64, 0, 0];
        Self(U256(limbs))
    }

    /// Wraps a raw `sqrtPriceX96` value of any width.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the raw fixed-point value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the value is zero (price zero).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the raw value as `f64`, rounded to nearest (ties to even).
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        u256_to_f64(self.0)
    }

    /// Orders two values so that the first is the lower one.
    #[must_use]
    pub fn sorted(a: Self, b: Self) -> (Self, Self) {
        if a > b {
            (b, a)
        } else {
            (a, b)
        }
    }
}

impl fmt::Display for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

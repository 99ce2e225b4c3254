//! Exact wide-integer conversions to and from `f64`.
//!
//! Two `sqrtPriceX96` values multiply to as many as 512 bits. Converting
//! each factor to `f64` first would round twice; instead the product is
//! formed exactly in [`U512`] and rounded once, to nearest with ties to
//! even, matching an arbitrary-precision integer converted to a float.
//!
//! The reverse direction, [`truncate_to_u256`], takes an `f64` apart into
//! mantissa and exponent so that truncation toward zero is exact at any
//! magnitude.

use primitive_types::{U256, U512};

/// Width that converts to `f64` natively.
const NATIVE_BITS: usize = 128;

/// Explicit mantissa bits of an IEEE 754 double.
const MANTISSA_BITS: u32 = 52;

/// Exponent bias plus mantissa width: a finite double equals
/// `mantissa * 2^(biased_exponent - SCALED_BIAS)`.
const SCALED_BIAS: i32 = 1075;

/// Largest left shift of the 53-bit mantissa that stays within 256 bits.
const MAX_SHIFT: i32 = 256 - 53;

/// Converts a [`U256`] to the nearest `f64` (ties to even).
#[must_use]
pub fn u256_to_f64(value: U256) -> f64 {
    u512_to_f64(U512::from(value))
}

fn u512_to_f64(value: U512) -> f64 {
    let bits = value.bits();
    if bits <= NATIVE_BITS {
        #[allow(clippy::cast_precision_loss)]
        let v = value.low_u128() as f64;
        return v;
    }

    // Keep the top 128 bits and fold every dropped bit into a sticky LSB.
    // Bit 0 sits far below the 53-bit mantissa, so it only breaks ties.
    let shift = bits - NATIVE_BITS;
    let head = value >> shift;
    let sticky = u128::from((head << shift) != value);
    #[allow(clippy::cast_precision_loss)]
    let rounded = (head.low_u128() | sticky) as f64;

    // shift <= 384, and scaling by a power of two is exact.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let exponent = shift as i32;
    rounded * 2f64.powi(exponent)
}

/// Returns `a * b` as the nearest `f64`, with the product formed exactly.
///
/// # Examples
///
/// ```
/// use primitive_types::U256;
/// use ranger_math::math::product_to_f64;
///
/// let q96 = U256::one() << 96usize;
/// assert_eq!(product_to_f64(q96, q96), 2f64.powi(192));
/// ```
#[must_use]
pub fn product_to_f64(a: U256, b: U256) -> f64 {
    u512_to_f64(a.full_mul(b))
}

/// Truncates a non-negative `f64` toward zero into a [`U256`].
///
/// Returns `None` for negative or non-finite values and for values at or
/// above `2^256`.
#[must_use]
pub fn truncate_to_u256(value: f64) -> Option<U256> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    if value < 1.0 {
        return Some(U256::zero());
    }

    let raw = value.to_bits();
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let biased = ((raw >> MANTISSA_BITS) & 0x7ff) as i32;
    let mantissa = (raw & ((1u64 << MANTISSA_BITS) - 1)) | (1u64 << MANTISSA_BITS);
    let exponent = biased - SCALED_BIAS;

    // value >= 1 puts the exponent at -52 or above.
    if exponent <= 0 {
        return Some(U256::from(mantissa >> exponent.unsigned_abs()));
    }
    if exponent > MAX_SHIFT {
        return None;
    }
    #[allow(clippy::cast_sign_loss)]
    let shift = exponent as usize;
    Some(U256::from(mantissa) << shift)
}

//! Unified error type for the ranger-math library.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Math domain errors (log of zero, division by a zero-width
//! range) surface as a variant, never as a panic or a NaN.

use thiserror::Error;

/// Errors produced by the tick, sqrt-price, liquidity and range math.
///
/// Every variant except [`DivisionByZero`](Self::DivisionByZero) carries a
/// static context string naming the violated constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// A price was negative, zero where a logarithm is required, or not finite.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// A tick fell outside `[-887272, 887272]` or could not be computed.
    #[error("invalid tick: {0}")]
    InvalidTick(&'static str),

    /// A tick range was empty or inverted.
    #[error("invalid tick range: {0}")]
    InvalidTickRange(&'static str),

    /// Token decimals outside `0..=18`.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A token amount was negative or not finite.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A liquidity value was negative or not finite.
    #[error("invalid liquidity: {0}")]
    InvalidLiquidity(&'static str),

    /// A fee tier with no known tick spacing, or malformed fee units.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// A configuration parameter is out of its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A denominator evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A result does not fit the target representation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

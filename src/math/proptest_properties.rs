//! Property-based tests for the range math.
//!
//! 1. **Tick round trip**: `price_to_tick(tick_to_price(t))` is `t` or `t - 1`.
//! 2. **Encoding monotonicity**: a higher price never encodes lower.
//! 3. **Bound order independence** of the four `sqrtPriceX96` formulas.
//! 4. **Amounts are defined** for any non-negative liquidity.
//! 5. **Snapping** lands on the spacing grid, less than one spacing away.

use proptest::prelude::*;

use crate::domain::{Decimals, Liquidity, Price, SqrtPriceX96, Tick};
use crate::math::{
    calc_amount0, calc_amount1, liquidity0, liquidity1, nearest_initialized_tick,
    price_to_sqrt_price_x96, price_to_tick, tick_to_price,
};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Every valid tick except the minimum, whose round trip may land one
/// below the range.
fn tick_strategy() -> impl Strategy<Value = i32> {
    (Tick::MIN.get() + 1)..=Tick::MAX.get()
}

fn decimals_strategy() -> impl Strategy<Value = u8> {
    0u8..=18u8
}

/// Prices from `1e-12` to `1e18`, log-uniform.
fn price_strategy() -> impl Strategy<Value = f64> {
    (-12.0f64..18.0f64).prop_map(|e| 10f64.powf(e))
}

/// `sqrtPriceX96` values in `[2^90, 2^110]`: prices of roughly `2^-12`
/// to `2^28`.
fn sqrt_price_strategy() -> impl Strategy<Value = u128> {
    (1u128 << 90)..=(1u128 << 110)
}

fn liquidity_strategy() -> impl Strategy<Value = f64> {
    0.0f64..1e24f64
}

fn spacing_strategy() -> impl Strategy<Value = u16> {
    prop_oneof![Just(1u16), Just(10u16), Just(60u16), Just(200u16), 1u16..=500u16]
}

// ---------------------------------------------------------------------------
// Property 1: tick round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_tick_round_trip(tick_val in tick_strategy(), d in decimals_strategy()) {
        let (Ok(tick), Ok(decimals)) = (Tick::new(tick_val), Decimals::new(d)) else {
            return Ok(());
        };
        let price = tick_to_price(tick, decimals, decimals)
            .map_err(|e| TestCaseError::fail(format!("tick {tick_val} has no price: {e}")))?;
        prop_assert!(price.is_positive(), "price at tick {} must be positive", tick_val);

        let back = price_to_tick(price).map_err(|e| {
            TestCaseError::fail(format!("price {price} at tick {tick_val} has no tick: {e}"))
        })?;
        prop_assert!(
            back.get() == tick_val || back.get() == tick_val - 1,
            "tick {} came back as {}",
            tick_val, back.get()
        );
    }
}

// ---------------------------------------------------------------------------
// Property 2: encoding monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_encoding_monotonic(a in price_strategy(), b in price_strategy()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (Ok(lo), Ok(hi)) = (Price::new(lo), Price::new(hi)) else {
            return Ok(());
        };
        let (Ok(enc_lo), Ok(enc_hi)) = (price_to_sqrt_price_x96(lo), price_to_sqrt_price_x96(hi)) else {
            return Ok(());
        };
        prop_assert!(enc_lo <= enc_hi, "encode({}) > encode({})", lo, hi);
    }
}

// ---------------------------------------------------------------------------
// Property 3: bound order independence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_formulas_ignore_bound_order(
        a in sqrt_price_strategy(),
        b in sqrt_price_strategy(),
        amount in liquidity_strategy(),
    ) {
        let (pa, pb) = (SqrtPriceX96::new(a), SqrtPriceX96::new(b));
        let Ok(liquidity) = Liquidity::new(amount) else {
            return Ok(());
        };
        prop_assert_eq!(liquidity0(amount, pa, pb), liquidity0(amount, pb, pa));
        prop_assert_eq!(liquidity1(amount, pa, pb), liquidity1(amount, pb, pa));
        prop_assert_eq!(calc_amount0(liquidity, pa, pb), calc_amount0(liquidity, pb, pa));
        prop_assert_eq!(calc_amount1(liquidity, pa, pb), calc_amount1(liquidity, pb, pa));
    }
}

// ---------------------------------------------------------------------------
// Property 4: amounts are defined for non-negative liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_amounts_defined(
        a in sqrt_price_strategy(),
        b in sqrt_price_strategy(),
        l in liquidity_strategy(),
    ) {
        let Ok(liquidity) = Liquidity::new(l) else {
            return Ok(());
        };
        let (pa, pb) = (SqrtPriceX96::new(a), SqrtPriceX96::new(b));
        prop_assert!(calc_amount0(liquidity, pa, pb).is_ok());
        prop_assert!(calc_amount1(liquidity, pa, pb).is_ok());
    }
}

// ---------------------------------------------------------------------------
// Property 5: snapping
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_snap_lands_on_grid(tick_val in -800_000i32..=800_000i32, spacing in spacing_strategy()) {
        let Ok(tick) = Tick::new(tick_val) else {
            return Ok(());
        };
        let Ok(snapped) = nearest_initialized_tick(tick, spacing) else {
            return Ok(());
        };
        let spacing = i32::from(spacing);
        prop_assert_eq!(snapped.get().rem_euclid(spacing), 0);
        prop_assert!(
            (snapped.get() - tick_val).abs() < spacing,
            "tick {} snapped to {} at spacing {}",
            tick_val, snapped.get(), spacing
        );
    }
}

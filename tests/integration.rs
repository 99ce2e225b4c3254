//! Integration tests exercising the public API end to end.
//!
//! These tests follow the flows a range manager runs: read a pool price,
//! check the current position, plan a new range from a TOML config,
//! rebalance the wallet and derive mint minimums.

#![allow(clippy::panic)]

use approx::assert_relative_eq;
use ranger_math::config::RangeConfig;
use ranger_math::domain::{
    Amount, Decimals, FeeTier, Liquidity, Price, Rounding, SqrtPriceX96, Tick, TickRange,
};
use ranger_math::error::AmmError;
use ranger_math::math::{
    amount_y, amounts_for_liquidity, calc_amount0, calc_amount1, liquidity_for_amounts,
    liquidity_x, nearest_initialized_tick, price_to_sqrt_price_x96, price_to_tick,
    scaled_price_to_sqrt_price_x96, sqrt_price_x96_to_scaled_price, tick_at_sqrt_price_x96,
    tick_to_price,
};
use ranger_math::strategy::{minimum_amounts, PriceBand, RangePlan, Rebalance, SwapAction};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// `slot0.sqrtPriceX96` of a WETH/USDC pool.
const POOL_SQRT: SqrtPriceX96 = SqrtPriceX96::new(4_398_119_394_579_009_462_326_040);

fn price(v: f64) -> Price {
    let Ok(p) = Price::new(v) else {
        panic!("valid price");
    };
    p
}

fn tick(v: i32) -> Tick {
    let Ok(t) = Tick::new(v) else {
        panic!("valid tick");
    };
    t
}

fn encode(v: f64) -> SqrtPriceX96 {
    let Ok(s) = price_to_sqrt_price_x96(price(v)) else {
        panic!("encodable price");
    };
    s
}

fn weth_usdc() -> (Decimals, Decimals) {
    let (Ok(d0), Ok(d1)) = (Decimals::new(18), Decimals::new(6)) else {
        panic!("valid decimals");
    };
    (d0, d1)
}

fn config_from_toml(text: &str) -> RangeConfig {
    let Ok(config) = toml::from_str::<RangeConfig>(text) else {
        panic!("valid TOML");
    };
    let Ok(()) = config.validate() else {
        panic!("valid config");
    };
    config
}

// ---------------------------------------------------------------------------
// Range manager cycle
// ---------------------------------------------------------------------------

#[test]
fn pool_price_to_new_range() {
    let (d0, d1) = weth_usdc();

    // Read the pool.
    let Ok(human) = sqrt_price_x96_to_scaled_price(POOL_SQRT, d0, d1) else {
        panic!("decodable price");
    };
    assert_relative_eq!(human.get(), 3_081.590_043_367_433, max_relative = 1e-14);
    let Ok(pool_tick) = tick_at_sqrt_price_x96(POOL_SQRT) else {
        panic!("tick in range");
    };
    assert_eq!(pool_tick, tick(-195_989));

    // The old position around 3805 no longer covers the pool tick.
    let Ok(old) = TickRange::new(tick(-194_130), tick(-193_630)) else {
        panic!("valid range");
    };
    assert!(old.is_out_of_range(pool_tick));

    // Plan the replacement with the default config.
    let Ok(plan) = RangePlan::compute(human, &RangeConfig::default()) else {
        panic!("valid plan");
    };
    assert_eq!(plan.lower_tick(), tick(-196_240));
    assert_eq!(plan.upper_tick(), tick(-195_740));
    assert!(!plan.range().is_out_of_range(pool_tick));
    assert!(plan.lower_price() < human && human < plan.upper_price());
    assert_relative_eq!(plan.ratio0() + plan.ratio1(), 100.0, max_relative = 1e-12);
}

#[test]
fn toml_config_drives_the_plan() {
    let config = config_from_toml(
        r#"
        lower_pct = 5.0
        upper_pct = 5.0
        fee_pips = 3000
        "#,
    );
    assert_eq!(config.fee_tier(), Ok(FeeTier::TIER_0_30_PERCENT));

    let (d0, d1) = weth_usdc();
    let Ok(human) = sqrt_price_x96_to_scaled_price(POOL_SQRT, d0, d1) else {
        panic!("decodable price");
    };
    let Ok(plan) = RangePlan::compute(human, &config) else {
        panic!("valid plan");
    };
    assert_eq!(plan.lower_tick(), tick(-196_500));
    assert_eq!(plan.upper_tick(), tick(-195_480));
}

#[test]
fn rebalance_then_mint_minimums() {
    let config = RangeConfig::default();
    let (d0, d1) = weth_usdc();
    let Ok(plan) = RangePlan::compute(price(3805.28), &config) else {
        panic!("valid plan");
    };

    let Ok(rebalance) = Rebalance::plan(&plan, Amount::ZERO, Amount::new(8_000_000_000), d0, d1)
    else {
        panic!("finite targets");
    };
    let SwapAction::Token1ToToken0 { deficit, amount_in } = rebalance.action() else {
        panic!("expected a token1 -> token0 swap");
    };
    assert_eq!(deficit, rebalance.target0());
    assert!(amount_in < Amount::new(8_000_000_000));

    let Ok((min0, min1)) = minimum_amounts(
        rebalance.target0(),
        rebalance.target1(),
        config.mint_slippage(),
        Rounding::Down,
    ) else {
        panic!("valid tolerance");
    };
    assert!(min0 < rebalance.target0() && min1 < rebalance.target1());
}

#[test]
fn withdraw_minimums_round_up() {
    let config = RangeConfig::default();
    let Ok((min0, min1)) = minimum_amounts(
        Amount::new(173_529_708_339_385),
        Amount::new(889_477_899_810_046_336),
        config.withdraw_slippage(),
        Rounding::Up,
    ) else {
        panic!("valid tolerance");
    };
    // x * 9990 / 10000, ceiling
    assert_eq!(min0, Amount::new(173_356_178_631_046));
    assert_eq!(min1, Amount::new(888_588_421_910_236_290));
}

// ---------------------------------------------------------------------------
// Position lifecycle on sqrtPriceX96 bounds
// ---------------------------------------------------------------------------

#[test]
fn deposit_then_follow_price() {
    let (lower, current, upper) = (encode(4545.0), encode(5000.0), encode(5500.0));

    let Ok(liquidity) = liquidity_for_amounts(1e18, 5000e18, current, lower, upper) else {
        panic!("valid amounts");
    };

    // In range: token0 is the binding side, token1 is used in full.
    let Ok((a0, a1)) = amounts_for_liquidity(liquidity, current, lower, upper) else {
        panic!("valid position");
    };
    assert_eq!(a0, Amount::new(998_976_618_347_425_408));
    assert_eq!(a1, Amount::new(5_000_000_000_000_000_000_000));

    // Price falls below the range: everything converts to token0.
    let Ok((below0, below1)) = amounts_for_liquidity(liquidity, encode(4000.0), lower, upper) else {
        panic!("valid position");
    };
    assert_eq!(below1, Amount::ZERO);
    assert_eq!(below0, Amount::new(2_047_837_910_893_346_816));

    // Price rises above the range: everything converts to token1.
    let Ok((above0, above1)) = amounts_for_liquidity(liquidity, encode(6000.0), lower, upper) else {
        panic!("valid position");
    };
    assert_eq!(above0, Amount::ZERO);
    assert_eq!(above1, Amount::new(10_238_677_582_189_382_598_656));
}

#[test]
fn band_amounts_match_direct_formulas() {
    let Ok(band) = PriceBand::around(price(5000.0), 2.5, 2.5) else {
        panic!("valid band");
    };
    let Ok(l) = Liquidity::new(1e18) else {
        panic!("valid liquidity");
    };
    let Ok((a0, a1)) = band.amounts_for_liquidity(l) else {
        panic!("encodable band");
    };
    let (Ok(d0), Ok(d1)) = (
        calc_amount0(l, encode(5125.0), encode(5000.0)),
        calc_amount1(l, encode(4875.0), encode(5000.0)),
    ) else {
        panic!("valid amounts");
    };
    assert_eq!((a0, a1), (d0, d1));
    assert_relative_eq!(a0.as_f64() / 1e18, 0.000_173_529_708_339_385, max_relative = 1e-12);
    assert_relative_eq!(a1.as_f64() / 1e18, 0.889_477_899_810_046_3, max_relative = 1e-12);
}

// ---------------------------------------------------------------------------
// Plain-price deposits
// ---------------------------------------------------------------------------

#[test]
fn plain_family_deposit_for_one_token0() {
    let Ok(l) = liquidity_x(1.0, price(3805.28), price(3901.0039)) else {
        panic!("non-degenerate range");
    };
    let y = amount_y(l, price(3805.28), price(3710.7589));
    assert_relative_eq!(y, 3_852.282_132_691_329, max_relative = 1e-6);
}

// ---------------------------------------------------------------------------
// Ticks and decimals
// ---------------------------------------------------------------------------

#[test]
fn scaled_tick_price_and_snap() {
    let (d0, d1) = weth_usdc();
    let Ok(p) = tick_to_price(tick(200_000), d0, d1) else {
        panic!("finite price");
    };
    assert_relative_eq!(p.get(), 4.846_803_050_246_660_4e20, max_relative = 1e-12);

    let Ok(raw_tick) = price_to_tick(price(5000.0)) else {
        panic!("tick in range");
    };
    let Ok(snapped) = nearest_initialized_tick(raw_tick, 60) else {
        panic!("tick in range");
    };
    // 85176 mod 60 = 36
    assert_eq!(snapped, tick(85_200));
}

#[test]
fn cheap_token1_pool_encodes_past_u128() {
    // A 6-decimal token0 quoted at 1e9 units of an 18-decimal token1 is a
    // raw price of 1e21, well past 2^64.
    let (Ok(d0), Ok(d1)) = (Decimals::new(6), Decimals::new(18)) else {
        panic!("valid decimals");
    };
    let Ok(sqrt) = scaled_price_to_sqrt_price_x96(price(1e9), d0, d1) else {
        panic!("encodable price");
    };
    assert_eq!(sqrt.to_string(), "2505414483750479216336276658556474753024");
    assert_eq!(tick_at_sqrt_price_x96(sqrt), Ok(tick(483_567)));

    let Ok(back) = sqrt_price_x96_to_scaled_price(sqrt, d0, d1) else {
        panic!("decodable price");
    };
    assert_relative_eq!(back.get(), 1e9, max_relative = 1e-15);
}

#[test]
fn errors_propagate_as_values() {
    assert!(matches!(price_to_tick(Price::ZERO), Err(AmmError::InvalidPrice(_))));
    assert!(matches!(
        nearest_initialized_tick(Tick::ZERO, 0),
        Err(AmmError::InvalidConfiguration(_))
    ));
    let same = encode(5000.0);
    assert_eq!(
        liquidity_for_amounts(1.0, 1.0, encode(4000.0), same, same),
        Err(AmmError::DivisionByZero)
    );
    assert!(matches!(
        RangePlan::compute(price(3805.28), &RangeConfig { fee_pips: 1_234, ..RangeConfig::default() }),
        Err(AmmError::InvalidFee(_))
    ));
}

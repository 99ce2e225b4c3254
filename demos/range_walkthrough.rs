//! Walkthrough of one range-management cycle on a WETH/USDC pool.
//!
//! Decodes the pool price, checks an old position, plans a new range,
//! rebalances a wallet and prints the mint minimums.
//!
//! # Run
//!
//! ```bash
//! cargo run --example range_walkthrough
//! ```

use ranger_math::config::RangeConfig;
use ranger_math::domain::{Amount, Rounding, SqrtPriceX96, Tick, TickRange};
use ranger_math::math::{sqrt_price_x96_to_scaled_price, tick_at_sqrt_price_x96};
use ranger_math::strategy::{minimum_amounts, RangePlan, Rebalance, SwapAction};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Range walkthrough: WETH/USDC 0.05% ===\n");

    let config = RangeConfig::default();
    let (decimals0, decimals1) = (config.decimals0()?, config.decimals1()?);

    // ── 1. Read the pool ────────────────────────────────────────────────
    let sqrt_price = SqrtPriceX96::new(4_398_119_394_579_009_462_326_040);
    let price = sqrt_price_x96_to_scaled_price(sqrt_price, decimals0, decimals1)?;
    let pool_tick = tick_at_sqrt_price_x96(sqrt_price)?;
    println!("sqrtPriceX96 {sqrt_price} -> price {price:.4}, tick {pool_tick}");

    // ── 2. Check the current position ───────────────────────────────────
    let old = TickRange::new(Tick::new(-194_130)?, Tick::new(-193_630)?)?;
    if old.is_out_of_range(pool_tick) {
        println!("position {old} is out of range, withdrawing");
        let (min0, min1) = minimum_amounts(
            Amount::new(173_529_708_339_385),
            Amount::new(889_477_899_810_046_336),
            config.withdraw_slippage(),
            Rounding::Up,
        )?;
        println!("  withdraw minimums: {min0} / {min1}");
    }

    // ── 3. Plan the new range ───────────────────────────────────────────
    let plan = RangePlan::compute(price, &config)?;
    println!(
        "\nnew range {} -> prices {:.4} .. {:.4}",
        plan.range(),
        plan.lower_price(),
        plan.upper_price()
    );
    println!("value split: {:.2}% token0 / {:.2}% token1", plan.ratio0(), plan.ratio1());

    // ── 4. Rebalance the wallet ─────────────────────────────────────────
    let balance0 = Amount::new(250_000_000_000_000_000); // 0.25 WETH
    let balance1 = Amount::new(2_500_000_000); // 2500 USDC
    let rebalance = Rebalance::plan(&plan, balance0, balance1, decimals0, decimals1)?;
    println!("\ntargets: {} / {}", rebalance.target0(), rebalance.target1());
    match rebalance.action() {
        SwapAction::Hold => println!("no swap needed"),
        SwapAction::Token1ToToken0 { deficit, amount_in } => {
            println!("swap ~{amount_in} token1 for {deficit} token0");
        }
        SwapAction::Token0ToToken1 { deficit, amount_in } => {
            println!("swap ~{amount_in} token0 for {deficit} token1");
        }
    }

    // ── 5. Mint minimums ────────────────────────────────────────────────
    let (min0, min1) = minimum_amounts(
        rebalance.target0(),
        rebalance.target1(),
        config.mint_slippage(),
        Rounding::Down,
    )?;
    println!("mint minimums: {min0} / {min1}");

    Ok(())
}

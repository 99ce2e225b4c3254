//! `ranger-math` command-line front end.
//!
//! Each subcommand runs one computation and prints its result to stdout.
//! Logs go to stderr; set `RUST_LOG` or pass `--verbose`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use primitive_types::U256;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ranger_math::config::RangeConfig;
use ranger_math::domain::{Amount, Decimals, Liquidity, Price, Rounding, SqrtPriceX96, Tick};
use ranger_math::math::{
    amount_x, amount_y, liquidity_x, liquidity_y, nearest_initialized_tick,
    price_to_sqrt_price_x96, price_to_tick, sqrt_price_x96_to_price,
    sqrt_price_x96_to_scaled_price, tick_to_price,
};
use ranger_math::strategy::{minimum_amounts, PriceBand, RangePlan, Rebalance, SwapAction};

const FLOAT_FORMAT_NOTE: &str = "Floats print in shortest round-trip decimal form: \
    integral values have no trailing `.0` (`4875`, not `4875.0`) and small or \
    large values are never written with an exponent.";

#[derive(Parser, Debug)]
#[command(name = "ranger-math")]
#[command(about = "Concentrated-liquidity range math")]
struct Cli {
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Band around a price and the amounts behind a liquidity
    #[command(after_help = FLOAT_FORMAT_NOTE)]
    Band {
        price: f64,
        #[arg(long, default_value_t = 2.5)]
        lower_pct: f64,
        #[arg(long, default_value_t = 2.5)]
        upper_pct: f64,
        #[arg(long, default_value_t = 1e18)]
        liquidity: f64,
    },
    /// Matching deposits for a plain-price range
    #[command(after_help = FLOAT_FORMAT_NOTE)]
    Deposit {
        #[arg(long, default_value_t = 1.0)]
        x: f64,
        #[arg(long, default_value_t = 8000.0)]
        y: f64,
        #[arg(long, default_value_t = 3805.28)]
        price: f64,
        #[arg(long, default_value_t = 3710.7589)]
        price_low: f64,
        #[arg(long, default_value_t = 3901.0039)]
        price_high: f64,
    },
    /// Tick of a price
    Tick { price: f64 },
    /// Price at a tick
    Price {
        #[arg(allow_negative_numbers = true)]
        tick: i32,
        #[arg(long, default_value_t = 0)]
        decimals0: u8,
        #[arg(long, default_value_t = 0)]
        decimals1: u8,
    },
    /// Nearest initialized tick on a spacing grid
    Snap {
        #[arg(allow_negative_numbers = true)]
        tick: i32,
        #[arg(long, default_value_t = 10)]
        spacing: u16,
    },
    /// Encode a price as sqrtPriceX96
    Encode { price: f64 },
    /// Decode a sqrtPriceX96, rescaled when both decimals are given
    Decode {
        #[arg(value_parser = parse_sqrt_price)]
        sqrt_price_x96: U256,
        #[arg(long, requires = "decimals1")]
        decimals0: Option<u8>,
        #[arg(long, requires = "decimals0")]
        decimals1: Option<u8>,
    },
    /// Plan a position range, and the rebalance for a wallet
    Plan {
        price: f64,
        /// TOML file with `RangeConfig` fields; defaults otherwise
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Raw token0 balance
        #[arg(long, requires = "balance1")]
        balance0: Option<u128>,
        /// Raw token1 balance
        #[arg(long, requires = "balance0")]
        balance1: Option<u128>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(command = ?cli.command, "running");

    for line in run(cli.command)? {
        println!("{line}");
    }
    Ok(())
}

/// Runs one subcommand and returns its stdout lines in order.
fn run(command: Command) -> Result<Vec<String>> {
    match command {
        Command::Band {
            price,
            lower_pct,
            upper_pct,
            liquidity,
        } => band(price, lower_pct, upper_pct, liquidity),
        Command::Deposit {
            x,
            y,
            price,
            price_low,
            price_high,
        } => deposit(x, y, price, price_low, price_high),
        Command::Tick { price } => {
            let tick = price_to_tick(parse_price(price)?)?;
            Ok(vec![tick.to_string()])
        }
        Command::Price {
            tick,
            decimals0,
            decimals1,
        } => {
            let price = tick_to_price(
                Tick::new(tick)?,
                Decimals::new(decimals0)?,
                Decimals::new(decimals1)?,
            )?;
            Ok(vec![price.to_string()])
        }
        Command::Snap { tick, spacing } => {
            let snapped = nearest_initialized_tick(Tick::new(tick)?, spacing)?;
            Ok(vec![snapped.to_string()])
        }
        Command::Encode { price } => {
            let sqrt = price_to_sqrt_price_x96(parse_price(price)?)?;
            Ok(vec![sqrt.to_string()])
        }
        Command::Decode {
            sqrt_price_x96,
            decimals0,
            decimals1,
        } => decode(SqrtPriceX96::from_u256(sqrt_price_x96), decimals0, decimals1),
        Command::Plan {
            price,
            config,
            balance0,
            balance1,
        } => plan(price, config.as_deref(), balance0.zip(balance1)),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("ranger_math=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_price(value: f64) -> Result<Price> {
    Price::new(value).with_context(|| format!("bad price {value}"))
}

fn parse_sqrt_price(value: &str) -> Result<U256, String> {
    U256::from_dec_str(value).map_err(|e| format!("not a 256-bit decimal integer: {e:?}"))
}

fn band(price: f64, lower_pct: f64, upper_pct: f64, liquidity: f64) -> Result<Vec<String>> {
    let band = PriceBand::around(parse_price(price)?, lower_pct, upper_pct)?;
    let bounds = format!("{} {}", band.lower(), band.upper());

    let liquidity = Liquidity::new(liquidity).context("bad liquidity")?;
    let (amount0, amount1) = band.amounts_for_liquidity(liquidity)?;
    let amounts = format!("{} {}", amount0.as_f64() / 1e18, amount1.as_f64() / 1e18);
    Ok(vec![bounds, amounts])
}

fn deposit(x: f64, y: f64, price: f64, price_low: f64, price_high: f64) -> Result<Vec<String>> {
    let price = parse_price(price)?;
    let low = parse_price(price_low)?;
    let high = parse_price(price_high)?;

    let lx = liquidity_x(x, price, high)?;
    let needed_y = amount_y(lx, price, low);

    let ly = liquidity_y(y, price, low)?;
    let needed_x = amount_x(ly, price.inverse()?, high.inverse()?);
    Ok(vec![format!("{x} -> {needed_y}"), format!("{y} -> {needed_x}")])
}

fn decode(sqrt: SqrtPriceX96, decimals0: Option<u8>, decimals1: Option<u8>) -> Result<Vec<String>> {
    let price = match decimals0.zip(decimals1) {
        Some((d0, d1)) => {
            sqrt_price_x96_to_scaled_price(sqrt, Decimals::new(d0)?, Decimals::new(d1)?)?
        }
        None => sqrt_price_x96_to_price(sqrt)?,
    };
    Ok(vec![price.to_string()])
}

fn plan(
    price: f64,
    config_path: Option<&Path>,
    balances: Option<(u128, u128)>,
) -> Result<Vec<String>> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => RangeConfig::default(),
    };
    let plan = RangePlan::compute(parse_price(price)?, &config)?;
    info!(%plan, "range planned");

    let mut lines = vec![
        format!("lower_tick {}", plan.lower_tick()),
        format!("upper_tick {}", plan.upper_tick()),
        format!("lower_price {}", plan.lower_price()),
        format!("upper_price {}", plan.upper_price()),
        format!("price {}", plan.price()),
        format!("ratio0 {}", plan.ratio0()),
        format!("ratio1 {}", plan.ratio1()),
    ];

    let Some((balance0, balance1)) = balances else {
        return Ok(lines);
    };
    let (balance0, balance1) = (Amount::new(balance0), Amount::new(balance1));
    let rebalance = Rebalance::plan(
        &plan,
        balance0,
        balance1,
        config.decimals0()?,
        config.decimals1()?,
    )?;
    lines.push(format!("target0 {}", rebalance.target0()));
    lines.push(format!("target1 {}", rebalance.target1()));
    lines.push(match rebalance.action() {
        SwapAction::Hold => "swap none".to_owned(),
        SwapAction::Token1ToToken0 { deficit, amount_in } => {
            format!("swap token1->token0 in {amount_in} for {deficit}")
        }
        SwapAction::Token0ToToken1 { deficit, amount_in } => {
            format!("swap token0->token1 in {amount_in} for {deficit}")
        }
    });

    let (min0, min1) = minimum_amounts(
        rebalance.target0(),
        rebalance.target1(),
        config.mint_slippage(),
        Rounding::Down,
    )?;
    lines.push(format!("mint_min {min0} {min1}"));
    Ok(lines)
}

fn load_config(path: &Path) -> Result<RangeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: RangeConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config file {}", path.display()))?;
    debug!(?config, "loaded config");
    Ok(config)
}

//! # ranger-math
//!
//! Concentrated-liquidity (Uniswap V3 style) range math: conversions
//! between prices, ticks and `sqrtPriceX96`, the liquidity and token
//! amount formulas for a price range, and the range-planning steps built
//! on them.
//!
//! The library is stateless. Every function takes validated value types
//! from [`domain`] and returns [`error::Result`].
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | yes | Builds the `ranger-math` binary (`clap`, `anyhow`, `toml`, `tracing-subscriber`) |
//!
//! Library users can drop the binary's dependencies:
//!
//! ```toml
//! [dependencies]
//! ranger-math = { version = "0.1", default-features = false }
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use ranger_math::config::RangeConfig;
//! use ranger_math::domain::{Liquidity, Price};
//! use ranger_math::math::{price_to_sqrt_price_x96, price_to_tick};
//! use ranger_math::strategy::{PriceBand, RangePlan};
//!
//! let price = Price::new(5000.0).expect("valid price");
//!
//! // Tick and fixed-point encoding of the price.
//! assert_eq!(price_to_tick(price).expect("in range").get(), 85_176);
//! let sqrt = price_to_sqrt_price_x96(price).expect("fits in 256 bits");
//! assert_eq!(sqrt.to_string(), "5602277097478614198912276234240");
//!
//! // Amounts behind 1e18 of liquidity in a ±2.5% band.
//! let band = PriceBand::around(price, 2.5, 2.5).expect("valid band");
//! let (amount0, amount1) = band
//!     .amounts_for_liquidity(Liquidity::new(1e18).expect("valid"))
//!     .expect("encodable band");
//! assert_eq!(amount0.get(), 173_529_708_339_385);
//! assert_eq!(amount1.get(), 889_477_899_810_046_336);
//!
//! // A snapped range for a WETH/USDC position.
//! let plan = RangePlan::compute(Price::new(3805.28).expect("valid"), &RangeConfig::default())
//!     .expect("valid plan");
//! assert_eq!(plan.lower_tick().get(), -194_130);
//! assert_eq!(plan.upper_tick().get(), -193_630);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  strategy   │  PriceBand, RangePlan, Rebalance, slippage
//! └──────┬──────┘
//!        │ uses RangeConfig
//!        ▼
//! ┌─────────────┐
//! │    math     │  tick, sqrtPriceX96, liquidity and range formulas
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   domain    │  Price, Tick, SqrtPriceX96, Liquidity, Amount, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Price`](domain::Price), [`Tick`](domain::Tick), [`SqrtPriceX96`](domain::SqrtPriceX96), etc. |
//! | [`math`] | Pure formulas: tick math, `sqrtPriceX96` encoding, liquidity and amounts |
//! | [`strategy`] | Range planning: [`PriceBand`](strategy::PriceBand), [`RangePlan`](strategy::RangePlan), [`Rebalance`](strategy::Rebalance) |
//! | [`config`] | [`RangeConfig`](config::RangeConfig) planning parameters |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod strategy;

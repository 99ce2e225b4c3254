//! Swap needed to bring wallet balances to a plan's token split.

use tracing::debug;

use super::RangePlan;
use crate::domain::{Amount, Decimals, Rounding};
use crate::error::AmmError;

/// Direction and size of a rebalancing swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapAction {
    /// Balances already cover both targets.
    Hold,
    /// Sell token1 to cover a token0 shortfall.
    Token1ToToken0 {
        /// Token0 still missing, raw units.
        deficit: Amount,
        /// Estimated token1 input at the spot price, rounded up.
        amount_in: Amount,
    },
    /// Sell token0 to cover a token1 shortfall.
    Token0ToToken1 {
        /// Token1 still missing, raw units.
        deficit: Amount,
        /// Estimated token0 input at the spot price, rounded up.
        amount_in: Amount,
    },
}

/// Per-token targets for a wallet and the swap that reaches them.
///
/// Both balances are valued in token1 at the plan's price; the total is
/// split by the plan's ratios. Token0 is checked first: a token0
/// shortfall always wins over a token1 one.
///
/// # Examples
///
/// ```
/// use ranger_math::config::RangeConfig;
/// use ranger_math::domain::{Amount, Decimals, Price};
/// use ranger_math::strategy::{RangePlan, Rebalance, SwapAction};
///
/// let config = RangeConfig::default();
/// let plan = RangePlan::compute(Price::new(3805.28).expect("valid"), &config).expect("plan");
/// let (d0, d1) = (config.decimals0().expect("valid"), config.decimals1().expect("valid"));
///
/// // 8000 USDC and no WETH: buy WETH with roughly half of the USDC.
/// let rebalance = Rebalance::plan(&plan, Amount::ZERO, Amount::new(8_000_000_000), d0, d1)
///     .expect("finite targets");
/// assert!(matches!(rebalance.action(), SwapAction::Token1ToToken0 { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rebalance {
    target0: Amount,
    target1: Amount,
    action: SwapAction,
}

impl Rebalance {
    /// Computes targets and the swap for `balance0` / `balance1` (raw units).
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if the plan's price is zero.
    /// - [`AmmError::Overflow`] if a target or swap input exceeds `u128`.
    pub fn plan(
        plan: &RangePlan,
        balance0: Amount,
        balance1: Amount,
        decimals0: Decimals,
        decimals1: Decimals,
    ) -> crate::error::Result<Self> {
        let price = plan.price();
        if !price.is_positive() {
            return Err(AmmError::DivisionByZero);
        }
        let price = price.get();

        let weight0 = decimals0.to_human(balance0) * price;
        let weight1 = decimals1.to_human(balance1);
        let total = weight0 + weight1;

        let target0 = to_amount(
            decimals0.to_raw(total * (plan.ratio0() / 100.0) / price),
            Rounding::Down,
        )?;
        let target1 = to_amount(decimals1.to_raw(total * (plan.ratio1() / 100.0)), Rounding::Down)?;

        let action = if let Some(deficit) = shortfall(target0, balance0) {
            let value1 = decimals0.to_human(deficit) * price;
            let amount_in = to_amount(decimals1.to_raw(value1), Rounding::Up)?;
            SwapAction::Token1ToToken0 { deficit, amount_in }
        } else if let Some(deficit) = shortfall(target1, balance1) {
            let value0 = decimals1.to_human(deficit) / price;
            let amount_in = to_amount(decimals0.to_raw(value0), Rounding::Up)?;
            SwapAction::Token0ToToken1 { deficit, amount_in }
        } else {
            SwapAction::Hold
        };

        debug!(%target0, %target1, ?action, "rebalance");
        Ok(Self {
            target0,
            target1,
            action,
        })
    }

    /// Token0 the position should hold, floored to raw units.
    #[must_use]
    pub const fn target0(&self) -> Amount {
        self.target0
    }

    /// Token1 the position should hold, floored to raw units.
    #[must_use]
    pub const fn target1(&self) -> Amount {
        self.target1
    }

    /// The swap to perform.
    #[must_use]
    pub const fn action(&self) -> SwapAction {
        self.action
    }
}

/// `target - balance` when the target is strictly larger.
fn shortfall(target: Amount, balance: Amount) -> Option<Amount> {
    if target > balance {
        target.checked_sub(&balance)
    } else {
        None
    }
}

fn to_amount(value: f64, rounding: Rounding) -> crate::error::Result<Amount> {
    if !value.is_finite() {
        return Err(AmmError::Overflow("rebalance amount is not finite"));
    }
    Amount::from_f64(value, rounding)
}

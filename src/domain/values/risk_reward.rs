//! Risk/reward calculation for a long position protected by a stop-loss.
//!
//! Given the current price, the stop-loss price and one driving value
//! (a dollar investment or a share count), derives:
//! - `risk_per_share = current - stop`
//! - `reward_per_share = risk_per_share * ratio`
//! - `target_price = current + reward_per_share`
//! - loss at the stop and profit at the target for the whole position
//! - the stop and target moves as percentages of the current price
//!
//! Values keep full `f64` precision. Rounding to cents is left to renderers.

use crate::domain::error::DomainError;
use crate::domain::values::input_mode::InputMode;
use serde::{Deserialize, Serialize};

/// The single value that sizes the position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PositionDriver {
    /// Dollar amount to invest; shares are derived.
    Investment(f64),
    /// Number of shares; the investment is derived.
    Shares(f64),
}

impl PositionDriver {
    pub fn mode(&self) -> InputMode {
        match self {
            PositionDriver::Investment(_) => InputMode::AmountDriven,
            PositionDriver::Shares(_) => InputMode::ShareDriven,
        }
    }
}

/// Snapshot of every derived metric. Recomputed wholesale, never patched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRewardResult {
    pub shares: f64,
    pub investment: f64,
    pub risk_per_share: f64,
    pub reward_per_share: f64,
    pub target_price: f64,
    pub potential_loss: f64,
    pub profit_at_target: f64,
    /// Negative for a stop below the current price.
    pub stop_loss_percent: f64,
    pub target_percent: f64,
    pub risk_reward_ratio: f64,
}

impl RiskRewardResult {
    /// The driver that reproduces this result in `mode`.
    pub fn driver_for(&self, mode: InputMode) -> PositionDriver {
        match mode {
            InputMode::AmountDriven => PositionDriver::Investment(self.investment),
            InputMode::ShareDriven => PositionDriver::Shares(self.shares),
        }
    }
}

/// Derive the full risk/reward snapshot.
///
/// Fails only with `DomainError::InsufficientInput` when `driver` is `None`.
/// Inputs are expected to be positive and finite with `current_price` above
/// `stop_loss_price`; the readiness gate guarantees this for normal callers.
pub fn calculate_risk_reward(
    current_price: f64,
    stop_loss_price: f64,
    driver: Option<PositionDriver>,
    ratio: f64,
) -> Result<RiskRewardResult, DomainError> {
    let (shares, investment) = match driver.ok_or(DomainError::InsufficientInput)? {
        // echo the amount instead of recomputing shares * price
        PositionDriver::Investment(amount) => (amount / current_price, amount),
        PositionDriver::Shares(count) => (count, count * current_price),
    };

    let risk_per_share = current_price - stop_loss_price;
    let reward_per_share = risk_per_share * ratio;
    let target_price = current_price + reward_per_share;

    Ok(RiskRewardResult {
        shares,
        investment,
        risk_per_share,
        reward_per_share,
        target_price,
        potential_loss: shares * risk_per_share,
        profit_at_target: shares * reward_per_share,
        stop_loss_percent: (stop_loss_price - current_price) / current_price * 100.0,
        target_percent: (target_price - current_price) / current_price * 100.0,
        risk_reward_ratio: ratio,
    })
}

//! Policy limits for validation and calculation.
//!
//! The calculator and validators never hard-code these numbers; they are
//! handed a `RiskPolicy` so tests and callers can vary them.

use serde::{Deserialize, Serialize};

/// Default reward multiple of the risked amount (2:1).
pub const DEFAULT_RISK_REWARD_RATIO: f64 = 2.0;
/// Prices above this are treated as fat-finger input.
pub const DEFAULT_MAX_PRICE: f64 = 1_000_000.0;
/// Smallest permitted position size in the base currency unit.
pub const DEFAULT_MIN_INVESTMENT: f64 = 1.0;
/// Largest acceptable distance from current price to stop, in percent.
pub const DEFAULT_MAX_RISK_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Reward per share as a multiple of risk per share.
    pub default_ratio: f64,
    /// Upper sanity bound for price fields.
    pub max_price: f64,
    /// Minimum accepted investment amount.
    pub min_investment: f64,
    /// Maximum stop distance in percent of the current price.
    pub max_risk_percent: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            default_ratio: DEFAULT_RISK_REWARD_RATIO,
            max_price: DEFAULT_MAX_PRICE,
            min_investment: DEFAULT_MIN_INVESTMENT,
            max_risk_percent: DEFAULT_MAX_RISK_PERCENT,
        }
    }
}

impl RiskPolicy {
    /// Check that every limit is a positive finite number and that the risk cap
    /// is a usable percentage.
    pub fn validate(&self) -> Result<(), String> {
        let limits = [
            ("default_ratio", self.default_ratio),
            ("max_price", self.max_price),
            ("min_investment", self.min_investment),
            ("max_risk_percent", self.max_risk_percent),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be a positive number, got {value}"));
            }
        }
        if self.max_risk_percent > 100.0 {
            return Err(format!(
                "max_risk_percent must not exceed 100, got {}",
                self.max_risk_percent
            ));
        }
        Ok(())
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.default_ratio = ratio;
        self
    }
}

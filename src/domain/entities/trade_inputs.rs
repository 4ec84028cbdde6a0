use crate::domain::values::input_mode::InputMode;
use crate::domain::values::risk_reward::PositionDriver;
use crate::domain::values::validation::parse_positive;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENT_PRICE: &str = "120";
pub const DEFAULT_STOP_LOSS: &str = "110";
pub const DEFAULT_INVESTMENT: &str = "5000";

/// Raw text of the four calculator fields plus the mode flag.
///
/// Only the field selected by `mode` drives the calculation. The other one
/// keeps whatever text was typed into it and is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInputs {
    pub current_price: String,
    pub stop_loss_price: String,
    pub investment_amount: String,
    pub share_count: String,
    pub mode: InputMode,
}

impl Default for TradeInputs {
    fn default() -> Self {
        Self {
            current_price: DEFAULT_CURRENT_PRICE.to_string(),
            stop_loss_price: DEFAULT_STOP_LOSS.to_string(),
            investment_amount: DEFAULT_INVESTMENT.to_string(),
            share_count: String::new(),
            mode: InputMode::AmountDriven,
        }
    }
}

impl TradeInputs {
    pub fn new(
        current_price: impl Into<String>,
        stop_loss_price: impl Into<String>,
        investment_amount: impl Into<String>,
        share_count: impl Into<String>,
        mode: InputMode,
    ) -> Self {
        Self {
            current_price: current_price.into(),
            stop_loss_price: stop_loss_price.into(),
            investment_amount: investment_amount.into(),
            share_count: share_count.into(),
            mode,
        }
    }

    pub fn amount_driven(
        current_price: impl Into<String>,
        stop_loss_price: impl Into<String>,
        investment_amount: impl Into<String>,
    ) -> Self {
        Self::new(
            current_price,
            stop_loss_price,
            investment_amount,
            String::new(),
            InputMode::AmountDriven,
        )
    }

    pub fn share_driven(
        current_price: impl Into<String>,
        stop_loss_price: impl Into<String>,
        share_count: impl Into<String>,
    ) -> Self {
        Self::new(
            current_price,
            stop_loss_price,
            String::new(),
            share_count,
            InputMode::ShareDriven,
        )
    }

    /// Text of the field the current mode treats as authoritative.
    pub fn authoritative_text(&self) -> &str {
        match self.mode {
            InputMode::AmountDriven => &self.investment_amount,
            InputMode::ShareDriven => &self.share_count,
        }
    }

    /// Parsed driving value for the current mode, if it is a positive number.
    pub fn driver(&self) -> Option<PositionDriver> {
        let value = parse_positive(self.authoritative_text())?;
        Some(match self.mode {
            InputMode::AmountDriven => PositionDriver::Investment(value),
            InputMode::ShareDriven => PositionDriver::Shares(value),
        })
    }

    /// Both prices as positive numbers with the stop strictly below current.
    pub fn prices(&self) -> Option<(f64, f64)> {
        let current = parse_positive(&self.current_price)?;
        let stop = parse_positive(&self.stop_loss_price)?;
        (current > stop).then_some((current, stop))
    }

    /// Readiness gate: true when a calculation would be meaningful.
    ///
    /// Looser than the field validators on purpose: no upper price bound, no
    /// minimum investment and no risk cap.
    pub fn is_ready(&self) -> bool {
        self.prices().is_some() && self.driver().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_ready() {
        let inputs = TradeInputs::default();
        assert_eq!(inputs.mode, InputMode::AmountDriven);
        assert!(inputs.share_count.is_empty());
        assert!(inputs.is_ready());
    }

    #[test]
    fn test_stop_must_be_strictly_below() {
        assert!(!TradeInputs::amount_driven("100", "100", "5000").is_ready());
        assert!(!TradeInputs::amount_driven("100", "120", "5000").is_ready());
        assert!(TradeInputs::amount_driven("100", "99.99", "5000").is_ready());
    }

    #[test]
    fn test_only_authoritative_field_counts() {
        let mut inputs = TradeInputs::new("100", "90", "abc", "10", InputMode::ShareDriven);
        assert!(inputs.is_ready());
        assert_eq!(inputs.driver(), Some(PositionDriver::Shares(10.0)));

        inputs.mode = InputMode::AmountDriven;
        assert!(!inputs.is_ready());
        assert_eq!(inputs.share_count, "10");
    }

    #[test]
    fn test_gate_ignores_strict_limits() {
        // above the sanity bound, below the minimum investment and a 90% stop
        assert!(TradeInputs::amount_driven("2000000", "1900000", "0.5").is_ready());
        assert!(TradeInputs::amount_driven("100", "10", "5000").is_ready());
    }

    #[test]
    fn test_non_positive_or_blank_driver() {
        assert!(!TradeInputs::amount_driven("100", "90", "0").is_ready());
        assert!(!TradeInputs::amount_driven("100", "90", "-5").is_ready());
        assert!(!TradeInputs::amount_driven("100", "90", "").is_ready());
        assert!(!TradeInputs::share_driven("100", "90", " ").is_ready());
    }

    #[test]
    fn test_non_positive_prices() {
        assert!(!TradeInputs::amount_driven("0", "-1", "5000").is_ready());
        assert!(!TradeInputs::amount_driven("100", "0", "5000").is_ready());
        assert!(!TradeInputs::amount_driven("", "90", "5000").is_ready());
    }
}

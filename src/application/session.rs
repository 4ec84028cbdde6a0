use crate::application::calculate::CalculateUseCase;
use crate::domain::entities::calculation::Calculation;
use crate::domain::entities::trade_inputs::TradeInputs;
use crate::domain::error::DomainError;
use crate::domain::values::input_mode::InputMode;
use crate::domain::values::risk_policy::RiskPolicy;
use crate::domain::values::risk_reward::RiskRewardResult;
use std::fmt;
use std::str::FromStr;

/// An editable calculator field, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionField {
    CurrentPrice,
    StopLossPrice,
    InvestmentAmount,
    ShareCount,
    Mode,
}

impl fmt::Display for SessionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionField::CurrentPrice => write!(f, "price"),
            SessionField::StopLossPrice => write!(f, "stop"),
            SessionField::InvestmentAmount => write!(f, "amount"),
            SessionField::ShareCount => write!(f, "shares"),
            SessionField::Mode => write!(f, "mode"),
        }
    }
}

impl FromStr for SessionField {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price" | "current" | "current_price" => Ok(SessionField::CurrentPrice),
            "stop" | "stop_loss" | "stop_loss_price" => Ok(SessionField::StopLossPrice),
            "amount" | "investment" | "investment_amount" => Ok(SessionField::InvestmentAmount),
            "shares" | "share_count" => Ok(SessionField::ShareCount),
            "mode" => Ok(SessionField::Mode),
            _ => Err(format!("Unknown field: {s}")),
        }
    }
}

/// Holds the raw inputs and the latest calculation for one user.
///
/// Every mutation recomputes the calculation to completion and replaces it
/// wholesale; a renderer never observes a partially updated result.
pub struct CalculatorSession {
    calculate_uc: CalculateUseCase,
    calculation: Calculation,
}

impl CalculatorSession {
    pub fn new(policy: RiskPolicy) -> Result<Self, DomainError> {
        Self::with_inputs(policy, TradeInputs::default())
    }

    pub fn with_inputs(policy: RiskPolicy, inputs: TradeInputs) -> Result<Self, DomainError> {
        let calculate_uc = CalculateUseCase::new(policy);
        let calculation = calculate_uc.evaluate(&inputs)?;
        Ok(Self {
            calculate_uc,
            calculation,
        })
    }

    pub fn inputs(&self) -> &TradeInputs {
        &self.calculation.inputs
    }

    pub fn calculation(&self) -> &Calculation {
        &self.calculation
    }

    pub fn result(&self) -> Option<&RiskRewardResult> {
        self.calculation.result.as_ref()
    }

    pub fn warnings(&self) -> &[String] {
        &self.calculation.warnings
    }

    pub fn is_ready(&self) -> bool {
        self.calculate_uc.is_ready(self.inputs())
    }

    pub fn mode(&self) -> InputMode {
        self.inputs().mode
    }

    pub fn set_current_price(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        self.update(|inputs| inputs.current_price = text.into())
    }

    pub fn set_stop_loss_price(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        self.update(|inputs| inputs.stop_loss_price = text.into())
    }

    pub fn set_investment_amount(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        self.update(|inputs| inputs.investment_amount = text.into())
    }

    pub fn set_share_count(&mut self, text: impl Into<String>) -> Result<(), DomainError> {
        self.update(|inputs| inputs.share_count = text.into())
    }

    /// Switch the driving field. The other field's text is kept as-is.
    pub fn set_mode(&mut self, mode: InputMode) -> Result<(), DomainError> {
        self.update(|inputs| inputs.mode = mode)
    }

    pub fn toggle_mode(&mut self) -> Result<(), DomainError> {
        self.update(|inputs| inputs.mode = inputs.mode.toggled())
    }

    pub fn reset(&mut self) -> Result<(), DomainError> {
        self.update(|inputs| *inputs = TradeInputs::default())
    }

    /// Set a field by name, e.g. `apply("stop", "105")` or `apply("mode", "shares")`.
    pub fn apply(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        match field.parse::<SessionField>()? {
            SessionField::CurrentPrice => self.set_current_price(value),
            SessionField::StopLossPrice => self.set_stop_loss_price(value),
            SessionField::InvestmentAmount => self.set_investment_amount(value),
            SessionField::ShareCount => self.set_share_count(value),
            SessionField::Mode => self.set_mode(value.parse::<InputMode>()?),
        }
    }

    fn update(&mut self, edit: impl FnOnce(&mut TradeInputs)) -> Result<(), DomainError> {
        let mut inputs = self.calculation.inputs.clone();
        edit(&mut inputs);
        self.calculation = self.calculate_uc.evaluate(&inputs)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!("Stop".parse::<SessionField>().unwrap(), SessionField::StopLossPrice);
        assert_eq!("investment".parse::<SessionField>().unwrap(), SessionField::InvestmentAmount);
        assert!("ratio".parse::<SessionField>().is_err());
        assert_eq!(SessionField::ShareCount.to_string(), "shares");
    }

    #[test]
    fn test_unknown_field_is_error() {
        let mut session = CalculatorSession::new(RiskPolicy::default()).unwrap();
        let err = session.apply("ticker", "AAPL").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(session.result().is_some());
    }
}

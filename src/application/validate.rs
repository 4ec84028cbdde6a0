use crate::domain::entities::trade_inputs::TradeInputs;
use crate::domain::values::field_kind::FieldKind;
use crate::domain::values::input_mode::InputMode;
use crate::domain::values::risk_policy::RiskPolicy;
use crate::domain::values::validation::{
    self, parse_positive, risk_percent, ValidationIssue, ValidationResult,
};
use tracing::warn;

pub struct ValidateUseCase {
    policy: RiskPolicy,
}

impl ValidateUseCase {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    pub fn field(&self, text: &str, kind: FieldKind) -> ValidationResult {
        validation::validate_field(text, kind, &self.policy)
    }

    pub fn stop_loss(&self, current_price: &str, stop_loss_price: &str) -> ValidationResult {
        validation::validate_stop_loss(current_price, stop_loss_price, &self.policy)
    }

    /// Strict-rule violations on inputs that already pass the readiness gate.
    ///
    /// These never block the calculation; they are shown next to the result.
    pub fn soft_warnings(&self, inputs: &TradeInputs) -> Vec<ValidationIssue> {
        let Some((current, stop)) = inputs.prices() else {
            return Vec::new();
        };
        let mut issues = Vec::new();

        if current > self.policy.max_price || stop > self.policy.max_price {
            issues.push(ValidationIssue::PriceTooHigh {
                maximum: self.policy.max_price,
            });
        }

        if inputs.mode == InputMode::AmountDriven {
            if let Some(amount) = parse_positive(&inputs.investment_amount) {
                if amount < self.policy.min_investment {
                    issues.push(ValidationIssue::BelowMinimumInvestment {
                        minimum: self.policy.min_investment,
                    });
                }
            }
        }

        let risk = risk_percent(current, stop);
        if risk > self.policy.max_risk_percent {
            warn!(
                risk_percent = risk,
                max_risk_percent = self.policy.max_risk_percent,
                "stop-loss risk above policy cap"
            );
            issues.push(ValidationIssue::RiskTooHigh {
                risk_percent: risk,
                maximum: self.policy.max_risk_percent,
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_warnings_for_sane_trade() {
        let uc = ValidateUseCase::new(RiskPolicy::default());
        assert!(uc.soft_warnings(&TradeInputs::default()).is_empty());
    }

    #[test]
    fn test_warnings_collect_every_violation() {
        let uc = ValidateUseCase::new(RiskPolicy::default());
        let inputs = TradeInputs::amount_driven("2000000", "100000", "0.5");
        let issues = uc.soft_warnings(&inputs);
        assert_eq!(issues.len(), 3);
        assert!(matches!(issues[0], ValidationIssue::PriceTooHigh { .. }));
        assert!(matches!(issues[1], ValidationIssue::BelowMinimumInvestment { .. }));
        assert!(matches!(issues[2], ValidationIssue::RiskTooHigh { .. }));
    }

    #[test]
    fn test_minimum_investment_ignored_when_share_driven() {
        let uc = ValidateUseCase::new(RiskPolicy::default());
        let mut inputs = TradeInputs::share_driven("100", "95", "0.5");
        inputs.investment_amount = "0.5".into();
        assert!(uc.soft_warnings(&inputs).is_empty());
    }

    #[test]
    fn test_no_warnings_when_prices_unusable() {
        let uc = ValidateUseCase::new(RiskPolicy::default());
        let inputs = TradeInputs::amount_driven("100", "100", "0.5");
        assert!(uc.soft_warnings(&inputs).is_empty());
    }
}

use crate::application::validate::ValidateUseCase;
use crate::domain::entities::calculation::Calculation;
use crate::domain::entities::trade_inputs::TradeInputs;
use crate::domain::error::DomainError;
use crate::domain::values::risk_policy::RiskPolicy;
use crate::domain::values::risk_reward::{calculate_risk_reward, PositionDriver, RiskRewardResult};
use tracing::debug;

/// Readiness gate plus calculator, run from scratch on every call.
pub struct CalculateUseCase {
    policy: RiskPolicy,
    validate_uc: ValidateUseCase,
}

impl CalculateUseCase {
    pub fn new(policy: RiskPolicy) -> Self {
        Self {
            policy,
            validate_uc: ValidateUseCase::new(policy),
        }
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    pub fn is_ready(&self, inputs: &TradeInputs) -> bool {
        inputs.is_ready()
    }

    /// `Ok(None)` when the inputs are not ready. The calculator is only
    /// invoked behind the gate, so an error here means the gate is broken.
    pub fn calculate(&self, inputs: &TradeInputs) -> Result<Option<RiskRewardResult>, DomainError> {
        let Some((current, stop)) = inputs.prices() else {
            debug!(mode = %inputs.mode, "prices not ready, result withheld");
            return Ok(None);
        };
        let Some(driver) = inputs.driver() else {
            debug!(mode = %inputs.mode, "driving field not ready, result withheld");
            return Ok(None);
        };

        let result = self.calculate_with(current, stop, Some(driver), None)?;
        debug!(
            mode = %inputs.mode,
            shares = result.shares,
            investment = result.investment,
            target_price = result.target_price,
            "recalculated"
        );
        Ok(Some(result))
    }

    /// Result plus the strict-rule warnings that did not block it.
    pub fn evaluate(&self, inputs: &TradeInputs) -> Result<Calculation, DomainError> {
        let result = self.calculate(inputs)?;
        let warnings = match result {
            Some(_) => self
                .validate_uc
                .soft_warnings(inputs)
                .iter()
                .map(ToString::to_string)
                .collect(),
            None => Vec::new(),
        };
        Ok(Calculation {
            inputs: inputs.clone(),
            result,
            warnings,
        })
    }

    /// Numeric entry point; `ratio` falls back to the policy default.
    pub fn calculate_with(
        &self,
        current_price: f64,
        stop_loss_price: f64,
        driver: Option<PositionDriver>,
        ratio: Option<f64>,
    ) -> Result<RiskRewardResult, DomainError> {
        let ratio = ratio.unwrap_or(self.policy.default_ratio);
        calculate_risk_reward(current_price, stop_loss_price, driver, ratio)
    }
}

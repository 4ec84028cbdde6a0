pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::calculate::CalculateUseCase;
use crate::application::session::CalculatorSession;
use crate::application::validate::ValidateUseCase;
use crate::domain::entities::calculation::Calculation;
use crate::domain::entities::trade_inputs::TradeInputs;
use crate::domain::error::DomainError;
use crate::domain::values::field_kind::FieldKind;
use crate::domain::values::risk_policy::RiskPolicy;
use crate::domain::values::risk_reward::{PositionDriver, RiskRewardResult};
use crate::domain::values::sizing;
use crate::domain::values::validation::ValidationResult;
use crate::infrastructure::config::policy_from_env;

pub struct RiskCalc {
    policy: RiskPolicy,
    calculate_uc: CalculateUseCase,
    validate_uc: ValidateUseCase,
}

impl RiskCalc {
    /// Build with the policy read from `RISKCALC_*` environment variables.
    pub fn new() -> Result<Self, DomainError> {
        Self::with_policy(policy_from_env()?)
    }

    pub fn with_policy(policy: RiskPolicy) -> Result<Self, DomainError> {
        policy.validate().map_err(DomainError::Config)?;
        Ok(Self {
            policy,
            calculate_uc: CalculateUseCase::new(policy),
            validate_uc: ValidateUseCase::new(policy),
        })
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    // Delegating methods
    pub fn is_ready(&self, inputs: &TradeInputs) -> bool {
        self.calculate_uc.is_ready(inputs)
    }

    pub fn calculate(&self, inputs: &TradeInputs) -> Result<Option<RiskRewardResult>, DomainError> {
        self.calculate_uc.calculate(inputs)
    }

    pub fn evaluate(&self, inputs: &TradeInputs) -> Result<Calculation, DomainError> {
        self.calculate_uc.evaluate(inputs)
    }

    pub fn calculate_with(
        &self,
        current_price: f64,
        stop_loss_price: f64,
        driver: Option<PositionDriver>,
        ratio: Option<f64>,
    ) -> Result<RiskRewardResult, DomainError> {
        self.calculate_uc.calculate_with(current_price, stop_loss_price, driver, ratio)
    }

    pub fn validate_field(&self, text: &str, kind: FieldKind) -> ValidationResult {
        self.validate_uc.field(text, kind)
    }

    pub fn validate_stop_loss(&self, current_price: &str, stop_loss_price: &str) -> ValidationResult {
        self.validate_uc.stop_loss(current_price, stop_loss_price)
    }

    pub fn session(&self) -> Result<CalculatorSession, DomainError> {
        CalculatorSession::new(self.policy)
    }

    pub fn position_size(
        &self,
        account_balance: f64,
        risk_percent: f64,
        current_price: f64,
        stop_loss_price: f64,
    ) -> u64 {
        sizing::position_size_for_risk(account_balance, risk_percent, current_price, stop_loss_price)
    }

    pub fn break_even(&self, entry_price: f64, fee_percent: f64) -> f64 {
        sizing::break_even_price(entry_price, fee_percent)
    }

    pub fn max_risk(&self, account_balance: f64, max_risk_percent: f64) -> f64 {
        sizing::max_risk_amount(account_balance, max_risk_percent)
    }

    pub fn percentage_change(&self, old_value: f64, new_value: f64) -> f64 {
        sizing::percentage_change(old_value, new_value)
    }
}

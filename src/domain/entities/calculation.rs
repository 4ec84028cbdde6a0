use crate::domain::entities::trade_inputs::TradeInputs;
use crate::domain::values::risk_reward::RiskRewardResult;
use serde::Serialize;

/// What a presenter renders: the inputs, the result when the inputs are
/// ready, and soft warnings that did not block the calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub inputs: TradeInputs,
    pub result: Option<RiskRewardResult>,
    pub warnings: Vec<String>,
}

impl Calculation {
    pub fn is_ready(&self) -> bool {
        self.result.is_some()
    }
}

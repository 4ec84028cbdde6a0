use crate::domain::entities::calculation::Calculation;
use crate::domain::error::DomainError;
use crate::domain::ports::presenter::ResultPresenter;
use crate::domain::values::input_mode::InputMode;
use crate::domain::values::risk_reward::RiskRewardResult;
use serde::Serialize;

/// Pretty JSON document with full-precision values.
pub struct JsonPresenter;

#[derive(Serialize)]
struct JsonView<'a> {
    mode: InputMode,
    ready: bool,
    result: Option<&'a RiskRewardResult>,
    warnings: &'a [String],
}

impl ResultPresenter for JsonPresenter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, calculation: &Calculation) -> Result<String, DomainError> {
        let view = JsonView {
            mode: calculation.inputs.mode,
            ready: calculation.is_ready(),
            result: calculation.result.as_ref(),
            warnings: &calculation.warnings,
        };
        serde_json::to_string_pretty(&view).map_err(|e| DomainError::Render(format!("JSON error: {e}")))
    }
}

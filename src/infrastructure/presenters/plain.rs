use crate::domain::entities::calculation::Calculation;
use crate::domain::error::DomainError;
use crate::domain::ports::presenter::ResultPresenter;
use crate::domain::values::input_mode::InputMode;
use crate::infrastructure::presenters::format::{
    format_currency, format_number, format_percentage, format_ratio,
};
use std::fmt::Write;

/// Human-readable text block, amounts rounded to cents.
pub struct PlainPresenter;

impl PlainPresenter {
    fn placeholder(mode: InputMode) -> &'static str {
        match mode {
            InputMode::AmountDriven => {
                "Enter a current price, a stop loss below it and an investment amount to see results."
            }
            InputMode::ShareDriven => {
                "Enter a current price, a stop loss below it and a share count to see results."
            }
        }
    }
}

impl ResultPresenter for PlainPresenter {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn render(&self, calculation: &Calculation) -> Result<String, DomainError> {
        let mode = calculation.inputs.mode;
        let Some(r) = &calculation.result else {
            return Ok(format!("{}\n", Self::placeholder(mode)));
        };

        let driven_by = match mode {
            InputMode::AmountDriven => "investment amount",
            InputMode::ShareDriven => "share count",
        };

        let mut out = String::new();
        let w = |e: std::fmt::Error| DomainError::Render(e.to_string());
        writeln!(out, "Position (driven by {driven_by})").map_err(w)?;
        writeln!(out, "  {:<20}{}", "Shares", format_number(r.shares)).map_err(w)?;
        writeln!(out, "  {:<20}{}", "Investment", format_currency(r.investment)).map_err(w)?;
        writeln!(out, "Risk").map_err(w)?;
        writeln!(out, "  {:<20}{}", "Risk per share", format_currency(r.risk_per_share)).map_err(w)?;
        writeln!(out, "  {:<20}{}", "Potential loss", format_currency(r.potential_loss)).map_err(w)?;
        writeln!(out, "  {:<20}{}", "Stop loss move", format_percentage(r.stop_loss_percent)).map_err(w)?;
        writeln!(out, "Reward ({})", format_ratio(r.risk_reward_ratio)).map_err(w)?;
        writeln!(out, "  {:<20}{}", "Reward per share", format_currency(r.reward_per_share)).map_err(w)?;
        writeln!(out, "  {:<20}{}", "Target price", format_currency(r.target_price)).map_err(w)?;
        writeln!(out, "  {:<20}{}", "Profit at target", format_currency(r.profit_at_target)).map_err(w)?;
        writeln!(out, "  {:<20}{}", "Target move", format_percentage(r.target_percent)).map_err(w)?;

        if !calculation.warnings.is_empty() {
            writeln!(out, "Warnings").map_err(w)?;
            for warning in &calculation.warnings {
                writeln!(out, "  - {warning}").map_err(w)?;
            }
        }
        Ok(out)
    }
}

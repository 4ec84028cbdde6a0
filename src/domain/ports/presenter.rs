use crate::domain::entities::calculation::Calculation;
use crate::domain::error::DomainError;

/// A presentation layer for calculation snapshots.
///
/// The engine knows nothing about how results are shown; any number of
/// presenters can render the same `Calculation`.
pub trait ResultPresenter {
    fn name(&self) -> &'static str;
    fn render(&self, calculation: &Calculation) -> Result<String, DomainError>;
}

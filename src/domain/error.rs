use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The calculator was called without an investment amount or a share count.
    /// Only a caller that skipped the readiness gate can trigger this.
    #[error("Insufficient input: either an investment amount or a share count must be provided")]
    InsufficientInput,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl From<String> for DomainError {
    fn from(s: String) -> Self {
        DomainError::InvalidInput(s)
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}

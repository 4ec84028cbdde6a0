use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which driving field is authoritative for the position size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// The investment amount drives; shares are derived.
    #[default]
    AmountDriven,
    /// The share count drives; the investment is derived.
    ShareDriven,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::AmountDriven => InputMode::ShareDriven,
            InputMode::ShareDriven => InputMode::AmountDriven,
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::AmountDriven => write!(f, "amount_driven"),
            InputMode::ShareDriven => write!(f, "share_driven"),
        }
    }
}

impl FromStr for InputMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amount_driven" | "amount" | "investment" => Ok(InputMode::AmountDriven),
            "share_driven" | "shares" | "share" => Ok(InputMode::ShareDriven),
            _ => Err(format!("Unknown input mode: {s}")),
        }
    }
}

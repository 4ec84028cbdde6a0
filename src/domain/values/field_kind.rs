use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of raw text field, selecting the per-field validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Price,
    Amount,
    Shares,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Price => write!(f, "price"),
            FieldKind::Amount => write!(f, "amount"),
            FieldKind::Shares => write!(f, "shares"),
        }
    }
}

impl FromStr for FieldKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price" => Ok(FieldKind::Price),
            "amount" | "investment" => Ok(FieldKind::Amount),
            "shares" | "share" => Ok(FieldKind::Shares),
            _ => Err(format!("Unknown validation type: {s}")),
        }
    }
}

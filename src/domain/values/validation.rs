//! Field-level and trade-level validation of raw text input.
//!
//! These are the strict rules used for interactive feedback. They are
//! independent of the readiness gate on `TradeInputs`, which only checks that
//! a calculation would be meaningful and ignores the sanity bounds below.

use crate::domain::values::field_kind::FieldKind;
use crate::domain::values::risk_policy::RiskPolicy;
use serde::Serialize;
use std::fmt;

/// Why a field or a trade was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationIssue {
    Required { field: FieldKind },
    NotANumber { field: FieldKind },
    NotPositive { field: FieldKind },
    PriceTooHigh { maximum: f64 },
    BelowMinimumInvestment { minimum: f64 },
    PricesNotNumeric,
    StopNotBelowCurrent,
    RiskTooHigh { risk_percent: f64, maximum: f64 },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Required { field } => match field {
                FieldKind::Price => write!(f, "Price is required"),
                FieldKind::Amount => write!(f, "Amount is required"),
                FieldKind::Shares => write!(f, "Number of shares is required"),
            },
            ValidationIssue::NotANumber { field } => match field {
                FieldKind::Price => write!(f, "Price must be a valid number"),
                FieldKind::Amount => write!(f, "Amount must be a valid number"),
                FieldKind::Shares => write!(f, "Shares must be a valid number"),
            },
            ValidationIssue::NotPositive { field } => match field {
                FieldKind::Price => write!(f, "Price must be greater than 0"),
                FieldKind::Amount => write!(f, "Amount must be greater than 0"),
                FieldKind::Shares => write!(f, "Number of shares must be greater than 0"),
            },
            ValidationIssue::PriceTooHigh { .. } => write!(f, "Price seems unreasonably high"),
            ValidationIssue::BelowMinimumInvestment { minimum } => {
                write!(f, "Minimum investment amount is ${minimum}")
            }
            ValidationIssue::PricesNotNumeric => write!(f, "Both prices must be valid numbers"),
            ValidationIssue::StopNotBelowCurrent => {
                write!(f, "Stop loss must be less than current price")
            }
            ValidationIssue::RiskTooHigh { risk_percent, .. } => write!(
                f,
                "Risk of {risk_percent:.1}% seems too high. Consider a higher stop loss."
            ),
        }
    }
}

/// Validity plus a human-readable reason when invalid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<ValidationIssue>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
            issue: None,
        }
    }

    pub fn rejected(issue: ValidationIssue) -> Self {
        Self {
            valid: false,
            reason: Some(issue.to_string()),
            issue: Some(issue),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl From<Result<f64, ValidationIssue>> for ValidationResult {
    fn from(r: Result<f64, ValidationIssue>) -> Self {
        match r {
            Ok(_) => ValidationResult::ok(),
            Err(issue) => ValidationResult::rejected(issue),
        }
    }
}

/// Parse trimmed text as a finite number. Blank and non-numeric text yield `None`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse text that must hold a number strictly greater than zero.
pub fn parse_positive(text: &str) -> Option<f64> {
    parse_number(text).filter(|v| *v > 0.0)
}

/// Distance from current price down to the stop, in percent of current price.
pub fn risk_percent(current_price: f64, stop_loss_price: f64) -> f64 {
    (current_price - stop_loss_price) / current_price * 100.0
}

fn base_rule(text: &str, field: FieldKind) -> Result<f64, ValidationIssue> {
    if text.trim().is_empty() {
        return Err(ValidationIssue::Required { field });
    }
    let value = parse_number(text).ok_or(ValidationIssue::NotANumber { field })?;
    if value <= 0.0 {
        return Err(ValidationIssue::NotPositive { field });
    }
    Ok(value)
}

fn price_rule(text: &str, policy: &RiskPolicy) -> Result<f64, ValidationIssue> {
    let value = base_rule(text, FieldKind::Price)?;
    if value > policy.max_price {
        return Err(ValidationIssue::PriceTooHigh {
            maximum: policy.max_price,
        });
    }
    Ok(value)
}

fn amount_rule(text: &str, policy: &RiskPolicy) -> Result<f64, ValidationIssue> {
    let value = base_rule(text, FieldKind::Amount)?;
    if value < policy.min_investment {
        return Err(ValidationIssue::BelowMinimumInvestment {
            minimum: policy.min_investment,
        });
    }
    Ok(value)
}

pub fn validate_price(text: &str, policy: &RiskPolicy) -> ValidationResult {
    price_rule(text, policy).into()
}

pub fn validate_amount(text: &str, policy: &RiskPolicy) -> ValidationResult {
    amount_rule(text, policy).into()
}

pub fn validate_shares(text: &str) -> ValidationResult {
    base_rule(text, FieldKind::Shares).into()
}

/// Dispatch to the rule for `kind`.
pub fn validate_field(text: &str, kind: FieldKind, policy: &RiskPolicy) -> ValidationResult {
    match kind {
        FieldKind::Price => validate_price(text, policy),
        FieldKind::Amount => validate_amount(text, policy),
        FieldKind::Shares => validate_shares(text),
    }
}

/// Judge whether current price and stop-loss form a coherent long trade.
///
/// The risk cap is a hard rejection here, unlike the calculation flow where
/// it only produces a warning.
pub fn validate_stop_loss(current_price: &str, stop_loss_price: &str, policy: &RiskPolicy) -> ValidationResult {
    let (current, stop) = match (parse_number(current_price), parse_number(stop_loss_price)) {
        (Some(c), Some(s)) => (c, s),
        _ => return ValidationResult::rejected(ValidationIssue::PricesNotNumeric),
    };

    for text in [current_price, stop_loss_price] {
        if let Err(issue) = price_rule(text, policy) {
            return ValidationResult::rejected(issue);
        }
    }

    if stop >= current {
        return ValidationResult::rejected(ValidationIssue::StopNotBelowCurrent);
    }

    let risk = risk_percent(current, stop);
    if risk > policy.max_risk_percent {
        return ValidationResult::rejected(ValidationIssue::RiskTooHigh {
            risk_percent: risk,
            maximum: policy.max_risk_percent,
        });
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RiskPolicy {
        RiskPolicy::default()
    }

    fn reason(r: ValidationResult) -> String {
        r.reason.unwrap_or_default()
    }

    #[test]
    fn test_parse_number_trims_and_rejects_non_finite() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_price_rules_in_order() {
        assert_eq!(reason(validate_price("", &policy())), "Price is required");
        assert_eq!(reason(validate_price("x", &policy())), "Price must be a valid number");
        assert_eq!(reason(validate_price("0", &policy())), "Price must be greater than 0");
        assert_eq!(reason(validate_price("-3", &policy())), "Price must be greater than 0");
        assert_eq!(
            reason(validate_price("1000000.01", &policy())),
            "Price seems unreasonably high"
        );
        assert!(validate_price("1000000", &policy()).valid);
        assert!(validate_price("0.01", &policy()).valid);
    }

    #[test]
    fn test_amount_minimum() {
        let r = validate_amount("0.5", &policy());
        assert!(!r.valid);
        assert_eq!(r.reason.as_deref(), Some("Minimum investment amount is $1"));
        assert_eq!(
            r.issue,
            Some(ValidationIssue::BelowMinimumInvestment { minimum: 1.0 })
        );
        assert!(validate_amount("1", &policy()).valid);
    }

    #[test]
    fn test_amount_has_no_upper_bound() {
        assert!(validate_amount("50000000", &policy()).valid);
    }

    #[test]
    fn test_shares_allow_fractions() {
        assert!(validate_shares("0.25").valid);
        assert_eq!(reason(validate_shares(" ")), "Number of shares is required");
        assert_eq!(reason(validate_shares("ten")), "Shares must be a valid number");
        assert_eq!(
            reason(validate_shares("0")),
            "Number of shares must be greater than 0"
        );
    }

    #[test]
    fn test_validate_field_dispatch() {
        assert!(!validate_field("0.5", FieldKind::Amount, &policy()).valid);
        assert!(validate_field("0.5", FieldKind::Shares, &policy()).valid);
        assert!(validate_field("0.5", FieldKind::Price, &policy()).valid);
    }

    #[test]
    fn test_stop_loss_must_be_below_current() {
        let equal = validate_stop_loss("100", "100", &policy());
        assert_eq!(equal.issue, Some(ValidationIssue::StopNotBelowCurrent));
        let above = validate_stop_loss("100", "101", &policy());
        assert!(!above.valid);
        assert!(validate_stop_loss("100", "99", &policy()).valid);
    }

    #[test]
    fn test_stop_loss_non_numeric() {
        let r = validate_stop_loss("abc", "10", &policy());
        assert_eq!(reason(r), "Both prices must be valid numbers");
    }

    #[test]
    fn test_stop_loss_applies_price_rule() {
        let r = validate_stop_loss("100", "-5", &policy());
        assert_eq!(reason(r), "Price must be greater than 0");
        let r = validate_stop_loss("2000000", "1500000", &policy());
        assert_eq!(reason(r), "Price seems unreasonably high");
    }

    #[test]
    fn test_risk_cap_is_hard_rejection() {
        let r = validate_stop_loss("100", "40", &policy());
        assert!(!r.valid);
        assert_eq!(
            reason(r),
            "Risk of 60.0% seems too high. Consider a higher stop loss."
        );
        // exactly at the cap is allowed
        assert!(validate_stop_loss("100", "50", &policy()).valid);
    }

    #[test]
    fn test_risk_cap_follows_policy() {
        let tight = RiskPolicy {
            max_risk_percent: 5.0,
            ..RiskPolicy::default()
        };
        assert!(!validate_stop_loss("100", "90", &tight).valid);
        assert!(validate_stop_loss("100", "96", &tight).valid);
    }

    #[test]
    fn test_issue_serializes_with_code() {
        let json = serde_json::to_value(ValidationIssue::Required {
            field: FieldKind::Shares,
        })
        .unwrap();
        assert_eq!(json["code"], "required");
        assert_eq!(json["field"], "shares");
    }
}

//! Risk policy from the environment.
//!
//! | Variable                     | Default   |
//! |------------------------------|-----------|
//! | `RISKCALC_DEFAULT_RATIO`     | 2         |
//! | `RISKCALC_MAX_PRICE`         | 1000000   |
//! | `RISKCALC_MIN_INVESTMENT`    | 1         |
//! | `RISKCALC_MAX_RISK_PERCENT`  | 50        |

use crate::domain::error::DomainError;
use crate::domain::values::risk_policy::RiskPolicy;

pub const ENV_DEFAULT_RATIO: &str = "RISKCALC_DEFAULT_RATIO";
pub const ENV_MAX_PRICE: &str = "RISKCALC_MAX_PRICE";
pub const ENV_MIN_INVESTMENT: &str = "RISKCALC_MIN_INVESTMENT";
pub const ENV_MAX_RISK_PERCENT: &str = "RISKCALC_MAX_RISK_PERCENT";

pub fn policy_from_env() -> Result<RiskPolicy, DomainError> {
    policy_from_lookup(|key| std::env::var(key).ok())
}

/// Build a policy from any key/value source, starting from the defaults.
/// Unset or blank keys keep their default.
pub fn policy_from_lookup<F>(lookup: F) -> Result<RiskPolicy, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = RiskPolicy::default();
    let read = |key: &str, default: f64| -> Result<f64, DomainError> {
        match lookup(key) {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<f64>()
                .map_err(|e| DomainError::Config(format!("{key}={raw}: {e}"))),
            _ => Ok(default),
        }
    };

    let policy = RiskPolicy {
        default_ratio: read(ENV_DEFAULT_RATIO, defaults.default_ratio)?,
        max_price: read(ENV_MAX_PRICE, defaults.max_price)?,
        min_investment: read(ENV_MIN_INVESTMENT, defaults.min_investment)?,
        max_risk_percent: read(ENV_MAX_RISK_PERCENT, defaults.max_risk_percent)?,
    };
    policy.validate().map_err(DomainError::Config)?;
    Ok(policy)
}

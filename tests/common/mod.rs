//! Shared test helpers.
#![allow(dead_code)]

use riskcalc::domain::values::risk_policy::RiskPolicy;
use riskcalc::RiskCalc;

pub fn setup() -> RiskCalc {
    RiskCalc::with_policy(RiskPolicy::default()).unwrap()
}

pub fn setup_with(policy: RiskPolicy) -> RiskCalc {
    RiskCalc::with_policy(policy).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * a.abs().max(b.abs()).max(1.0)
}

pub fn cents(v: f64) -> String {
    format!("{v:.2}")
}

/// A spread of valid (current, stop, driver) triples for property-style checks.
pub fn sample_trades() -> Vec<(f64, f64, f64)> {
    vec![
        (120.0, 110.0, 5000.0),
        (50.0, 45.0, 100.0),
        (0.35, 0.29, 1234.5),
        (999_999.0, 1.0, 7.0),
        (17.83, 17.82, 0.5),
        (250.0, 200.0, 40_000.0),
        (3.0, 2.0, 10.0),
    ]
}

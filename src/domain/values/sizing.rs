//! Auxiliary sizing helpers: risk-budget position size, break-even with
//! round-trip fees, and account-level risk budgets.

/// Default share of the account put at risk on one trade, in percent.
pub const DEFAULT_ACCOUNT_RISK_PERCENT: f64 = 2.0;

/// Percent change from `old_value` to `new_value`; 0 when `old_value` is 0.
pub fn percentage_change(old_value: f64, new_value: f64) -> f64 {
    if old_value == 0.0 {
        return 0.0;
    }
    (new_value - old_value) / old_value * 100.0
}

/// Whole shares that lose at most `risk_percent` of `account_balance` if the
/// stop is hit.
///
/// Returns 0 when there is no positive risk distance or no budget to spend.
pub fn position_size_for_risk(
    account_balance: f64,
    risk_percent: f64,
    current_price: f64,
    stop_loss_price: f64,
) -> u64 {
    let risk_per_share = current_price - stop_loss_price;
    let risk_amount = account_balance * (risk_percent / 100.0);
    let sizable = risk_per_share > 0.0 && risk_amount > 0.0;
    if !sizable {
        return 0;
    }
    (risk_amount / risk_per_share).floor() as u64
}

/// Price needed to cover the entry and exit fee, each `fee_percent` of notional.
pub fn break_even_price(entry_price: f64, fee_percent: f64) -> f64 {
    let round_trip_fee_percent = fee_percent * 2.0;
    entry_price * (1.0 + round_trip_fee_percent / 100.0)
}

/// Dollar amount at risk when risking `max_risk_percent` of the account.
pub fn max_risk_amount(account_balance: f64, max_risk_percent: f64) -> f64 {
    account_balance * (max_risk_percent / 100.0)
}

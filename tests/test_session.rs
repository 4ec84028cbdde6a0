mod common;

use common::{cents, setup};
use riskcalc::domain::values::input_mode::InputMode;

#[test]
fn test_session_starts_with_defaults() {
    let session = setup().session().unwrap();
    assert_eq!(session.mode(), InputMode::AmountDriven);
    assert_eq!(session.inputs().current_price, "120");
    assert_eq!(session.inputs().stop_loss_price, "110");
    assert_eq!(session.inputs().investment_amount, "5000");
    let r = session.result().expect("defaults are ready");
    assert_eq!(cents(r.shares), "41.67");
}

#[test]
fn test_every_edit_recomputes() {
    let mut session = setup().session().unwrap();
    session.set_current_price("50").unwrap();
    session.set_stop_loss_price("45").unwrap();
    session.set_investment_amount("1000").unwrap();

    let r = session.result().unwrap();
    assert_eq!(cents(r.shares), "20.00");
    assert_eq!(cents(r.potential_loss), "100.00");
    assert_eq!(cents(r.target_price), "60.00");
}

#[test]
fn test_invalid_edit_discards_result() {
    let mut session = setup().session().unwrap();
    assert!(session.result().is_some());

    session.set_stop_loss_price("130").unwrap();
    assert!(!session.is_ready());
    assert!(session.result().is_none());

    session.set_stop_loss_price("100").unwrap();
    assert!(session.result().is_some());
}

#[test]
fn test_mode_toggle_keeps_other_field_text() {
    let mut session = setup().session().unwrap();

    session.set_mode(InputMode::ShareDriven).unwrap();
    // share count is still blank, so nothing to show
    assert!(session.result().is_none());
    assert_eq!(session.inputs().investment_amount, "5000");

    session.set_share_count("10").unwrap();
    let r = session.result().unwrap();
    assert_eq!(r.shares, 10.0);
    assert_eq!(cents(r.investment), "1200.00");

    session.toggle_mode().unwrap();
    assert_eq!(session.mode(), InputMode::AmountDriven);
    assert_eq!(session.inputs().share_count, "10");
    assert_eq!(session.result().unwrap().investment, 5000.0);
}

#[test]
fn test_apply_by_name() {
    let mut session = setup().session().unwrap();
    session.apply("mode", "shares").unwrap();
    session.apply("shares", "100").unwrap();
    session.apply("price", "50").unwrap();
    session.apply("stop", "45").unwrap();

    let r = session.result().unwrap();
    assert_eq!(cents(r.investment), "5000.00");
    assert_eq!(cents(r.profit_at_target), "1000.00");

    assert!(session.apply("mode", "sideways").is_err());
    assert_eq!(session.mode(), InputMode::ShareDriven);
}

#[test]
fn test_reset_restores_defaults() {
    let mut session = setup().session().unwrap();
    session.apply("mode", "shares").unwrap();
    session.apply("price", "").unwrap();
    assert!(session.result().is_none());

    session.reset().unwrap();
    assert_eq!(session.mode(), InputMode::AmountDriven);
    assert!(session.inputs().share_count.is_empty());
    assert_eq!(cents(session.result().unwrap().target_price), "140.00");
}

#[test]
fn test_warnings_follow_result() {
    let mut session = setup().session().unwrap();
    assert!(session.warnings().is_empty());

    session.set_stop_loss_price("10").unwrap();
    assert!(session.result().is_some());
    assert_eq!(session.warnings().len(), 1);

    session.set_stop_loss_price("120").unwrap();
    assert!(session.warnings().is_empty());
}

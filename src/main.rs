use clap::Parser;
use riskcalc::application::session::{CalculatorSession, SessionField};
use riskcalc::cli::commands::{Cli, Commands};
use riskcalc::domain::entities::trade_inputs::TradeInputs;
use riskcalc::domain::values::field_kind::FieldKind;
use riskcalc::domain::values::input_mode::InputMode;
use riskcalc::infrastructure::presenters::presenter_for;
use riskcalc::RiskCalc;
use std::io::BufRead;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let rc = match RiskCalc::new() {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error initializing riskcalc: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(rc, cli.command);
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RISKCALC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(rc: RiskCalc, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Calc {
            price,
            stop,
            amount,
            shares,
            ratio,
            json,
        } => {
            let rc = match ratio {
                Some(r) => RiskCalc::with_policy(rc.policy().with_ratio(r))?,
                None => rc,
            };
            let inputs = match amount {
                Some(amount) => TradeInputs::amount_driven(price, stop, amount),
                None => TradeInputs::share_driven(price, stop, shares.unwrap_or_default()),
            };

            let calculation = rc.evaluate(&inputs)?;
            if !calculation.is_ready() {
                return Err(format!("no result: {}", not_ready_reasons(&rc, &inputs)).into());
            }
            print!("{}", presenter_for(json).render(&calculation)?);
            if json {
                println!();
            }
        }
        Commands::Validate { kind, text } => {
            let kind: FieldKind = kind.parse().map_err(|e: String| e)?;
            let result = rc.validate_field(&text, kind);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::CheckStop { price, stop } => {
            let result = rc.validate_stop_loss(&price, &stop);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Size {
            balance,
            risk_percent,
            price,
            stop,
        } => {
            let shares = rc.position_size(balance, risk_percent, price, stop);
            let report = serde_json::json!({
                "shares": shares,
                "risk_budget": rc.max_risk(balance, risk_percent),
                "position_value": shares as f64 * price,
                "loss_at_stop": shares as f64 * (price - stop),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::BreakEven { entry, fee_percent } => {
            let price = rc.break_even(entry, fee_percent);
            println!("{price:.2}");
        }
        Commands::MaxRisk { balance, percent } => {
            let amount = rc.max_risk(balance, percent);
            println!("{amount:.2}");
        }
        Commands::Session { json } => {
            let mut session = rc.session()?;
            let presenter = presenter_for(json);
            println!("{}", presenter.render(session.calculation())?);

            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                match line {
                    "quit" | "exit" => break,
                    "reset" => session.reset()?,
                    "toggle" => session.toggle_mode()?,
                    _ => {
                        let Some((field, value)) = line.split_once('=') else {
                            eprintln!("expected field=value, got: {line}");
                            continue;
                        };
                        if let Err(e) = session.apply(field, value) {
                            eprintln!("{e}");
                            continue;
                        }
                        if let Some(reason) = field_feedback(&rc, field, value) {
                            eprintln!("! {field}: {reason}");
                        }
                    }
                }
                println!("{}", presenter.render(session.calculation())?);
            }
        }
    }
    Ok(())
}

/// Strict-rule reason for a freshly edited field, if it has one.
fn field_feedback(rc: &RiskCalc, field: &str, value: &str) -> Option<String> {
    let kind = match field.parse::<SessionField>().ok()? {
        SessionField::CurrentPrice | SessionField::StopLossPrice => FieldKind::Price,
        SessionField::InvestmentAmount => FieldKind::Amount,
        SessionField::ShareCount => FieldKind::Shares,
        SessionField::Mode => return None,
    };
    rc.validate_field(value, kind).reason
}

fn not_ready_reasons(rc: &RiskCalc, inputs: &TradeInputs) -> String {
    let (driver_text, driver_kind) = match inputs.mode {
        InputMode::AmountDriven => (&inputs.investment_amount, FieldKind::Amount),
        InputMode::ShareDriven => (&inputs.share_count, FieldKind::Shares),
    };
    let checks = [
        rc.validate_field(&inputs.current_price, FieldKind::Price),
        rc.validate_field(&inputs.stop_loss_price, FieldKind::Price),
        rc.validate_stop_loss(&inputs.current_price, &inputs.stop_loss_price),
        rc.validate_field(driver_text, driver_kind),
    ];
    let mut reasons: Vec<String> = Vec::new();
    for reason in checks.into_iter().filter_map(|c| c.reason) {
        if !reasons.contains(&reason) {
            reasons.push(reason);
        }
    }
    if reasons.is_empty() {
        "inputs are not ready".to_string()
    } else {
        reasons.join("; ")
    }
}

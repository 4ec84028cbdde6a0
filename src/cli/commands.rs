use clap::{ArgGroup, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "riskcalc", about = "Stop-loss position sizing and risk/reward calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate risk/reward from a stop-loss and an amount or share count
    #[command(group(ArgGroup::new("driver").required(true).args(["amount", "shares"])))]
    Calc {
        /// Current price
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        /// Stop-loss price, below the current price
        #[arg(long, allow_hyphen_values = true)]
        stop: String,
        /// Dollar amount to invest (amount-driven mode)
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Number of shares (share-driven mode)
        #[arg(long, allow_hyphen_values = true)]
        shares: Option<String>,
        /// Reward multiple of the risk (defaults to the policy ratio)
        #[arg(long)]
        ratio: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Validate a single field (price, amount, shares)
    Validate {
        kind: String,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Check that a stop-loss forms a coherent long trade
    CheckStop {
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        #[arg(long, allow_hyphen_values = true)]
        stop: String,
    },
    /// Whole shares sized so a stop-out loses a fixed share of the account
    Size {
        #[arg(long)]
        balance: f64,
        /// Percent of the balance to risk
        #[arg(long, default_value = "2")]
        risk_percent: f64,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        stop: f64,
    },
    /// Break-even price covering entry and exit fees
    BreakEven {
        #[arg(long)]
        entry: f64,
        /// Fee per leg, in percent
        #[arg(long, default_value = "0")]
        fee_percent: f64,
    },
    /// Dollar risk budget for an account
    MaxRisk {
        #[arg(long)]
        balance: f64,
        #[arg(long, default_value = "2")]
        percent: f64,
    },
    /// Interactive session: read `field=value` lines from stdin
    Session {
        #[arg(long)]
        json: bool,
    },
}

pub mod calculation;
pub mod trade_inputs;

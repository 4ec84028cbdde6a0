pub mod field_kind;
pub mod input_mode;
pub mod risk_policy;
pub mod risk_reward;
pub mod sizing;
pub mod validation;

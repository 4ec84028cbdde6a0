pub mod calculate;
pub mod session;
pub mod validate;

pub mod config;
pub mod presenters;

pub mod config;
pub mod errors;
pub mod github;
pub mod ti_config;
pub mod todo;
pub mod tracker;
pub mod triage;
pub mod ui;

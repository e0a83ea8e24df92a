//! CLI commands for the revenue reconciliation batch.

pub mod check_config;
pub mod run;

pub use check_config::check_config;
pub use run::{run_batch, RunArgs};

//! Core types, configuration, and the reconciliation engine for the
//! daily game-revenue batch.

pub mod config;
pub mod config_loader;
pub mod engine;
pub mod error;
pub mod models;
pub mod traits;

pub use config::{
    AdReportsConfig, AppConfig, DatabaseConfig, FxConfig, GameConfig, KpiConfig, NotifyConfig,
};
pub use config_loader::ConfigLoader;
pub use engine::ReconcileEngine;
pub use error::SourceError;
pub use models::{GameOutcome, KpiSnapshot, RevenueRecord, RunSummary, SkipReason, SkippedGame};
pub use traits::{AdRevenueSource, KpiSource, RateSource, RecordSink, RunReporter};

//! Internal KPI service client for the daily revenue batch.

pub mod client;

pub use client::KpiClient;

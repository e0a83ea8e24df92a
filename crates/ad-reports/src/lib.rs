//! Ad-network partner report client and column extraction.

pub mod client;
pub mod extract;

pub use client::{AdReportClient, AdReportClientConfig};
pub use extract::extract_column;

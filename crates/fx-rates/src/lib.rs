//! Currency rate source for the daily revenue batch.

pub mod client;

pub use client::{FxClient, FxClientConfig};

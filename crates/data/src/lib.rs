//! `PostgreSQL` persistence for the daily revenue batch.
//!
//! This crate provides:
//! - Database client and schema migrations
//! - Revenue record repository with (game, date) upsert semantics

pub mod database;
pub mod repositories;

pub use database::DatabaseClient;
pub use repositories::RevenueRepository;

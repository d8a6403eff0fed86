//! # Match Coach
//!
//! Post-game performance scoring and coaching recommendations for Dota 2
//! matches.
//!
//! ## Architecture
//!
//! - **models**: Match telemetry, rank tiers and analysis results
//! - **calculate**: Pure scoring engine (ratios, aggregates, trends, analysis)
//! - **heroes**: Hero id to name resolution
//! - **storage**: Local JSON/JSONL match data store
//! - **report**: Text and JSON rendering of results
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod heroes;
pub mod models;
pub mod report;
pub mod storage;

pub use models::*;

//! # RL Coach
//!
//! Rocket League improvement advice from per-game stats.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (ranks, stats, gaps, analysis results)
//! - **data**: Static benchmark table and advice catalog
//! - **calculate**: Gap, percentile, advice and assessment computation
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod data;
pub mod models;

pub use calculate::StatsAnalyzer;
pub use models::*;

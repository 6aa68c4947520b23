//! CollegeFootballData wrangling library
//!
//! Pulls teams, games, team box scores and advanced game metrics from the
//! CollegeFootballData API, flattens them into fixed-schema tables, persists
//! the tables as CSV and joins them into one row per team per game.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cfb_wrangle::config::Config;
//! use cfb_wrangle::error::AppError;
//! use cfb_wrangle::pipeline::{self, RunOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load(None).await?;
//!     let summary = pipeline::run(&config, RunOptions::default()).await?;
//!     println!("{} joined rows", summary.joined.unwrap_or(0));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod dataset;
pub mod error;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::Config;
pub use dataset::{JoinedRow, Table, join_tables};
pub use error::AppError;
pub use pipeline::{RunOptions, RunSummary};

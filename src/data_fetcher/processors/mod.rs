//! Turns API payloads into table rows.

pub mod games;
pub mod metrics;
pub mod stats;
pub mod teams;

pub use games::extract_game_rows;
pub use metrics::extract_metrics_rows;
pub use stats::{AWAY, HOME, StatsBatch, extract_stat, extract_stats_rows};
pub use teams::extract_team_rows;

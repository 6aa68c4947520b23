pub mod api;
pub mod models;
pub mod processors;

pub use api::{
    create_http_client_with_timeout, fetch_games_week, fetch_metrics_week, fetch_stats_week,
    fetch_teams,
};

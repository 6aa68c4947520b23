//! Batch orchestration: pull every configured season week, persist the four
//! tables, then join them.
//!
//! Requests are made one at a time and any failure aborts the run. Tables are
//! written as soon as their stage finishes, so a failure in a later stage
//! leaves the earlier files in place.

use crate::config::Config;
use crate::constants::files;
use crate::data_fetcher::api::{
    create_http_client_with_timeout, fetch_games_week, fetch_metrics_week, fetch_stats_week,
    fetch_teams,
};
use crate::data_fetcher::processors::{
    extract_game_rows, extract_metrics_rows, extract_stats_rows, extract_team_rows,
};
use crate::dataset::{
    GameRow, JoinedRow, MetricsRow, StatsRow, Table, TeamRow, join_tables, read_table,
    table_path, write_table,
};
use crate::error::AppError;
use reqwest::Client;
use std::path::Path;
use tracing::{error, info};

/// Which stages of the pipeline to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Skip fetching and join the tables already in the output directory.
    pub join_only: bool,
    /// Fetch and persist the four tables without joining them.
    pub skip_join: bool,
}

/// Row counts of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub teams: usize,
    pub games: usize,
    pub stats: usize,
    pub metrics: usize,
    /// Stats sides left out because their box score was empty.
    pub dropped_stat_sides: usize,
    /// `None` when the join was skipped.
    pub joined: Option<usize>,
}

/// Every (season, week) pair to pull, seasons ascending, weeks from 1.
pub fn season_weeks(config: &Config) -> Vec<(i32, u32)> {
    config
        .seasons
        .iter()
        .flat_map(|&season| (1..=config.weeks_per_season).map(move |week| (season, week)))
        .collect()
}

/// Runs the pipeline described by `options` against `config`.
pub async fn run(config: &Config, options: RunOptions) -> Result<RunSummary, AppError> {
    let output_dir = Path::new(&config.output_dir);

    if options.join_only {
        info!("Joining persisted tables in {}", output_dir.display());
        return join_persisted(output_dir);
    }

    config.require_token()?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let weeks = season_weeks(config);
    info!(
        "Pulling {} season weeks across seasons {:?}",
        weeks.len(),
        config.seasons
    );

    let games = pull_games(&client, config, &weeks).await?;
    write_table(&games, &table_path(output_dir, files::GAMES))?;

    let (stats, dropped_stat_sides) = pull_stats(&client, config, &weeks).await?;
    write_table(&stats, &table_path(output_dir, files::STATS))?;

    let metrics = pull_metrics(&client, config, &weeks).await?;
    write_table(&metrics, &table_path(output_dir, files::METRICS))?;

    let teams = Table::create(extract_team_rows(&fetch_teams(&client, config).await?));
    info!("Team stage: {} teams", teams.len());
    write_table(&teams, &table_path(output_dir, files::TEAMS))?;

    let mut summary = RunSummary {
        teams: teams.len(),
        games: games.len(),
        stats: stats.len(),
        metrics: metrics.len(),
        dropped_stat_sides,
        joined: None,
    };

    if options.skip_join {
        info!("Skipping join");
    } else {
        let joined = join_tables(&stats, &games, &metrics, &teams);
        write_table(&joined, &table_path(output_dir, files::JOINED))?;
        summary.joined = Some(joined.len());
    }

    info!("Run finished: {:?}", summary);
    Ok(summary)
}

async fn pull_games(
    client: &Client,
    config: &Config,
    weeks: &[(i32, u32)],
) -> Result<Table<GameRow>, AppError> {
    let mut table = None;
    for &(season, week) in weeks {
        let games = fetch_games_week(client, config, season, week)
            .await
            .inspect_err(|e| error!("Game pull failed for {} week {}: {}", season, week, e))?;
        let rows = extract_game_rows(&games, week);
        info!("Games {} week {}: {} rows", season, week, rows.len());
        table = Some(Table::accumulate(table, rows));
    }
    Ok(table.unwrap_or_default())
}

async fn pull_stats(
    client: &Client,
    config: &Config,
    weeks: &[(i32, u32)],
) -> Result<(Table<StatsRow>, usize), AppError> {
    let mut table = None;
    let mut dropped = 0;
    for &(season, week) in weeks {
        let bundles = fetch_stats_week(client, config, season, week)
            .await
            .inspect_err(|e| error!("Stats pull failed for {} week {}: {}", season, week, e))?;
        let batch = extract_stats_rows(&bundles, week)?;
        info!(
            "Stats {} week {}: {} rows, {} empty sides dropped",
            season,
            week,
            batch.rows.len(),
            batch.dropped_sides
        );
        dropped += batch.dropped_sides;
        table = Some(Table::accumulate(table, batch.rows));
    }
    Ok((table.unwrap_or_default(), dropped))
}

async fn pull_metrics(
    client: &Client,
    config: &Config,
    weeks: &[(i32, u32)],
) -> Result<Table<MetricsRow>, AppError> {
    let mut table = None;
    for &(season, week) in weeks {
        let entries = fetch_metrics_week(client, config, season, week)
            .await
            .inspect_err(|e| error!("Metrics pull failed for {} week {}: {}", season, week, e))?;
        let rows = extract_metrics_rows(&entries, week);
        info!("Metrics {} week {}: {} rows", season, week, rows.len());
        table = Some(Table::accumulate(table, rows));
    }
    Ok(table.unwrap_or_default())
}

/// Reloads the four persisted tables from `output_dir`, joins them and
/// writes the joined file next to them.
pub fn join_persisted(output_dir: &Path) -> Result<RunSummary, AppError> {
    let teams: Table<TeamRow> = read_table(&table_path(output_dir, files::TEAMS))?;
    let games: Table<GameRow> = read_table(&table_path(output_dir, files::GAMES))?;
    let stats: Table<StatsRow> = read_table(&table_path(output_dir, files::STATS))?;
    let metrics: Table<MetricsRow> = read_table(&table_path(output_dir, files::METRICS))?;

    let joined: Table<JoinedRow> = join_tables(&stats, &games, &metrics, &teams);
    write_table(&joined, &table_path(output_dir, files::JOINED))?;

    Ok(RunSummary {
        teams: teams.len(),
        games: games.len(),
        stats: stats.len(),
        metrics: metrics.len(),
        dropped_stat_sides: 0,
        joined: Some(joined.len()),
    })
}

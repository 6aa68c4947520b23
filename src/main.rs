// src/main.rs
mod cli;
mod logging;

use cfb_wrangle::config::Config;
use cfb_wrangle::error::AppError;
use cfb_wrangle::pipeline::{self, RunOptions};
use clap::Parser;
use cli::Args;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config = args.resolve_config().await?;

    let config_path = args
        .config_file
        .clone()
        .unwrap_or_else(Config::get_config_path);

    if args.list_config {
        config.display(&config_path);
        return Ok(());
    }

    if args.init_config {
        args.config_for_init().await?.save_to_path(&config_path).await?;
        println!("Configuration written to {config_path}");
        return Ok(());
    }

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    info!("Logs are being written to: {log_file_path}");

    let options = RunOptions {
        join_only: args.join_only,
        skip_join: args.skip_join,
    };

    match pipeline::run(&config, options).await {
        Ok(summary) => {
            info!(
                "Wrote {} teams, {} game rows, {} stats rows ({} empty sides dropped), {} metrics rows to {}",
                summary.teams,
                summary.games,
                summary.stats,
                summary.dropped_stat_sides,
                summary.metrics,
                config.output_dir
            );
            if let Some(joined) = summary.joined {
                info!("Joined table: {joined} rows");
            }
            Ok(())
        }
        Err(e) => {
            error!("Run failed: {e}");
            Err(e)
        }
    }
}

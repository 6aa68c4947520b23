use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use cfb_wrangle::config::Config;
use cfb_wrangle::error::AppError;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// CollegeFootballData wrangler
///
/// Pulls teams, games, team box scores and advanced metrics from the
/// CollegeFootballData API for every configured season week, writes them as
/// CSV tables and joins them into one row per team per game.
///
/// Values from flags override environment variables, which override the
/// config file.
#[derive(Parser, Debug)]
#[command(author = "Brian Cain", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Seasons to pull, comma separated (e.g. 2019,2021).
    #[arg(long, value_delimiter = ',', value_name = "YEARS", help_heading = "Data")]
    pub seasons: Option<Vec<i32>>,

    /// Regular-season weeks to pull per season, starting at week 1.
    #[arg(long, value_name = "N", help_heading = "Data")]
    pub weeks: Option<u32>,

    /// Directory the CSV tables are written to.
    #[arg(long = "output-dir", short = 'o', value_name = "DIR", help_heading = "Data")]
    pub output_dir: Option<String>,

    /// API base URL.
    #[arg(long = "base-url", value_name = "URL", help_heading = "API")]
    pub base_url: Option<String>,

    /// Bearer token for this run only. Prefer the CFB_API_TOKEN variable so
    /// the token does not end up in shell history.
    #[arg(long, value_name = "TOKEN", help_heading = "API")]
    pub token: Option<String>,

    /// Skip fetching and re-run the join over the tables already in the output directory.
    #[arg(long = "join-only", conflicts_with = "skip_join", help_heading = "Stages")]
    pub join_only: bool,

    /// Fetch and write the four tables without joining them.
    #[arg(long = "skip-join", help_heading = "Stages")]
    pub skip_join: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(long = "config-file", value_name = "PATH", help_heading = "Configuration")]
    pub config_file: Option<String>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long = "init-config", help_heading = "Configuration")]
    pub init_config: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Log at debug level (response sizes, join match counts).
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Log to the log file only, not to stdout.
    #[arg(long = "quiet", short = 'q', help_heading = "Debug")]
    pub quiet: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(seasons) = &self.seasons {
            config.seasons = seasons.iter().copied().collect();
        }
        if let Some(weeks) = self.weeks {
            config.weeks_per_season = weeks;
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(token) = &self.token {
            config.bearer_token = Some(token.clone());
        }
        if let Some(log_file) = &self.log_file {
            config.log_file_path = Some(log_file.clone());
        }
    }

    /// Config for this run: file, then `CFB_*` variables, then flags,
    /// validated once at the end.
    pub async fn resolve_config(&self) -> Result<Config, AppError> {
        let mut config = Config::load_unvalidated(self.config_file.as_deref()).await?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Config written by `--init-config`. Flags are applied, but the token
    /// stays whatever the file already held; a `--token` or `CFB_API_TOKEN`
    /// value is never persisted.
    pub async fn config_for_init(&self) -> Result<Config, AppError> {
        let stored_token = Config::load_file_or_default(self.config_file.as_deref())
            .await?
            .bearer_token;
        let mut config = self.resolve_config().await?;
        config.bearer_token = stored_token;
        Ok(config)
    }
}

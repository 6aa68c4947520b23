use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_SEASON_TYPE, DEFAULT_SEASONS,
    DEFAULT_WEEKS_PER_SEASON, env_vars, retry::DEFAULT_MAX_RETRIES,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_default_output_dir, get_log_dir_path};
use validation::validate_config;

/// Configuration for a pull.
/// Every field has a default, so a partial (or missing) config file is fine.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// Directory the CSV tables are written to and read back from.
    pub output_dir: String,
    /// Seasons to pull. Kept as a set so they are deduplicated and iterated in order.
    pub seasons: BTreeSet<i32>,
    /// Regular-season weeks pulled for every season, starting at week 1.
    pub weeks_per_season: u32,
    /// `seasonType` query value for game and box-score requests.
    pub season_type: String,
    /// Bearer token sent in the `Authorization` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// Path to the log file. If not specified, logs go to the default location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
    /// Retries for timeouts, connection failures, 429 and 5xx. Zero means the
    /// first failure aborts the run.
    pub max_retries: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: get_default_output_dir(),
            seasons: DEFAULT_SEASONS.into_iter().collect(),
            weeks_per_season: DEFAULT_WEEKS_PER_SEASON,
            season_type: DEFAULT_SEASON_TYPE.to_string(),
            bearer_token: None,
            log_file_path: None,
            http_timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECONDS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, or from the default config file location
    /// when no path is given. A missing file yields the defaults.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `CFB_API_TOKEN` - Bearer token
    /// - `CFB_BASE_URL` - Override API base URL
    /// - `CFB_OUTPUT_DIR` - Override output directory
    /// - `CFB_SEASONS` - Comma separated seasons, e.g. `2019,2021`
    /// - `CFB_WEEKS` - Override weeks per season
    /// - `CFB_LOG_FILE` - Override log file path
    /// - `CFB_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded and validated configuration
    /// * `Err(AppError)` - Unreadable file, bad TOML, bad override or failed validation
    pub async fn load(path: Option<&str>) -> Result<Self, AppError> {
        let config = Self::load_unvalidated(path).await?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`Config::load`] without the final validation, for callers
    /// that layer further overrides on top and validate afterwards.
    pub async fn load_unvalidated(path: Option<&str>) -> Result<Self, AppError> {
        let mut config = Self::load_file_or_default(path).await?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Reads the config file at `path` (or the default location), falling
    /// back to the defaults when it does not exist. No overrides applied.
    pub async fn load_file_or_default(path: Option<&str>) -> Result<Self, AppError> {
        let config_path = path.map(str::to_string).unwrap_or_else(get_config_path);

        if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Self::load_from_path(&config_path).await
        } else {
            debug!("No config file at {config_path}, using defaults");
            Ok(Config::default())
        }
    }

    /// Applies `CFB_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(token) = std::env::var(env_vars::API_TOKEN)
            && !token.trim().is_empty()
        {
            self.bearer_token = Some(token.trim().to_string());
        }

        if let Ok(base_url) = std::env::var(env_vars::BASE_URL) {
            self.base_url = base_url;
        }

        if let Ok(output_dir) = std::env::var(env_vars::OUTPUT_DIR) {
            self.output_dir = output_dir;
        }

        if let Ok(seasons) = std::env::var(env_vars::SEASONS) {
            self.seasons = parse_season_list(&seasons)?;
        }

        if let Ok(weeks) = std::env::var(env_vars::WEEKS) {
            self.weeks_per_season = weeks.trim().parse::<u32>().map_err(|_| {
                AppError::config_error(format!("{} must be a number, got '{weeks}'", env_vars::WEEKS))
            })?;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        match std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .map(|s| s.parse::<u64>())
        {
            Some(Ok(timeout)) => self.http_timeout_seconds = timeout,
            Some(Err(_)) => warn!("Ignoring non-numeric {}", env_vars::HTTP_TIMEOUT),
            None => {}
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns the bearer token, or `AppError::MissingToken` if none is configured.
    /// Only stages that talk to the API need it.
    pub fn require_token(&self) -> Result<&str, AppError> {
        self.bearer_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingToken)
    }

    /// Base URL with any trailing slash removed, ready for path concatenation.
    pub fn api_base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the base
    /// URL carries a scheme.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let base_url = if self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
        {
            self.base_url.clone()
        } else {
            format!("https://{}", self.base_url)
        };
        let content = toml::to_string_pretty(&Config {
            base_url,
            ..self.clone()
        })?;

        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a file path without applying environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Prints the active configuration to stdout, with the token masked.
    pub fn display(&self, config_path: &str) {
        let exists = Path::new(config_path).exists();
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if exists {
            println!("{config_path}");
        } else {
            println!("{config_path} (not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Base URL:");
        println!("{}", self.base_url);
        println!("────────────────────────────────────");
        println!("Bearer Token:");
        println!(
            "{}",
            self.bearer_token
                .as_deref()
                .map(mask_token)
                .unwrap_or_else(|| "(not set)".to_string())
        );
        println!("────────────────────────────────────");
        println!("Seasons:");
        println!(
            "{}",
            self.seasons
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Weeks per season: {}", self.weeks_per_season);
        println!("Season type: {}", self.season_type);
        println!("────────────────────────────────────");
        println!("Output Directory:");
        println!("{}", self.output_dir);
        println!("────────────────────────────────────");
        println!("HTTP Timeout: {} seconds", self.http_timeout_seconds);
        println!("Max Retries: {}", self.max_retries);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &self.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{}/cfb_wrangle.log", get_log_dir_path());
            println!("(Default location)");
        }
    }
}

/// Parses a comma separated season list such as `"2019, 2021"`.
pub fn parse_season_list(input: &str) -> Result<BTreeSet<i32>, AppError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>()
                .map_err(|_| AppError::config_error(format!("Invalid season '{part}'")))
        })
        .collect()
}

/// Keeps the first four characters of a token so the user can tell which one is active.
fn mask_token(token: &str) -> String {
    let visible: String = token.chars().take(4).collect();
    if token.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{visible}****")
    }
}

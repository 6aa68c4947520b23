use super::Config;
use crate::constants::{FIRST_SEASON, MAX_WEEKS_PER_SEASON, retry::MAX_RETRIES_LIMIT};
use crate::error::AppError;
use chrono::{Datelike, Local};
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Base URL cannot be empty and must be a valid URL or domain name
/// - At least one season must be configured, none before `FIRST_SEASON`
///   or after the current year
/// - Weeks per season must be between 1 and `MAX_WEEKS_PER_SEASON`
/// - Output directory cannot be empty
/// - HTTP timeout must be positive and `max_retries` bounded
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let base_url = config.base_url.trim();
    if base_url.is_empty() {
        return Err(AppError::config_error("Base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !base_url.contains('.') && !base_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "Base URL must be a valid URL or domain name",
            ));
        }
    }

    if config.seasons.is_empty() {
        return Err(AppError::config_error("At least one season is required"));
    }

    let current_year = Local::now().year();
    if let Some(season) = config
        .seasons
        .iter()
        .find(|&&season| season < FIRST_SEASON || season > current_year)
    {
        return Err(AppError::config_error(format!(
            "Season {season} is outside {FIRST_SEASON}..={current_year}"
        )));
    }

    if config.weeks_per_season == 0 || config.weeks_per_season > MAX_WEEKS_PER_SEASON {
        return Err(AppError::config_error(format!(
            "weeks_per_season must be between 1 and {MAX_WEEKS_PER_SEASON}, got {}",
            config.weeks_per_season
        )));
    }

    if config.output_dir.trim().is_empty() {
        return Err(AppError::config_error("Output directory cannot be empty"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.max_retries > MAX_RETRIES_LIMIT {
        return Err(AppError::config_error(format!(
            "max_retries must be at most {MAX_RETRIES_LIMIT}, got {}",
            config.max_retries
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

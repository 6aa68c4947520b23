use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("cfb_wrangle")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("cfb_wrangle")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Returns the default directory the CSV tables are written to.
///
/// Uses the platform data directory (e.g., ~/.local/share on Linux) and falls
/// back to `./data` when it is unavailable.
pub fn get_default_output_dir() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("cfb_wrangle").join("data"))
        .unwrap_or_else(|| Path::new(".").join("data"))
        .to_string_lossy()
        .to_string()
}

//! Application-wide constants and configuration defaults
//!
//! This module centralizes magic numbers and default values so the
//! configuration layer and the pipeline agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Public CollegeFootballData API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.collegefootballdata.com";

/// Number of regular-season weeks pulled per season
pub const DEFAULT_WEEKS_PER_SEASON: u32 = 15;

/// Upper bound accepted for `weeks_per_season`
pub const MAX_WEEKS_PER_SEASON: u32 = 20;

/// Earliest season accepted in the config (the first intercollegiate game)
pub const FIRST_SEASON: i32 = 1869;

/// Season type query value sent with game and box-score requests
pub const DEFAULT_SEASON_TYPE: &str = "regular";

/// Seasons pulled when nothing else is configured. 2020 is left out on purpose:
/// the COVID season's schedule is too irregular to model alongside the others.
pub const DEFAULT_SEASONS: [i32; 6] = [2015, 2016, 2017, 2018, 2019, 2021];

/// File names of the persisted tables inside the output directory
pub mod files {
    pub const TEAMS: &str = "team.csv";
    pub const GAMES: &str = "game.csv";
    pub const STATS: &str = "stats.csv";
    pub const METRICS: &str = "metrics.csv";
    pub const JOINED: &str = "joined.csv";
}

/// Environment variable names
pub mod env_vars {
    /// Bearer token for the API
    pub const API_TOKEN: &str = "CFB_API_TOKEN";

    /// API base URL override
    pub const BASE_URL: &str = "CFB_BASE_URL";

    /// Output directory override
    pub const OUTPUT_DIR: &str = "CFB_OUTPUT_DIR";

    /// Comma separated list of seasons, e.g. `2019,2021`
    pub const SEASONS: &str = "CFB_SEASONS";

    /// Regular-season week count override
    pub const WEEKS: &str = "CFB_WEEKS";

    /// Log file path override
    pub const LOG_FILE: &str = "CFB_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "CFB_HTTP_TIMEOUT";
}

/// Retry configuration for transient transport failures
pub mod retry {
    /// Retries are off unless the config asks for them
    pub const DEFAULT_MAX_RETRIES: u32 = 0;

    /// Upper bound accepted for `max_retries`
    pub const MAX_RETRIES_LIMIT: u32 = 5;

    /// Base delay for exponential backoff (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;
}

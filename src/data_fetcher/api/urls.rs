//! URL building utilities for API endpoints

/// Builds the URL of the FBS team list.
///
/// # Example
/// ```
/// use cfb_wrangle::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/teams/fbs");
/// ```
pub fn build_teams_url(api_base: &str) -> String {
    format!("{api_base}/teams/fbs")
}

/// Builds the URL of the game list for one season week.
///
/// # Arguments
/// * `api_base` - The base API URL, without trailing slash
/// * `season` - The season year
/// * `week` - Week number, starting at 1
/// * `season_type` - Usually `regular`
///
/// # Example
/// ```
/// use cfb_wrangle::data_fetcher::api::build_games_url;
///
/// let url = build_games_url("https://api.example.com", 2019, 3, "regular");
/// assert_eq!(url, "https://api.example.com/games?year=2019&week=3&seasonType=regular");
/// ```
pub fn build_games_url(api_base: &str, season: i32, week: u32, season_type: &str) -> String {
    format!("{api_base}/games?year={season}&week={week}&seasonType={season_type}")
}

/// Builds the URL of the per-game team box scores for one season week.
///
/// # Example
/// ```
/// use cfb_wrangle::data_fetcher::api::build_team_stats_url;
///
/// let url = build_team_stats_url("https://api.example.com", 2021, 1, "regular");
/// assert_eq!(url, "https://api.example.com/games/teams?year=2021&week=1&seasonType=regular");
/// ```
pub fn build_team_stats_url(api_base: &str, season: i32, week: u32, season_type: &str) -> String {
    format!("{api_base}/games/teams?year={season}&week={week}&seasonType={season_type}")
}

/// Builds the URL of the advanced game metrics for one season week. The
/// endpoint takes no season type.
///
/// # Example
/// ```
/// use cfb_wrangle::data_fetcher::api::build_advanced_metrics_url;
///
/// let url = build_advanced_metrics_url("https://api.example.com", 2018, 12);
/// assert_eq!(url, "https://api.example.com/stats/game/advanced?year=2018&week=12");
/// ```
pub fn build_advanced_metrics_url(api_base: &str, season: i32, week: u32) -> String {
    format!("{api_base}/stats/game/advanced?year={season}&week={week}")
}

//! One function per API resource. Each fetches a single request and hands
//! the typed payload back; row extraction happens in `processors`.

use crate::config::Config;
use crate::data_fetcher::models::{ApiAdvancedGameStats, ApiGame, ApiTeam, ApiTeamGameStats};
use crate::error::AppError;
use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch;
use super::urls::{
    build_advanced_metrics_url, build_games_url, build_team_stats_url, build_teams_url,
};

/// Fetches the FBS team list.
#[instrument(skip(client, config))]
pub async fn fetch_teams(client: &Client, config: &Config) -> Result<Vec<ApiTeam>, AppError> {
    let token = config.require_token()?;
    let url = build_teams_url(config.api_base());
    let teams: Vec<ApiTeam> = fetch(client, &url, token, config.max_retries).await?;
    debug!("Fetched {} teams", teams.len());
    Ok(teams)
}

/// Fetches the games of one season week.
#[instrument(skip(client, config))]
pub async fn fetch_games_week(
    client: &Client,
    config: &Config,
    season: i32,
    week: u32,
) -> Result<Vec<ApiGame>, AppError> {
    let token = config.require_token()?;
    let url = build_games_url(config.api_base(), season, week, &config.season_type);
    let games: Vec<ApiGame> = fetch(client, &url, token, config.max_retries).await?;
    debug!("Fetched {} games for {} week {}", games.len(), season, week);
    Ok(games)
}

/// Fetches the team box scores of one season week.
#[instrument(skip(client, config))]
pub async fn fetch_stats_week(
    client: &Client,
    config: &Config,
    season: i32,
    week: u32,
) -> Result<Vec<ApiTeamGameStats>, AppError> {
    let token = config.require_token()?;
    let url = build_team_stats_url(config.api_base(), season, week, &config.season_type);
    let bundles: Vec<ApiTeamGameStats> = fetch(client, &url, token, config.max_retries).await?;
    debug!("Fetched {} box scores for {} week {}", bundles.len(), season, week);
    Ok(bundles)
}

/// Fetches the advanced metrics of one season week.
#[instrument(skip(client, config))]
pub async fn fetch_metrics_week(
    client: &Client,
    config: &Config,
    season: i32,
    week: u32,
) -> Result<Vec<ApiAdvancedGameStats>, AppError> {
    let token = config.require_token()?;
    let url = build_advanced_metrics_url(config.api_base(), season, week);
    let entries: Vec<ApiAdvancedGameStats> =
        fetch(client, &url, token, config.max_retries).await?;
    debug!("Fetched {} metric entries for {} week {}", entries.len(), season, week);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> Config {
        Config {
            base_url,
            bearer_token: Some("test-token".to_string()),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_teams() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/teams/fbs"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 333, "school": "Alabama", "mascot": "Crimson Tide",
                 "location": {"venue_id": 3657, "name": "Bryant Denny Stadium"}},
                {"id": 61, "school": "Georgia"}
            ])))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let teams = fetch_teams(&client, &test_config(mock_server.uri())).await.unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].school, "Alabama");
        assert_eq!(teams[1].id, 61);
    }

    #[tokio::test]
    async fn test_fetch_games_week_sends_query() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/games"))
            .and(query_param("year", "2019"))
            .and(query_param("week", "3"))
            .and(query_param("seasonType", "regular"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 100, "season": 2019, "start_date": "2019-09-14T16:00:00.000Z",
                "home_id": 1, "away_id": 2, "home_points": 28, "away_points": 24,
                "home_line_scores": [7, 7, 7, 7], "away_line_scores": [3, 7, 7, 7],
                "home_pregame_elo": 1700, "away_pregame_elo": 1650
            }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let games = fetch_games_week(&client, &test_config(mock_server.uri()), 2019, 3)
            .await
            .unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].home_points, Some(28));
    }

    #[tokio::test]
    async fn test_fetch_games_week_missing_key_is_fatal() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/games"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 100, "season": 2019, "start_date": "2019-09-14T16:00:00.000Z",
                "home_id": 1, "away_id": 2
            }])))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_games_week(&client, &test_config(mock_server.uri()), 2019, 1).await;
        assert!(matches!(result, Err(AppError::ApiUnexpectedStructure { .. })));
    }

    #[tokio::test]
    async fn test_fetch_stats_week_unauthorized_carries_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/games/teams"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let err = fetch_stats_week(&client, &test_config(mock_server.uri()), 2021, 1)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(401));
    }

    #[tokio::test]
    async fn test_fetch_metrics_week_has_no_season_type() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stats/game/advanced"))
            .and(query_param("year", "2018"))
            .and(query_param("week", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let entries = fetch_metrics_week(&client, &test_config(mock_server.uri()), 2018, 12)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_request() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = Config {
            base_url: mock_server.uri(),
            bearer_token: None,
            ..Config::default()
        };
        let client = create_test_http_client();
        let result = fetch_teams(&client, &config).await;
        assert!(matches!(result, Err(AppError::MissingToken)));
    }
}

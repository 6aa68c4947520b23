use cfb_wrangle::{
    config::Config,
    constants::files,
    dataset::{JoinedRow, Record, StatsRow, Table, read_table, table_path},
    error::AppError,
    pipeline::{self, RunOptions},
};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn side_stats(rush_yards: &str, sacks: &str) -> Value {
    json!([
        {"category": "rushingYards", "stat": rush_yards},
        {"category": "sacks", "stat": sacks},
        {"category": "completionAttempts", "stat": "18-30"},
        {"category": "thirdDownEff", "stat": "7-14"},
        {"category": "possessionTime", "stat": "31:02"}
    ])
}

fn side_metrics(ppa: f64) -> Value {
    json!({
        "plays": 70, "drives": 12, "ppa": ppa, "successRate": 0.45,
        "explosiveness": 1.2, "powerSuccess": null, "stuffRate": 0.2,
        "lineYards": 3.0, "secondLevelYards": 1.1, "openFieldYards": 0.8
    })
}

/// Week 1 of 2021: Alabama (1) hosts Georgia (2) in game 100, and Georgia
/// visits an FCS school in game 200 whose box score came back empty for
/// Georgia's side.
async fn mount_week(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("year", "2021"))
        .and(query_param("week", "1"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 100, "season": 2021, "start_date": "2021-09-04T16:00:00.000Z",
             "home_id": 1, "away_id": 2, "home_points": 35, "away_points": 17,
             "home_line_scores": [14, 7, 7, 7], "away_line_scores": [0, 7, 3, 7],
             "home_pregame_elo": 1925, "away_pregame_elo": 1800},
            {"id": 200, "season": 2021, "start_date": "2021-09-04T19:00:00.000Z",
             "home_id": 900, "away_id": 2, "home_points": 3, "away_points": 56,
             "home_line_scores": null, "away_line_scores": null,
             "home_pregame_elo": null, "away_pregame_elo": 1800}
        ])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/games/teams"))
        .and(query_param("year", "2021"))
        .and(query_param("week", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 100, "teams": [
                {"school": "Alabama", "homeAway": "home", "stats": side_stats("210", "3")},
                {"school": "Georgia", "homeAway": "away", "stats": side_stats("95", "1")}
            ]},
            {"id": 200, "teams": [
                {"school": "Non-FBS U", "homeAway": "home", "stats": side_stats("40", "0")},
                {"school": "Georgia", "homeAway": "away", "stats": []}
            ]}
        ])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/stats/game/advanced"))
        .and(query_param("year", "2021"))
        .and(query_param("week", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"gameId": 100, "team": "Alabama", "opponent": "Georgia",
             "offense": side_metrics(0.41), "defense": side_metrics(0.12)},
            {"gameId": 100, "team": "Georgia", "opponent": "Alabama",
             "offense": side_metrics(0.12), "defense": side_metrics(0.41)},
            {"gameId": 200, "team": "Non-FBS U", "opponent": "Georgia",
             "offense": side_metrics(-0.3), "defense": side_metrics(0.6)}
        ])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/teams/fbs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "school": "Alabama", "mascot": "Crimson Tide",
             "logos": ["http://a/1.png", "http://a/1-dark.png"],
             "location": {"venue_id": 3657, "city": "Tuscaloosa"}},
            {"id": 2, "school": "Georgia", "mascot": "Bulldogs"}
        ])))
        .mount(mock_server)
        .await;
}

fn test_config(base_url: String, output_dir: &Path) -> Config {
    Config {
        base_url,
        output_dir: output_dir.to_string_lossy().to_string(),
        seasons: BTreeSet::from([2021]),
        weeks_per_season: 1,
        bearer_token: Some("test-token".to_string()),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_full_run_writes_all_tables() {
    let mock_server = MockServer::start().await;
    mount_week(&mock_server).await;
    let dir = tempdir().unwrap();
    let config = test_config(mock_server.uri(), dir.path());

    let summary = pipeline::run(&config, RunOptions::default()).await.unwrap();

    assert_eq!(summary.teams, 2);
    assert_eq!(summary.games, 4);
    assert_eq!(summary.stats, 3);
    assert_eq!(summary.dropped_stat_sides, 1);
    assert_eq!(summary.metrics, 3);
    assert_eq!(summary.joined, Some(3));

    for file in [files::TEAMS, files::GAMES, files::STATS, files::METRICS, files::JOINED] {
        assert!(table_path(dir.path(), file).exists(), "{file} missing");
    }

    let team_csv = fs::read_to_string(table_path(dir.path(), files::TEAMS)).unwrap();
    assert!(team_csv.contains("http://a/1.png;http://a/1-dark.png"));
    assert!(!team_csv.contains("Tuscaloosa"));

    let stats: Table<StatsRow> = read_table(&table_path(dir.path(), files::STATS)).unwrap();
    assert!(
        stats
            .rows()
            .iter()
            .all(|row| !(row.game_id == 200 && row.school == "Georgia"))
    );
}

#[tokio::test]
async fn test_joined_rows_line_up_with_game_sides() {
    let mock_server = MockServer::start().await;
    mount_week(&mock_server).await;
    let dir = tempdir().unwrap();
    let config = test_config(mock_server.uri(), dir.path());

    pipeline::run(&config, RunOptions::default()).await.unwrap();

    let joined_path = table_path(dir.path(), files::JOINED);
    let header = fs::read_to_string(&joined_path)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();
    assert_eq!(header, JoinedRow::COLUMNS.join(","));
    assert!(!header.split(',').any(|c| c == "id" || c == "school_y"));

    let joined: Table<JoinedRow> = read_table(&joined_path).unwrap();
    let game_100: Vec<&JoinedRow> = joined.rows().iter().filter(|r| r.game_id == 100).collect();
    assert_eq!(game_100.len(), 2);

    let alabama = game_100.iter().find(|r| r.school == "Alabama").unwrap();
    assert_eq!(alabama.home_bool, 1);
    assert_eq!(alabama.points, Some(35));
    assert_eq!(alabama.offensive_ppa, Some(0.41));
    assert_eq!(alabama.rush_yards, 210);

    let georgia = game_100.iter().find(|r| r.school == "Georgia").unwrap();
    assert_eq!(georgia.home_bool, 0);
    assert_eq!(georgia.points, Some(17));
    assert_eq!(georgia.offensive_ppa, Some(0.12));

    let fcs = joined
        .rows()
        .iter()
        .find(|r| r.school == "Non-FBS U")
        .unwrap();
    assert_eq!(fcs.team_id, None);
    assert_eq!(fcs.points, None);
    assert_eq!(fcs.elo, None);
    assert_eq!(fcs.rush_yards, 40);
    assert_eq!(fcs.offensive_ppa, Some(-0.3));
}

#[tokio::test]
async fn test_join_only_reproduces_joined_file() {
    let mock_server = MockServer::start().await;
    mount_week(&mock_server).await;
    let dir = tempdir().unwrap();
    let config = test_config(mock_server.uri(), dir.path());

    pipeline::run(&config, RunOptions::default()).await.unwrap();
    let joined_path = table_path(dir.path(), files::JOINED);
    let first = fs::read_to_string(&joined_path).unwrap();

    let options = RunOptions {
        join_only: true,
        skip_join: false,
    };
    let summary = pipeline::run(&config, options).await.unwrap();
    let second = fs::read_to_string(&joined_path).unwrap();

    assert_eq!(summary.joined, Some(3));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_skip_join_leaves_no_joined_file() {
    let mock_server = MockServer::start().await;
    mount_week(&mock_server).await;
    let dir = tempdir().unwrap();
    let config = test_config(mock_server.uri(), dir.path());

    let options = RunOptions {
        join_only: false,
        skip_join: true,
    };
    let summary = pipeline::run(&config, options).await.unwrap();

    assert_eq!(summary.joined, None);
    assert!(table_path(dir.path(), files::STATS).exists());
    assert!(!table_path(dir.path(), files::JOINED).exists());
}

#[tokio::test]
async fn test_auth_failure_aborts_run() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    let dir = tempdir().unwrap();
    let config = test_config(mock_server.uri(), dir.path());

    let err = pipeline::run(&config, RunOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ApiClientError { status: 401, .. }));
    assert!(!table_path(dir.path(), files::GAMES).exists());
}

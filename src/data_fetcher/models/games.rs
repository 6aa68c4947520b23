use super::required_nullable;
use serde::{Deserialize, Serialize};

/// One entry of `/games?year=..&week=..`.
///
/// Every key read by the game extractor is required. Scores, line scores and
/// elo ratings are `null` for games that have not been played or rated, which
/// is accepted; a key that is missing altogether fails the whole week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGame {
    pub id: i64,
    pub season: i32,
    #[serde(alias = "startDate")]
    pub start_date: String,
    #[serde(alias = "homeId")]
    pub home_id: i64,
    #[serde(alias = "awayId")]
    pub away_id: i64,
    #[serde(alias = "homePoints", deserialize_with = "required_nullable")]
    pub home_points: Option<i64>,
    #[serde(alias = "awayPoints", deserialize_with = "required_nullable")]
    pub away_points: Option<i64>,
    #[serde(alias = "homeLineScores", deserialize_with = "required_nullable")]
    pub home_line_scores: Option<Vec<i64>>,
    #[serde(alias = "awayLineScores", deserialize_with = "required_nullable")]
    pub away_line_scores: Option<Vec<i64>>,
    #[serde(alias = "homePregameElo", deserialize_with = "required_nullable")]
    pub home_pregame_elo: Option<f64>,
    #[serde(alias = "awayPregameElo", deserialize_with = "required_nullable")]
    pub away_pregame_elo: Option<f64>,
}

use super::required_nullable;
use serde::{Deserialize, Serialize};

/// One entry of `/stats/game/advanced?year=..&week=..`: a single team's
/// advanced metrics for one game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiAdvancedGameStats {
    #[serde(rename = "gameId")]
    pub game_id: i64,
    pub team: String,
    #[serde(default)]
    pub opponent: Option<String>,
    pub offense: ApiSideMetrics,
    pub defense: ApiSideMetrics,
}

/// The ten efficiency figures pulled from each of `offense` and `defense`.
/// The API nests further breakdowns (standard downs, passing plays, ...) under
/// the same object; those are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ApiSideMetrics {
    #[serde(deserialize_with = "required_nullable")]
    pub plays: Option<i64>,
    #[serde(deserialize_with = "required_nullable")]
    pub drives: Option<i64>,
    #[serde(deserialize_with = "required_nullable")]
    pub ppa: Option<f64>,
    #[serde(rename = "successRate", deserialize_with = "required_nullable")]
    pub success_rate: Option<f64>,
    #[serde(deserialize_with = "required_nullable")]
    pub explosiveness: Option<f64>,
    #[serde(rename = "powerSuccess", deserialize_with = "required_nullable")]
    pub power_success: Option<f64>,
    #[serde(rename = "stuffRate", deserialize_with = "required_nullable")]
    pub stuff_rate: Option<f64>,
    #[serde(rename = "lineYards", deserialize_with = "required_nullable")]
    pub line_yards: Option<f64>,
    #[serde(rename = "secondLevelYards", deserialize_with = "required_nullable")]
    pub second_level_yards: Option<f64>,
    #[serde(rename = "openFieldYards", deserialize_with = "required_nullable")]
    pub open_field_yards: Option<f64>,
}

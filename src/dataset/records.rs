//! Row types of the five tables and their fixed column schemas.
//!
//! Column names follow the headers of the CSV files the modeling notebooks
//! already read, which is why a few of them are camelCase.

use super::values::{LineScores, MadeAttempted, PenaltySummary, PossessionTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A row type with a fixed, ordered column schema.
///
/// `COLUMNS` must list the serialized field names in declaration order; the
/// storage layer writes it as the header and checks it when reading back.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Table name used in logs and errors.
    const TABLE: &'static str;
    /// Column names in file order.
    const COLUMNS: &'static [&'static str];
}

/// Descriptive row for one FBS team. `id` is the bridge key for the join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TeamRow {
    pub id: i64,
    pub school: String,
    pub mascot: Option<String>,
    pub abbreviation: Option<String>,
    pub alt_name_1: Option<String>,
    pub alt_name_2: Option<String>,
    pub alt_name_3: Option<String>,
    pub classification: Option<String>,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub color: Option<String>,
    pub alt_color: Option<String>,
    /// Logo URLs separated by `;`.
    pub logos: Option<String>,
    pub twitter: Option<String>,
}

impl Record for TeamRow {
    const TABLE: &'static str = "team";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "school",
        "mascot",
        "abbreviation",
        "alt_name_1",
        "alt_name_2",
        "alt_name_3",
        "classification",
        "conference",
        "division",
        "color",
        "alt_color",
        "logos",
        "twitter",
    ];
}

/// One side of one game. Every game contributes a home row and an away row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRow {
    #[serde(rename = "gameId")]
    pub game_id: i64,
    pub week_num: u32,
    #[serde(rename = "gameSeason")]
    pub game_season: i32,
    pub team_id: i64,
    pub points: Option<i64>,
    #[serde(rename = "Quarterly_points")]
    pub quarterly_points: Option<LineScores>,
    pub elo: Option<f64>,
    #[serde(rename = "homeBool")]
    pub home_bool: u8,
}

impl Record for GameRow {
    const TABLE: &'static str = "game";
    const COLUMNS: &'static [&'static str] = &[
        "gameId",
        "week_num",
        "gameSeason",
        "team_id",
        "points",
        "Quarterly_points",
        "elo",
        "homeBool",
    ];
}

/// Box score of one team in one game.
///
/// A stat category the API did not report is stored as zero, the same as a
/// reported zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatsRow {
    #[serde(rename = "gameId")]
    pub game_id: i64,
    pub week_num: u32,
    pub school: String,
    pub rush_td: i64,
    pub pass_td: i64,
    pub rush_attempt: i64,
    pub yp_rush: f64,
    pub rush_yards: i64,
    pub yp_pass: f64,
    pub completion_attempts: MadeAttempted,
    pub pass_yards: i64,
    pub total_yards: i64,
    pub turnovers: i64,
    pub tfl: f64,
    pub sacks: f64,
    pub qb_hurries: i64,
    pub fumbles_lost: i64,
    pub interceptions: i64,
    pub possession_time: PossessionTime,
    pub penalty_yards: PenaltySummary,
    #[serde(rename = "fourthDown_eff")]
    pub fourth_down_eff: MadeAttempted,
    #[serde(rename = "thirdDown_eff")]
    pub third_down_eff: MadeAttempted,
    #[serde(rename = "firstDowns")]
    pub first_downs: i64,
    pub defensive_td: i64,
    #[serde(rename = "homeBool")]
    pub home_bool: u8,
}

impl StatsRow {
    /// Values of the counters used to spot an empty box score, in column order.
    pub fn zero_checked_values(&self) -> [f64; 16] {
        [
            self.rush_td as f64,
            self.pass_td as f64,
            self.rush_attempt as f64,
            self.yp_rush,
            self.rush_yards as f64,
            self.yp_pass,
            self.pass_yards as f64,
            self.total_yards as f64,
            self.turnovers as f64,
            self.tfl,
            self.sacks,
            self.qb_hurries as f64,
            self.fumbles_lost as f64,
            self.interceptions as f64,
            self.first_downs as f64,
            self.defensive_td as f64,
        ]
    }

    /// True when every zero-checked counter is zero, which is how a side
    /// whose box score never made it into the API looks.
    pub fn looks_unreported(&self) -> bool {
        self.zero_checked_values().iter().all(|value| *value == 0.0)
    }
}

impl Record for StatsRow {
    const TABLE: &'static str = "stats";
    const COLUMNS: &'static [&'static str] = &[
        "gameId",
        "week_num",
        "school",
        "rush_td",
        "pass_td",
        "rush_attempt",
        "yp_rush",
        "rush_yards",
        "yp_pass",
        "completion_attempts",
        "pass_yards",
        "total_yards",
        "turnovers",
        "tfl",
        "sacks",
        "qb_hurries",
        "fumbles_lost",
        "interceptions",
        "possession_time",
        "penalty_yards",
        "fourthDown_eff",
        "thirdDown_eff",
        "firstDowns",
        "defensive_td",
        "homeBool",
    ];
}

/// Advanced metrics of one team in one game, offense and defense side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricsRow {
    #[serde(rename = "gameId")]
    pub game_id: i64,
    pub week_num: u32,
    pub school: String,
    pub offensive_plays: Option<i64>,
    pub offensive_drives: Option<i64>,
    pub offensive_ppa: Option<f64>,
    #[serde(rename = "offensive_successRate")]
    pub offensive_success_rate: Option<f64>,
    pub offensive_explosiveness: Option<f64>,
    #[serde(rename = "offensive_powerSuccess")]
    pub offensive_power_success: Option<f64>,
    #[serde(rename = "offensive_stuffRate")]
    pub offensive_stuff_rate: Option<f64>,
    #[serde(rename = "offensive_lineYards")]
    pub offensive_line_yards: Option<f64>,
    #[serde(rename = "offensive_secondLevelYards")]
    pub offensive_second_level_yards: Option<f64>,
    #[serde(rename = "offensive_openFieldYards")]
    pub offensive_open_field_yards: Option<f64>,
    pub defensive_plays: Option<i64>,
    pub defensive_drives: Option<i64>,
    pub defensive_ppa: Option<f64>,
    #[serde(rename = "defensive_successRate")]
    pub defensive_success_rate: Option<f64>,
    pub defensive_explosiveness: Option<f64>,
    #[serde(rename = "defensive_powerSuccess")]
    pub defensive_power_success: Option<f64>,
    #[serde(rename = "defensive_stuffRate")]
    pub defensive_stuff_rate: Option<f64>,
    #[serde(rename = "defensive_lineYards")]
    pub defensive_line_yards: Option<f64>,
    #[serde(rename = "defensive_secondLevelYards")]
    pub defensive_second_level_yards: Option<f64>,
    #[serde(rename = "defensive_openFieldYards")]
    pub defensive_open_field_yards: Option<f64>,
}

impl Record for MetricsRow {
    const TABLE: &'static str = "metrics";
    const COLUMNS: &'static [&'static str] = &[
        "gameId",
        "week_num",
        "school",
        "offensive_plays",
        "offensive_drives",
        "offensive_ppa",
        "offensive_successRate",
        "offensive_explosiveness",
        "offensive_powerSuccess",
        "offensive_stuffRate",
        "offensive_lineYards",
        "offensive_secondLevelYards",
        "offensive_openFieldYards",
        "defensive_plays",
        "defensive_drives",
        "defensive_ppa",
        "defensive_successRate",
        "defensive_explosiveness",
        "defensive_powerSuccess",
        "defensive_stuffRate",
        "defensive_lineYards",
        "defensive_secondLevelYards",
        "defensive_openFieldYards",
    ];
}

/// One team in one game with its box score, game outcome and advanced
/// metrics. Game and metrics columns are empty when the school could not be
/// matched (typically an FCS opponent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JoinedRow {
    #[serde(rename = "gameId")]
    pub game_id: i64,
    pub week_num: u32,
    pub school: String,
    pub rush_td: i64,
    pub pass_td: i64,
    pub rush_attempt: i64,
    pub yp_rush: f64,
    pub rush_yards: i64,
    pub yp_pass: f64,
    pub completion_attempts: MadeAttempted,
    pub pass_yards: i64,
    pub total_yards: i64,
    pub turnovers: i64,
    pub tfl: f64,
    pub sacks: f64,
    pub qb_hurries: i64,
    pub fumbles_lost: i64,
    pub interceptions: i64,
    pub possession_time: PossessionTime,
    pub penalty_yards: PenaltySummary,
    #[serde(rename = "fourthDown_eff")]
    pub fourth_down_eff: MadeAttempted,
    #[serde(rename = "thirdDown_eff")]
    pub third_down_eff: MadeAttempted,
    #[serde(rename = "firstDowns")]
    pub first_downs: i64,
    pub defensive_td: i64,
    #[serde(rename = "homeBool")]
    pub home_bool: u8,
    pub team_id: Option<i64>,
    pub points: Option<i64>,
    #[serde(rename = "Quarterly_points")]
    pub quarterly_points: Option<LineScores>,
    pub elo: Option<f64>,
    pub offensive_plays: Option<i64>,
    pub offensive_drives: Option<i64>,
    pub offensive_ppa: Option<f64>,
    #[serde(rename = "offensive_successRate")]
    pub offensive_success_rate: Option<f64>,
    pub offensive_explosiveness: Option<f64>,
    #[serde(rename = "offensive_powerSuccess")]
    pub offensive_power_success: Option<f64>,
    #[serde(rename = "offensive_stuffRate")]
    pub offensive_stuff_rate: Option<f64>,
    #[serde(rename = "offensive_lineYards")]
    pub offensive_line_yards: Option<f64>,
    #[serde(rename = "offensive_secondLevelYards")]
    pub offensive_second_level_yards: Option<f64>,
    #[serde(rename = "offensive_openFieldYards")]
    pub offensive_open_field_yards: Option<f64>,
    pub defensive_plays: Option<i64>,
    pub defensive_drives: Option<i64>,
    pub defensive_ppa: Option<f64>,
    #[serde(rename = "defensive_successRate")]
    pub defensive_success_rate: Option<f64>,
    pub defensive_explosiveness: Option<f64>,
    #[serde(rename = "defensive_powerSuccess")]
    pub defensive_power_success: Option<f64>,
    #[serde(rename = "defensive_stuffRate")]
    pub defensive_stuff_rate: Option<f64>,
    #[serde(rename = "defensive_lineYards")]
    pub defensive_line_yards: Option<f64>,
    #[serde(rename = "defensive_secondLevelYards")]
    pub defensive_second_level_yards: Option<f64>,
    #[serde(rename = "defensive_openFieldYards")]
    pub defensive_open_field_yards: Option<f64>,
}

impl JoinedRow {
    /// Fuses a box-score row with its matched game side and metrics, if any.
    /// Week, school and homeBool always come from the box score.
    pub fn new(stats: &StatsRow, game: Option<&GameRow>, metrics: Option<&MetricsRow>) -> Self {
        JoinedRow {
            game_id: stats.game_id,
            week_num: stats.week_num,
            school: stats.school.clone(),
            rush_td: stats.rush_td,
            pass_td: stats.pass_td,
            rush_attempt: stats.rush_attempt,
            yp_rush: stats.yp_rush,
            rush_yards: stats.rush_yards,
            yp_pass: stats.yp_pass,
            completion_attempts: stats.completion_attempts,
            pass_yards: stats.pass_yards,
            total_yards: stats.total_yards,
            turnovers: stats.turnovers,
            tfl: stats.tfl,
            sacks: stats.sacks,
            qb_hurries: stats.qb_hurries,
            fumbles_lost: stats.fumbles_lost,
            interceptions: stats.interceptions,
            possession_time: stats.possession_time,
            penalty_yards: stats.penalty_yards,
            fourth_down_eff: stats.fourth_down_eff,
            third_down_eff: stats.third_down_eff,
            first_downs: stats.first_downs,
            defensive_td: stats.defensive_td,
            home_bool: stats.home_bool,
            team_id: game.map(|g| g.team_id),
            points: game.and_then(|g| g.points),
            quarterly_points: game.and_then(|g| g.quarterly_points.clone()),
            elo: game.and_then(|g| g.elo),
            offensive_plays: metrics.and_then(|m| m.offensive_plays),
            offensive_drives: metrics.and_then(|m| m.offensive_drives),
            offensive_ppa: metrics.and_then(|m| m.offensive_ppa),
            offensive_success_rate: metrics.and_then(|m| m.offensive_success_rate),
            offensive_explosiveness: metrics.and_then(|m| m.offensive_explosiveness),
            offensive_power_success: metrics.and_then(|m| m.offensive_power_success),
            offensive_stuff_rate: metrics.and_then(|m| m.offensive_stuff_rate),
            offensive_line_yards: metrics.and_then(|m| m.offensive_line_yards),
            offensive_second_level_yards: metrics.and_then(|m| m.offensive_second_level_yards),
            offensive_open_field_yards: metrics.and_then(|m| m.offensive_open_field_yards),
            defensive_plays: metrics.and_then(|m| m.defensive_plays),
            defensive_drives: metrics.and_then(|m| m.defensive_drives),
            defensive_ppa: metrics.and_then(|m| m.defensive_ppa),
            defensive_success_rate: metrics.and_then(|m| m.defensive_success_rate),
            defensive_explosiveness: metrics.and_then(|m| m.defensive_explosiveness),
            defensive_power_success: metrics.and_then(|m| m.defensive_power_success),
            defensive_stuff_rate: metrics.and_then(|m| m.defensive_stuff_rate),
            defensive_line_yards: metrics.and_then(|m| m.defensive_line_yards),
            defensive_second_level_yards: metrics.and_then(|m| m.defensive_second_level_yards),
            defensive_open_field_yards: metrics.and_then(|m| m.defensive_open_field_yards),
        }
    }
}

impl Record for JoinedRow {
    const TABLE: &'static str = "joined";
    const COLUMNS: &'static [&'static str] = &[
        "gameId",
        "week_num",
        "school",
        "rush_td",
        "pass_td",
        "rush_attempt",
        "yp_rush",
        "rush_yards",
        "yp_pass",
        "completion_attempts",
        "pass_yards",
        "total_yards",
        "turnovers",
        "tfl",
        "sacks",
        "qb_hurries",
        "fumbles_lost",
        "interceptions",
        "possession_time",
        "penalty_yards",
        "fourthDown_eff",
        "thirdDown_eff",
        "firstDowns",
        "defensive_td",
        "homeBool",
        "team_id",
        "points",
        "Quarterly_points",
        "elo",
        "offensive_plays",
        "offensive_drives",
        "offensive_ppa",
        "offensive_successRate",
        "offensive_explosiveness",
        "offensive_powerSuccess",
        "offensive_stuffRate",
        "offensive_lineYards",
        "offensive_secondLevelYards",
        "offensive_openFieldYards",
        "defensive_plays",
        "defensive_drives",
        "defensive_ppa",
        "defensive_successRate",
        "defensive_explosiveness",
        "defensive_powerSuccess",
        "defensive_stuffRate",
        "defensive_lineYards",
        "defensive_secondLevelYards",
        "defensive_openFieldYards",
    ];
}

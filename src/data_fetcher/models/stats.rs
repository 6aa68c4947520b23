use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `/games/teams?year=..&week=..`: the box score of a single game.
///
/// `teams` is position-indexed, home first and away second. Declaring it as a
/// two-element array makes a bundle with any other number of sides a parse
/// error instead of an index panic later on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiTeamGameStats {
    pub id: i64,
    pub teams: [ApiTeamStatLine; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiTeamStatLine {
    #[serde(alias = "team")]
    pub school: String,
    #[serde(default, rename = "homeAway")]
    pub home_away: Option<String>,
    /// Stat categories reported for this side. Categories with nothing to
    /// report are usually left out entirely.
    #[serde(default)]
    pub stats: Vec<ApiStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiStat {
    pub category: String,
    /// Usually a string (`"245"`, `"7-14"`, `"31:02"`), occasionally a bare number.
    pub stat: Value,
}

impl ApiStat {
    /// The stat value as text, whatever JSON type it arrived as.
    pub fn as_text(&self) -> String {
        match &self.stat {
            Value::String(s) => s.trim().to_string(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

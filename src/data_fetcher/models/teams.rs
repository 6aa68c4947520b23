use serde::{Deserialize, Serialize};

/// One entry of `/teams/fbs`.
///
/// Only the descriptive fields that end up in the team table are declared.
/// The nested `location` (venue) object and any keys the API adds later are
/// ignored rather than shifting columns around.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApiTeam {
    pub id: i64,
    pub school: String,
    #[serde(default)]
    pub mascot: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default, alias = "alt_name1")]
    pub alt_name_1: Option<String>,
    #[serde(default, alias = "alt_name2")]
    pub alt_name_2: Option<String>,
    #[serde(default, alias = "alt_name3")]
    pub alt_name_3: Option<String>,
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub conference: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, alias = "alternateColor")]
    pub alt_color: Option<String>,
    #[serde(default)]
    pub logos: Option<Vec<String>>,
    #[serde(default)]
    pub twitter: Option<String>,
}

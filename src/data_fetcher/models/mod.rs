//! Payload shapes returned by the CollegeFootballData API.
//!
//! These mirror the JSON exactly; turning them into table rows happens in
//! `data_fetcher::processors`.

pub mod games;
pub mod metrics;
pub mod stats;
pub mod teams;

pub use games::ApiGame;
pub use metrics::{ApiAdvancedGameStats, ApiSideMetrics};
pub use stats::{ApiStat, ApiTeamGameStats, ApiTeamStatLine};
pub use teams::ApiTeam;

use serde::{Deserialize, Deserializer};

/// Deserializes a key that must be present but may be `null`.
///
/// Plain `Option<T>` fields quietly become `None` when the key is missing;
/// routing them through `deserialize_with` makes a missing key a hard error
/// while still accepting an explicit `null`.
pub(crate) fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "required_nullable")]
        value: Option<i64>,
    }

    #[test]
    fn test_required_nullable_accepts_null() {
        let probe: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(probe.value, None);
    }

    #[test]
    fn test_required_nullable_accepts_value() {
        let probe: Probe = serde_json::from_str(r#"{"value": 21}"#).unwrap();
        assert_eq!(probe.value, Some(21));
    }

    #[test]
    fn test_required_nullable_rejects_missing_key() {
        let result = serde_json::from_str::<Probe>("{}");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("missing field `value`"), "{message}");
    }
}

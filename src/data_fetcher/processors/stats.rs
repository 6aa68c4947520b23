use crate::data_fetcher::models::{ApiStat, ApiTeamGameStats};
use crate::dataset::StatsRow;
use crate::error::AppError;
use std::str::FromStr;
use tracing::{debug, warn};

/// Home side position in a stat bundle.
pub const HOME: usize = 0;
/// Away side position in a stat bundle.
pub const AWAY: usize = 1;

/// Stats rows for one week plus the number of sides left out because their
/// box score was empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsBatch {
    pub rows: Vec<StatsRow>,
    pub dropped_sides: usize,
}

/// Finds a named stat category in one side of a bundle.
///
/// `None` means the API left the category out, which it does when there is
/// nothing to report; the field helpers below store that as zero.
pub fn extract_stat<'a>(bundle: &'a ApiTeamGameStats, side: usize, name: &str) -> Option<&'a ApiStat> {
    bundle
        .teams
        .get(side)?
        .stats
        .iter()
        .find(|stat| stat.category == name)
}

/// Reads the stat as a whole number, zero when absent.
fn count(bundle: &ApiTeamGameStats, side: usize, name: &str) -> Result<i64, AppError> {
    let Some(stat) = extract_stat(bundle, side, name) else {
        return Ok(0);
    };
    let text = stat.as_text();
    if let Ok(value) = text.parse::<i64>() {
        return Ok(value);
    }
    // Some seasons report counters as "12.0".
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => Ok(value as i64),
        _ => Err(AppError::invalid_stat_value(bundle.id, name, text)),
    }
}

/// Reads the stat as a decimal, zero when absent.
fn decimal(bundle: &ApiTeamGameStats, side: usize, name: &str) -> Result<f64, AppError> {
    let Some(stat) = extract_stat(bundle, side, name) else {
        return Ok(0.0);
    };
    let text = stat.as_text();
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::invalid_stat_value(bundle.id, name, text)),
    }
}

/// Parses a composite stat (`"7-14"`, `"31:02"`), the zero value when absent.
fn composite<T>(bundle: &ApiTeamGameStats, side: usize, name: &str) -> Result<T, AppError>
where
    T: FromStr + Default,
{
    let Some(stat) = extract_stat(bundle, side, name) else {
        return Ok(T::default());
    };
    let text = stat.as_text();
    text.parse::<T>()
        .map_err(|_| AppError::invalid_stat_value(bundle.id, name, text))
}

fn side_row(bundle: &ApiTeamGameStats, side: usize, week: u32) -> Result<StatsRow, AppError> {
    Ok(StatsRow {
        game_id: bundle.id,
        week_num: week,
        school: bundle.teams[side].school.clone(),
        rush_td: count(bundle, side, "rushingTDs")?,
        pass_td: count(bundle, side, "passingTDs")?,
        rush_attempt: count(bundle, side, "rushingAttempts")?,
        yp_rush: decimal(bundle, side, "yardsPerRushAttempt")?,
        rush_yards: count(bundle, side, "rushingYards")?,
        yp_pass: decimal(bundle, side, "yardsPerPass")?,
        completion_attempts: composite(bundle, side, "completionAttempts")?,
        pass_yards: count(bundle, side, "netPassingYards")?,
        total_yards: count(bundle, side, "totalYards")?,
        turnovers: count(bundle, side, "turnovers")?,
        tfl: decimal(bundle, side, "tacklesForLoss")?,
        sacks: decimal(bundle, side, "sacks")?,
        qb_hurries: count(bundle, side, "qbHurries")?,
        fumbles_lost: count(bundle, side, "fumblesLost")?,
        interceptions: count(bundle, side, "interceptions")?,
        possession_time: composite(bundle, side, "possessionTime")?,
        penalty_yards: composite(bundle, side, "totalPenaltiesYards")?,
        fourth_down_eff: composite(bundle, side, "fourthDownEff")?,
        third_down_eff: composite(bundle, side, "thirdDownEff")?,
        first_downs: count(bundle, side, "firstDowns")?,
        defensive_td: count(bundle, side, "defensiveTDs")?,
        home_bool: u8::from(side == HOME),
    })
}

/// Builds home and away rows for every bundle of one week.
///
/// Each side is checked on its own: a side whose zero-checked counters are
/// all zero is treated as an unreported box score and left out, while the
/// other side of the same game is kept.
pub fn extract_stats_rows(bundles: &[ApiTeamGameStats], week: u32) -> Result<StatsBatch, AppError> {
    let mut batch = StatsBatch {
        rows: Vec::with_capacity(bundles.len() * 2),
        dropped_sides: 0,
    };

    for bundle in bundles {
        for side in [HOME, AWAY] {
            let row = side_row(bundle, side, week)?;
            if row.looks_unreported() {
                warn!(
                    "Dropping empty box score for {} in game {} (week {})",
                    row.school, row.game_id, week
                );
                batch.dropped_sides += 1;
                continue;
            }
            batch.rows.push(row);
        }
    }

    debug!(
        "Extracted {} stats rows from {} games, {} sides dropped",
        batch.rows.len(),
        bundles.len(),
        batch.dropped_sides
    );
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{MadeAttempted, PenaltySummary, PossessionTime};
    use serde_json::json;

    fn bundle(home_stats: serde_json::Value, away_stats: serde_json::Value) -> ApiTeamGameStats {
        serde_json::from_value(json!({
            "id": 401012345,
            "teams": [
                {"school": "Alabama", "homeAway": "home", "stats": home_stats},
                {"school": "Georgia", "homeAway": "away", "stats": away_stats}
            ]
        }))
        .unwrap()
    }

    fn full_side() -> serde_json::Value {
        json!([
            {"category": "rushingTDs", "stat": "3"},
            {"category": "passingTDs", "stat": "2"},
            {"category": "rushingAttempts", "stat": "38"},
            {"category": "yardsPerRushAttempt", "stat": "5.5"},
            {"category": "rushingYards", "stat": "210"},
            {"category": "yardsPerPass", "stat": "8.1"},
            {"category": "completionAttempts", "stat": "18-30"},
            {"category": "netPassingYards", "stat": "245"},
            {"category": "totalYards", "stat": "455"},
            {"category": "turnovers", "stat": "1"},
            {"category": "tacklesForLoss", "stat": "6.5"},
            {"category": "sacks", "stat": "2"},
            {"category": "qbHurries", "stat": "4"},
            {"category": "fumblesLost", "stat": "1"},
            {"category": "interceptions", "stat": "0"},
            {"category": "possessionTime", "stat": "31:02"},
            {"category": "totalPenaltiesYards", "stat": "6-55"},
            {"category": "fourthDownEff", "stat": "1-2"},
            {"category": "thirdDownEff", "stat": "7-14"},
            {"category": "firstDowns", "stat": "24"},
            {"category": "defensiveTDs", "stat": "1"}
        ])
    }

    #[test]
    fn test_full_side_is_parsed() {
        let batch = extract_stats_rows(&[bundle(full_side(), full_side())], 4).unwrap();
        assert_eq!(batch.rows.len(), 2);
        assert_eq!(batch.dropped_sides, 0);

        let home = &batch.rows[0];
        assert_eq!(home.school, "Alabama");
        assert_eq!(home.week_num, 4);
        assert_eq!(home.home_bool, 1);
        assert_eq!(home.rush_td, 3);
        assert_eq!(home.yp_rush, 5.5);
        assert_eq!(home.tfl, 6.5);
        assert_eq!(home.completion_attempts, MadeAttempted::new(18, 30));
        assert_eq!(home.possession_time, PossessionTime::from_seconds(31 * 60 + 2));
        assert_eq!(home.penalty_yards, PenaltySummary::new(6, 55));
        assert_eq!(home.third_down_eff, MadeAttempted::new(7, 14));
        assert_eq!(home.defensive_td, 1);

        let away = &batch.rows[1];
        assert_eq!(away.school, "Georgia");
        assert_eq!(away.home_bool, 0);
    }

    #[test]
    fn test_missing_stat_equals_reported_zero() {
        let with_zero = bundle(
            json!([{"category": "rushingYards", "stat": "120"}, {"category": "sacks", "stat": "0"}]),
            full_side(),
        );
        let without = bundle(json!([{"category": "rushingYards", "stat": "120"}]), full_side());

        let a = extract_stats_rows(&[with_zero], 1).unwrap();
        let b = extract_stats_rows(&[without], 1).unwrap();
        assert_eq!(a.rows[0].sacks, 0.0);
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn test_extract_stat_distinguishes_absent() {
        let game = bundle(json!([{"category": "sacks", "stat": "0"}]), json!([]));
        assert!(extract_stat(&game, HOME, "sacks").is_some());
        assert!(extract_stat(&game, AWAY, "sacks").is_none());
        assert!(extract_stat(&game, 5, "sacks").is_none());
    }

    #[test]
    fn test_empty_side_dropped_independently() {
        let batch = extract_stats_rows(&[bundle(full_side(), json!([]))], 2).unwrap();
        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.rows[0].school, "Alabama");
        assert_eq!(batch.dropped_sides, 1);
    }

    #[test]
    fn test_composites_and_possession_do_not_keep_a_side() {
        let away = json!([
            {"category": "possessionTime", "stat": "28:58"},
            {"category": "thirdDownEff", "stat": "0-9"},
            {"category": "totalPenaltiesYards", "stat": "3-25"}
        ]);
        let batch = extract_stats_rows(&[bundle(full_side(), away)], 2).unwrap();
        assert_eq!(batch.rows.len(), 1);
        assert_eq!(batch.dropped_sides, 1);
    }

    #[test]
    fn test_any_single_zero_checked_stat_keeps_the_side() {
        let names = [
            "rushingTDs",
            "passingTDs",
            "rushingAttempts",
            "yardsPerRushAttempt",
            "rushingYards",
            "yardsPerPass",
            "netPassingYards",
            "totalYards",
            "turnovers",
            "tacklesForLoss",
            "sacks",
            "qbHurries",
            "fumblesLost",
            "interceptions",
            "firstDowns",
            "defensiveTDs",
        ];
        for name in names {
            let away = json!([{"category": name, "stat": "1"}]);
            let batch = extract_stats_rows(&[bundle(full_side(), away)], 1).unwrap();
            assert_eq!(batch.rows.len(), 2, "{name} alone should keep the side");
        }
    }

    #[test]
    fn test_unparsable_value_is_fatal() {
        let home = json!([{"category": "rushingYards", "stat": "lots"}]);
        let result = extract_stats_rows(&[bundle(home, full_side())], 1);
        match result {
            Err(AppError::InvalidStatValue { game_id, stat, value }) => {
                assert_eq!(game_id, 401012345);
                assert_eq!(stat, "rushingYards");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidStatValue, got {other:?}"),
        }
    }

    #[test]
    fn test_oversized_possession_time_is_fatal() {
        let home = json!([{"category": "possessionTime", "stat": "99999999:00"}]);
        let result = extract_stats_rows(&[bundle(home, full_side())], 1);
        assert!(matches!(
            result,
            Err(AppError::InvalidStatValue { ref stat, .. }) if stat == "possessionTime"
        ));
    }

    #[test]
    fn test_counter_reported_as_decimal_whole_number() {
        let home = json!([{"category": "firstDowns", "stat": 21.0}]);
        let batch = extract_stats_rows(&[bundle(home, full_side())], 1).unwrap();
        assert_eq!(batch.rows[0].first_downs, 21);
    }
}

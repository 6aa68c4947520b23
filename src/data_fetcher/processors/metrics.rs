use crate::data_fetcher::models::ApiAdvancedGameStats;
use crate::dataset::MetricsRow;

/// Flattens offense and defense into one row per team per game. Values are
/// rates and averages where zero is meaningful, so nothing is filtered.
pub fn extract_metrics_rows(entries: &[ApiAdvancedGameStats], week: u32) -> Vec<MetricsRow> {
    entries
        .iter()
        .map(|entry| {
            let (offense, defense) = (&entry.offense, &entry.defense);
            MetricsRow {
                game_id: entry.game_id,
                week_num: week,
                school: entry.team.clone(),
                offensive_plays: offense.plays,
                offensive_drives: offense.drives,
                offensive_ppa: offense.ppa,
                offensive_success_rate: offense.success_rate,
                offensive_explosiveness: offense.explosiveness,
                offensive_power_success: offense.power_success,
                offensive_stuff_rate: offense.stuff_rate,
                offensive_line_yards: offense.line_yards,
                offensive_second_level_yards: offense.second_level_yards,
                offensive_open_field_yards: offense.open_field_yards,
                defensive_plays: defense.plays,
                defensive_drives: defense.drives,
                defensive_ppa: defense.ppa,
                defensive_success_rate: defense.success_rate,
                defensive_explosiveness: defense.explosiveness,
                defensive_power_success: defense.power_success,
                defensive_stuff_rate: defense.stuff_rate,
                defensive_line_yards: defense.line_yards,
                defensive_second_level_yards: defense.second_level_yards,
                defensive_open_field_yards: defense.open_field_yards,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::ApiSideMetrics;

    #[test]
    fn test_offense_and_defense_flattened() {
        let entry = ApiAdvancedGameStats {
            game_id: 100,
            team: "Alabama".to_string(),
            opponent: Some("Georgia".to_string()),
            offense: ApiSideMetrics {
                plays: Some(70),
                ppa: Some(0.41),
                success_rate: Some(0.0),
                ..ApiSideMetrics::default()
            },
            defense: ApiSideMetrics {
                plays: Some(58),
                open_field_yards: Some(0.9),
                ..ApiSideMetrics::default()
            },
        };

        let rows = extract_metrics_rows(&[entry], 3);
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.game_id, 100);
        assert_eq!(row.week_num, 3);
        assert_eq!(row.school, "Alabama");
        assert_eq!(row.offensive_plays, Some(70));
        assert_eq!(row.offensive_ppa, Some(0.41));
        assert_eq!(row.offensive_success_rate, Some(0.0));
        assert_eq!(row.defensive_plays, Some(58));
        assert_eq!(row.defensive_open_field_yards, Some(0.9));
        assert_eq!(row.defensive_ppa, None);
    }
}

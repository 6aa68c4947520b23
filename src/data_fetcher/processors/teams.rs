use crate::data_fetcher::models::ApiTeam;
use crate::dataset::TeamRow;

/// Separator used when the logo URL list is flattened into one column.
pub const LOGO_SEPARATOR: &str = ";";

/// One row per team, in payload order.
pub fn extract_team_rows(teams: &[ApiTeam]) -> Vec<TeamRow> {
    teams
        .iter()
        .map(|team| TeamRow {
            id: team.id,
            school: team.school.clone(),
            mascot: team.mascot.clone(),
            abbreviation: team.abbreviation.clone(),
            alt_name_1: team.alt_name_1.clone(),
            alt_name_2: team.alt_name_2.clone(),
            alt_name_3: team.alt_name_3.clone(),
            classification: team.classification.clone(),
            conference: team.conference.clone(),
            division: team.division.clone(),
            color: team.color.clone(),
            alt_color: team.alt_color.clone(),
            logos: team.logos.as_ref().map(|logos| logos.join(LOGO_SEPARATOR)),
            twitter: team.twitter.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_rows_keep_order_and_join_logos() {
        let teams = vec![
            ApiTeam {
                id: 333,
                school: "Alabama".to_string(),
                mascot: Some("Crimson Tide".to_string()),
                logos: Some(vec!["a.png".to_string(), "a-dark.png".to_string()]),
                ..ApiTeam::default()
            },
            ApiTeam {
                id: 61,
                school: "Georgia".to_string(),
                ..ApiTeam::default()
            },
        ];

        let rows = extract_team_rows(&teams);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 333);
        assert_eq!(rows[0].mascot.as_deref(), Some("Crimson Tide"));
        assert_eq!(rows[0].logos.as_deref(), Some("a.png;a-dark.png"));
        assert_eq!(rows[1].school, "Georgia");
        assert_eq!(rows[1].logos, None);
    }

    #[test]
    fn test_empty_payload() {
        assert!(extract_team_rows(&[]).is_empty());
    }
}

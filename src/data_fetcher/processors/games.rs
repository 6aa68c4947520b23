use crate::data_fetcher::models::ApiGame;
use crate::dataset::{GameRow, LineScores};

/// Two rows per game, home first. `week` comes from the caller because the
/// week the games were requested for is the one recorded.
pub fn extract_game_rows(games: &[ApiGame], week: u32) -> Vec<GameRow> {
    let mut rows = Vec::with_capacity(games.len() * 2);
    for game in games {
        rows.push(GameRow {
            game_id: game.id,
            week_num: week,
            game_season: game.season,
            team_id: game.home_id,
            points: game.home_points,
            quarterly_points: game.home_line_scores.clone().map(LineScores::from),
            elo: game.home_pregame_elo,
            home_bool: 1,
        });
        rows.push(GameRow {
            game_id: game.id,
            week_num: week,
            game_season: game.season,
            team_id: game.away_id,
            points: game.away_points,
            quarterly_points: game.away_line_scores.clone().map(LineScores::from),
            elo: game.away_pregame_elo,
            home_bool: 0,
        });
    }
    rows
}

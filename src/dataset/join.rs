//! Reconciles the school-keyed tables (stats, metrics) with the id-keyed
//! game table into one row per team per game.

use super::records::{GameRow, JoinedRow, MetricsRow, StatsRow, TeamRow};
use super::table::Table;
use std::collections::HashMap;
use tracing::{debug, info};

/// School name to team id. The first team listed for a school wins.
fn school_ids(teams: &Table<TeamRow>) -> HashMap<&str, i64> {
    let mut ids = HashMap::new();
    for team in teams.rows() {
        ids.entry(team.school.as_str()).or_insert(team.id);
    }
    ids
}

/// Metrics rows keyed the way stats rows look them up: by resolved team id,
/// or by school for schools the team table does not know.
struct MetricsIndex<'a> {
    by_id: HashMap<(i64, i64), &'a MetricsRow>,
    by_school: HashMap<&'a str, HashMap<i64, &'a MetricsRow>>,
}

impl<'a> MetricsIndex<'a> {
    fn build(metrics: &'a Table<MetricsRow>, ids: &HashMap<&str, i64>) -> Self {
        let mut by_id = HashMap::new();
        let mut by_school: HashMap<&'a str, HashMap<i64, &'a MetricsRow>> = HashMap::new();
        for row in metrics.rows() {
            match ids.get(row.school.as_str()) {
                Some(&id) => {
                    by_id.entry((row.game_id, id)).or_insert(row);
                }
                None => {
                    by_school
                        .entry(row.school.as_str())
                        .or_default()
                        .entry(row.game_id)
                        .or_insert(row);
                }
            }
        }
        Self { by_id, by_school }
    }

    fn lookup(&self, game_id: i64, team_id: Option<i64>, school: &str) -> Option<&'a MetricsRow> {
        match team_id {
            Some(id) => self.by_id.get(&(game_id, id)).copied(),
            None => self
                .by_school
                .get(school)
                .and_then(|games| games.get(&game_id))
                .copied(),
        }
    }
}

/// Left-joins stats to games and metrics through the team table.
///
/// Every stats row yields exactly one output row, in stats order. A school
/// missing from `teams` keeps its box score; its game columns stay empty.
pub fn join_tables(
    stats: &Table<StatsRow>,
    games: &Table<GameRow>,
    metrics: &Table<MetricsRow>,
    teams: &Table<TeamRow>,
) -> Table<JoinedRow> {
    let ids = school_ids(teams);

    let mut game_sides: HashMap<(i64, i64), &GameRow> = HashMap::new();
    for game in games.rows() {
        game_sides.entry((game.game_id, game.team_id)).or_insert(game);
    }

    let metrics_index = MetricsIndex::build(metrics, &ids);

    let mut unresolved = 0usize;
    let mut without_game = 0usize;
    let mut without_metrics = 0usize;

    let rows: Vec<JoinedRow> = stats
        .rows()
        .iter()
        .map(|row| {
            let team_id = ids.get(row.school.as_str()).copied();
            if team_id.is_none() {
                unresolved += 1;
            }
            let game = team_id.and_then(|id| game_sides.get(&(row.game_id, id)).copied());
            if game.is_none() {
                without_game += 1;
            }
            let side_metrics = metrics_index.lookup(row.game_id, team_id, &row.school);
            if side_metrics.is_none() {
                without_metrics += 1;
            }
            JoinedRow::new(row, game, side_metrics)
        })
        .collect();

    debug!(
        "Join: {} schools without team id, {} rows without game, {} rows without metrics",
        unresolved, without_game, without_metrics
    );
    info!("Joined {} team-game rows", rows.len());

    Table::create(rows)
}

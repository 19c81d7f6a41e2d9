use serde::{Deserialize, Serialize};

use crate::model::stats::TeamStatsUpdate;

/// One row of a standings table.
///
/// Rows are returned unsorted by competition criteria; tie-break ordering is left to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStandingDto {
    pub team_id: i32,
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

impl TeamStandingDto {
    fn new(team_id: i32, stats: TeamStatsUpdate) -> Self {
        Self {
            team_id,
            matches_played: stats.matches_played,
            wins: stats.wins,
            draws: stats.draws,
            losses: stats.losses,
            goals_for: stats.goals_for,
            goals_against: stats.goals_against,
            goal_difference: stats.goal_difference,
            points: stats.points,
        }
    }
}

impl From<entity::tournament_team::Model> for TeamStandingDto {
    fn from(model: entity::tournament_team::Model) -> Self {
        Self::new(model.team_id, TeamStatsUpdate::from(&model))
    }
}

impl From<entity::team_phase_stats::Model> for TeamStandingDto {
    fn from(model: entity::team_phase_stats::Model) -> Self {
        Self::new(model.team_id, TeamStatsUpdate::from(&model))
    }
}

/// Mismatch between a team's stored tournament aggregate and the value recomputed from
/// its countable matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsDrift {
    pub team_id: i32,
    pub expected: TeamStatsUpdate,
    /// `None` when a team that played countable matches has no aggregate row
    pub actual: Option<TeamStatsUpdate>,
}

/// Outcome of a full standings recalculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalculationSummary {
    pub tournament_id: i32,
    pub teams_reset: u64,
    pub phase_rows_cleared: u64,
    pub matches_replayed: usize,
}

use std::cmp::Ordering;

use crate::model::stats::TeamStatsUpdate;

const POINTS_FOR_WIN: i32 = 3;
const POINTS_FOR_DRAW: i32 = 1;

/// Contribution of one countable match to one team's aggregate
pub fn calculate_team_stats(team_score: i32, opponent_score: i32) -> TeamStatsUpdate {
    let (wins, draws, losses, points) = match team_score.cmp(&opponent_score) {
        Ordering::Greater => (1, 0, 0, POINTS_FOR_WIN),
        Ordering::Equal => (0, 1, 0, POINTS_FOR_DRAW),
        Ordering::Less => (0, 0, 1, 0),
    };

    TeamStatsUpdate {
        matches_played: 1,
        wins,
        draws,
        losses,
        goals_for: team_score,
        goals_against: opponent_score,
        goal_difference: team_score - opponent_score,
        points,
    }
}


use standings_test_utils::prelude::*;

use crate::model::stats::TeamStatsUpdate;

/// A 2-1 win as seen by the winning team
fn win_delta() -> TeamStatsUpdate {
    TeamStatsUpdate {
        matches_played: 1,
        wins: 1,
        draws: 0,
        losses: 0,
        goals_for: 2,
        goals_against: 1,
        goal_difference: 1,
        points: 3,
    }
}

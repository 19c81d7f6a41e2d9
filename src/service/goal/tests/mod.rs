
use entity::sea_orm_active_enums::MatchStatus;
use standings_test_utils::prelude::*;

use crate::{
    data::{standings::tournament_team::TournamentTeamRepository, tournament_match::MatchRepository},
    error::{standings::StandingsError, Error},
    model::{goal::NewGoal, match_result::MatchResult, stats::TeamStatsUpdate},
    service::{goal::GoalService, lock::LockRegistry, standings::StandingsService},
};

fn new_goal(match_id: i32, team_player_id: i32, team_id: i32, is_own_goal: bool) -> NewGoal {
    NewGoal {
        match_id,
        team_player_id,
        team_id,
        minute: 30,
        is_own_goal,
        is_penalty: false,
    }
}

async fn tournament_stats(
    test: &TestContext,
    tournament_id: i32,
    team_id: i32,
) -> Result<TeamStatsUpdate, TestError> {
    let aggregate = TournamentTeamRepository::new(&test.db)
        .get(tournament_id, team_id)
        .await?
        .unwrap();

    Ok(TeamStatsUpdate::from(&aggregate))
}

async fn scores(test: &TestContext, match_id: i32) -> Result<(Option<i32>, Option<i32>), TestError> {
    let tournament_match = MatchRepository::new(&test.db).get(match_id).await?.unwrap();

    Ok((tournament_match.home_score, tournament_match.away_score))
}

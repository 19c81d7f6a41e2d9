
use entity::sea_orm_active_enums::MatchStatus;
use standings_test_utils::prelude::*;

use crate::{
    data::standings::{
        team_phase_stats::TeamPhaseStatsRepository, tournament_team::TournamentTeamRepository,
    },
    error::{standings::StandingsError, Error},
    model::{stats::TeamStatsUpdate, tournament_match::NewMatch},
    service::{
        lock::LockRegistry, standings::transition::Transition, tournament_match::MatchService,
    },
};

fn new_match(
    tournament_id: i32,
    phase_id: Option<i32>,
    home_team_id: i32,
    away_team_id: i32,
    scores: Option<(i32, i32)>,
    status: MatchStatus,
) -> NewMatch {
    NewMatch {
        tournament_id,
        phase_id,
        home_team_id,
        away_team_id,
        home_score: scores.map(|(home, _)| home),
        away_score: scores.map(|(_, away)| away),
        status,
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

async fn phase_stats(
    test: &TestContext,
    team_id: i32,
    phase_id: i32,
) -> Result<Option<TeamStatsUpdate>, TestError> {
    let aggregate = TeamPhaseStatsRepository::new(&test.db)
        .get(team_id, phase_id)
        .await?;

    Ok(aggregate.as_ref().map(TeamStatsUpdate::from))
}

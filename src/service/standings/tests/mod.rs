
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::DatabaseConnection;
use standings_test_utils::prelude::*;

use crate::{
    data::standings::{
        team_phase_stats::TeamPhaseStatsRepository, tournament_team::TournamentTeamRepository,
    },
    model::{match_result::MatchResult, stats::TeamStatsUpdate},
    service::lock::LockRegistry,
};

fn finalized(
    tournament_id: i32,
    phase_id: Option<i32>,
    home_team_id: i32,
    away_team_id: i32,
    (home, away): (i32, i32),
) -> MatchResult {
    MatchResult {
        tournament_id,
        home_team_id,
        away_team_id,
        home_score: Some(home),
        away_score: Some(away),
        status: MatchStatus::Finalized,
        phase_id,
    }
}

async fn tournament_stats(
    db: &DatabaseConnection,
    tournament_id: i32,
    team_id: i32,
) -> Result<TeamStatsUpdate, TestError> {
    let aggregate = TournamentTeamRepository::new(db)
        .get(tournament_id, team_id)
        .await?
        .unwrap();

    Ok(TeamStatsUpdate::from(&aggregate))
}

async fn phase_stats(
    db: &DatabaseConnection,
    team_id: i32,
    phase_id: i32,
) -> Result<Option<TeamStatsUpdate>, TestError> {
    let aggregate = TeamPhaseStatsRepository::new(db)
        .get(team_id, phase_id)
        .await?;

    Ok(aggregate.as_ref().map(TeamStatsUpdate::from))
}

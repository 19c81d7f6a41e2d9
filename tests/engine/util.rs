use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::DatabaseConnection;
use standings::{
    data::standings::{
        team_phase_stats::TeamPhaseStatsRepository, tournament_team::TournamentTeamRepository,
    },
    model::{match_result::MatchResult, stats::TeamStatsUpdate},
};
use standings_test_utils::TestError;

pub fn finalized(
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

/// Every tournament aggregate of a tournament keyed by team ID
pub async fn tournament_table(
    db: &DatabaseConnection,
    tournament_id: i32,
) -> Result<Vec<(i32, TeamStatsUpdate)>, TestError> {
    let aggregates = TournamentTeamRepository::new(db)
        .get_many_by_tournament_id(tournament_id)
        .await?;

    Ok(aggregates
        .iter()
        .map(|a| (a.team_id, TeamStatsUpdate::from(a)))
        .collect())
}

pub async fn phase_table(
    db: &DatabaseConnection,
    phase_id: i32,
) -> Result<Vec<(i32, TeamStatsUpdate)>, TestError> {
    let aggregates = TeamPhaseStatsRepository::new(db)
        .get_many_by_phase_id(phase_id)
        .await?;

    Ok(aggregates
        .iter()
        .map(|a| (a.team_id, TeamStatsUpdate::from(a)))
        .collect())
}

pub async fn team_stats(
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

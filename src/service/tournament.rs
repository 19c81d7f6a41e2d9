//! Team registration and standings queries.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        phase::PhaseRepository,
        standings::{
            team_phase_stats::TeamPhaseStatsRepository, tournament_team::TournamentTeamRepository,
        },
        tournament::TournamentRepository,
    },
    error::{standings::StandingsError, Error},
    model::standings::TeamStandingDto,
};

pub struct TournamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentService<'a> {
    /// Creates a new instance of [`TournamentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a team into a tournament, creating its zeroed tournament aggregate.
    ///
    /// Registering an already registered team returns the existing aggregate unchanged.
    ///
    /// # Returns
    /// - `Ok(TeamStandingDto)` - The team's tournament aggregate
    /// - `Err(Error::StandingsError(TournamentNotFound))` - The tournament does not exist
    /// - `Err(Error::DbErr)` - A database operation failed, for instance an unknown team ID
    pub async fn register_team(
        &self,
        tournament_id: i32,
        team_id: i32,
    ) -> Result<TeamStandingDto, Error> {
        let txn = self.db.begin().await?;

        if TournamentRepository::new(&txn)
            .get(tournament_id)
            .await?
            .is_none()
        {
            return Err(StandingsError::TournamentNotFound(tournament_id).into());
        }

        let tournament_team_repo = TournamentTeamRepository::new(&txn);
        let aggregate = match tournament_team_repo.get(tournament_id, team_id).await? {
            Some(existing) => existing,
            None => {
                let created = tournament_team_repo.create(tournament_id, team_id).await?;

                tracing::info!(
                    "Registered team ID {} into tournament ID {}",
                    team_id,
                    tournament_id
                );

                created
            }
        };

        txn.commit().await?;

        Ok(aggregate.into())
    }

    /// Tournament-level standings ordered by team ID
    pub async fn get_standings(&self, tournament_id: i32) -> Result<Vec<TeamStandingDto>, Error> {
        if TournamentRepository::new(self.db)
            .get(tournament_id)
            .await?
            .is_none()
        {
            return Err(StandingsError::TournamentNotFound(tournament_id).into());
        }

        let aggregates = TournamentTeamRepository::new(self.db)
            .get_many_by_tournament_id(tournament_id)
            .await?;

        Ok(aggregates.into_iter().map(TeamStandingDto::from).collect())
    }

    /// Phase-level standings ordered by team ID, only teams with a countable match in the phase
    /// have a row
    pub async fn get_phase_standings(&self, phase_id: i32) -> Result<Vec<TeamStandingDto>, Error> {
        if PhaseRepository::new(self.db)
            .get_tournament_id(phase_id)
            .await?
            .is_none()
        {
            return Err(StandingsError::PhaseNotFound(phase_id).into());
        }

        let aggregates = TeamPhaseStatsRepository::new(self.db)
            .get_many_by_phase_id(phase_id)
            .await?;

        Ok(aggregates.into_iter().map(TeamStandingDto::from).collect())
    }
}

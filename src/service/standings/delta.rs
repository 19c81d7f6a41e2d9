use sea_orm::ConnectionTrait;

use crate::{
    data::standings::{
        team_phase_stats::TeamPhaseStatsRepository, tournament_team::TournamentTeamRepository,
    },
    error::{standings::StandingsError, Error},
    service::standings::transition::DeltaWrite,
};

/// The only writer of standings aggregates.
///
/// Every write is a signed increment, the stored values are never read back here.
pub struct DeltaApplicator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeltaApplicator<'a, C> {
    /// Creates a new instance of [`DeltaApplicator`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Applies a delta to a team's tournament aggregate and, when a phase is known, to its
    /// phase aggregate.
    ///
    /// # Arguments
    /// - `write` - Team, tournament, optional phase and the signed delta to add
    ///
    /// # Returns
    /// - `Ok(())` - Both aggregates incremented, a phase aggregate left without matches is
    ///   deleted
    /// - `Err(Error::StandingsError(TeamNotRegistered))` - No tournament aggregate exists for
    ///   the team, nothing was written for this delta
    /// - `Err(Error::DbErr)` - A write failed
    pub async fn apply(&self, write: &DeltaWrite) -> Result<(), Error> {
        let tournament_team_repo = TournamentTeamRepository::new(self.db);

        let result = tournament_team_repo
            .increment(write.tournament_id, write.team_id, &write.delta)
            .await?;

        if result.rows_affected == 0 {
            return Err(StandingsError::TeamNotRegistered {
                tournament_id: write.tournament_id,
                team_id: write.team_id,
            }
            .into());
        }

        if let Some(phase_id) = write.phase_id {
            let team_phase_stats_repo = TeamPhaseStatsRepository::new(self.db);
            team_phase_stats_repo
                .upsert_increment(write.team_id, phase_id, &write.delta)
                .await?;

            // A team without matches in a phase has no row there
            if write.delta.matches_played < 0 {
                team_phase_stats_repo
                    .delete_if_empty(write.team_id, phase_id)
                    .await?;
            }
        }

        Ok(())
    }
}

use std::collections::BTreeMap;

use dioxus_logger::tracing;
use sea_orm::TransactionTrait;

use crate::{
    data::{
        phase::PhaseRepository,
        standings::{
            team_phase_stats::TeamPhaseStatsRepository, tournament_team::TournamentTeamRepository,
        },
        tournament::TournamentRepository,
        tournament_match::MatchRepository,
    },
    error::{standings::StandingsError, Error},
    model::{
        match_result::MatchResult,
        standings::{RecalculationSummary, StandingsDrift},
        stats::TeamStatsUpdate,
    },
    service::standings::{apply_match_result, transition::Contribution, StandingsService},
};

impl<'a> StandingsService<'a> {
    /// Rebuilds every aggregate of a tournament from its countable matches.
    ///
    /// Zeroes the tournament aggregates, deletes the phase aggregates of the tournament's
    /// phases, then replays each countable match as if it had never been counted. Holds the
    /// tournament exclusively so no per-match operation can interleave with the replay.
    ///
    /// # Arguments
    /// - `tournament_id` - ID of the tournament to rebuild
    ///
    /// # Returns
    /// - `Ok(RecalculationSummary)` - Counts of rows reset, cleared and matches replayed
    /// - `Err(Error::StandingsError(TournamentNotFound))` - No such tournament
    /// - `Err(Error::StandingsError(TeamNotRegistered))` - A countable match references a team
    ///   without a tournament aggregate, nothing was committed
    /// - `Err(Error::DbErr)` - A database operation failed, nothing was committed
    pub async fn recalculate_tournament_standings(
        &self,
        tournament_id: i32,
    ) -> Result<RecalculationSummary, Error> {
        let _tournament = self.locks.lock_tournament(tournament_id).await;

        tracing::info!(
            "Recalculating standings for tournament ID {}",
            tournament_id
        );

        let txn = self.db.begin().await?;

        if TournamentRepository::new(&txn)
            .get(tournament_id)
            .await?
            .is_none()
        {
            return Err(StandingsError::TournamentNotFound(tournament_id).into());
        }

        let teams_reset = TournamentTeamRepository::new(&txn)
            .reset_by_tournament_id(tournament_id)
            .await?
            .rows_affected;

        let phase_ids = PhaseRepository::new(&txn)
            .get_ids_by_tournament_id(tournament_id)
            .await?;
        let phase_rows_cleared = TeamPhaseStatsRepository::new(&txn)
            .delete_by_phase_ids(&phase_ids)
            .await?;

        let matches = MatchRepository::new(&txn)
            .get_countable_by_tournament_id(tournament_id)
            .await?;

        for tournament_match in &matches {
            apply_match_result(&txn, None, &MatchResult::from(tournament_match)).await?;
        }

        txn.commit().await?;

        let summary = RecalculationSummary {
            tournament_id,
            teams_reset,
            phase_rows_cleared,
            matches_replayed: matches.len(),
        };

        tracing::info!(
            "Recalculated standings for tournament ID {}: {} teams reset, {} phase rows cleared, {} matches replayed",
            tournament_id,
            summary.teams_reset,
            summary.phase_rows_cleared,
            summary.matches_replayed
        );

        Ok(summary)
    }

    /// Compares stored tournament aggregates against values recomputed from countable matches.
    ///
    /// Performs no writes. Teams whose aggregate matches are omitted from the result.
    ///
    /// # Arguments
    /// - `tournament_id` - ID of the tournament to audit
    ///
    /// # Returns
    /// - `Ok(Vec<StandingsDrift>)` - Drifted teams ordered by team ID, empty when consistent
    /// - `Err(Error::StandingsError(TournamentNotFound))` - No such tournament
    /// - `Err(Error::DbErr)` - A database query failed
    pub async fn audit_tournament_standings(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<StandingsDrift>, Error> {
        let _tournament = self.locks.lock_tournament(tournament_id).await;

        if TournamentRepository::new(self.db)
            .get(tournament_id)
            .await?
            .is_none()
        {
            return Err(StandingsError::TournamentNotFound(tournament_id).into());
        }

        let stored = TournamentTeamRepository::new(self.db)
            .get_many_by_tournament_id(tournament_id)
            .await?;
        let matches = MatchRepository::new(self.db)
            .get_countable_by_tournament_id(tournament_id)
            .await?;

        let mut expected: BTreeMap<i32, TeamStatsUpdate> = stored
            .iter()
            .map(|aggregate| (aggregate.team_id, TeamStatsUpdate::default()))
            .collect();

        for contribution in matches
            .iter()
            .filter_map(|m| Contribution::of(&MatchResult::from(m)))
        {
            *expected.entry(contribution.home_team_id).or_default() += contribution.home;
            *expected.entry(contribution.away_team_id).or_default() += contribution.away;
        }

        let actual: BTreeMap<i32, TeamStatsUpdate> = stored
            .iter()
            .map(|aggregate| (aggregate.team_id, TeamStatsUpdate::from(aggregate)))
            .collect();

        let drift: Vec<StandingsDrift> = expected
            .into_iter()
            .filter_map(|(team_id, expected)| {
                let actual = actual.get(&team_id).copied();

                (actual != Some(expected)).then_some(StandingsDrift {
                    team_id,
                    expected,
                    actual,
                })
            })
            .collect();

        if drift.is_empty() {
            tracing::info!(
                "Standings for tournament ID {} are consistent with {} countable matches",
                tournament_id,
                matches.len()
            );
        } else {
            tracing::warn!(
                "Standings for tournament ID {} drifted for {} teams: {:?}",
                tournament_id,
                drift.len(),
                drift.iter().map(|d| d.team_id).collect::<Vec<_>>()
            );
        }

        Ok(drift)
    }
}

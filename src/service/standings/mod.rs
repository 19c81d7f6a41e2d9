//! Standings consistency engine.
//!
//! Keeps tournament and phase aggregates equal to the sum of every countable match by
//! translating each change of a match into signed deltas. [`apply_match_result`] is the single
//! entry point for per-match changes; recalculation and audit live in [`recalculate`].

pub mod calculate;
pub mod delta;
pub mod recalculate;
pub mod transition;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    error::Error,
    model::match_result::MatchResult,
    service::{
        lock::LockRegistry,
        standings::{delta::DeltaApplicator, transition::Transition},
    },
};

/// Service applying match transitions and repairing tournament standings.
pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a LockRegistry,
}

impl<'a> StandingsService<'a> {
    /// Creates a new instance of [`StandingsService`]
    pub fn new(db: &'a DatabaseConnection, locks: &'a LockRegistry) -> Self {
        Self { db, locks }
    }

    /// Moves the aggregates from `previous` to `next` as one unit of work.
    ///
    /// For callers that persisted a match change themselves. The caller must hold the
    /// snapshots under a serialised update of the match; only the tournament is locked here
    /// to exclude a concurrent recalculation.
    ///
    /// # Arguments
    /// - `previous` - Snapshot before the change, `None` if the match never counted
    /// - `next` - Snapshot after the change
    ///
    /// # Returns
    /// - `Ok(Transition)` - The transition that was applied and committed
    /// - `Err(Error::StandingsError)` - A team involved has no tournament aggregate
    /// - `Err(Error::DbErr)` - A write failed, no delta was committed
    pub async fn apply_match_result(
        &self,
        previous: Option<&MatchResult>,
        next: &MatchResult,
    ) -> Result<Transition, Error> {
        let _tournament = self.locks.read_tournament(next.tournament_id).await;

        let txn = self.db.begin().await?;
        let transition = apply_match_result(&txn, previous, next).await?;
        txn.commit().await?;

        Ok(transition)
    }
}

/// Resolves the transition between two snapshots of one match and writes its deltas.
///
/// Runs on the provided connection so orchestrators can include it in their own transaction.
/// All-zero deltas are skipped.
pub async fn apply_match_result<C: ConnectionTrait>(
    db: &C,
    previous: Option<&MatchResult>,
    next: &MatchResult,
) -> Result<Transition, Error> {
    let transition = Transition::resolve(previous, next);
    let applicator = DeltaApplicator::new(db);

    let mut applied = 0;
    for write in transition.writes().iter().filter(|w| !w.delta.is_zero()) {
        applicator.apply(write).await?;
        applied += 1;
    }

    tracing::debug!(
        "Applied {} transition for teams {} vs {} in tournament ID {} with {} delta writes",
        transition.kind(),
        next.home_team_id,
        next.away_team_id,
        next.tournament_id,
        applied
    );

    Ok(transition)
}

//! Match edits that affect standings.
//!
//! Every edit snapshots the match before and after the write and hands both snapshots to the
//! transition resolver inside the same transaction.

#[cfg(test)]
mod tests;

use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{phase::PhaseRepository, tournament_match::MatchRepository},
    error::{standings::StandingsError, Error},
    model::{
        match_result::MatchResult,
        tournament_match::{MatchEdit, NewMatch},
    },
    service::{
        lock::LockRegistry,
        standings::{apply_match_result, transition::Transition},
    },
};

/// Service for creating, editing and deleting matches.
pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a LockRegistry,
}

impl<'a> MatchService<'a> {
    /// Creates a new instance of [`MatchService`]
    pub fn new(db: &'a DatabaseConnection, locks: &'a LockRegistry) -> Self {
        Self { db, locks }
    }

    /// Creates a match, counting it immediately if it is created already finalized.
    ///
    /// # Arguments
    /// - `new_match` - Match to create
    ///
    /// # Returns
    /// - `Ok(tournament_match::Model)` - The created match
    /// - `Err(Error::StandingsError(TeamNotRegistered))` - The match counts but a team has no
    ///   tournament aggregate, nothing was committed
    /// - `Err(Error::StandingsError(PhaseNotInTournament))` - The phase belongs to another
    ///   tournament
    /// - `Err(Error::DbErr)` - A database operation failed, nothing was committed
    pub async fn create_match(
        &self,
        new_match: NewMatch,
    ) -> Result<entity::tournament_match::Model, Error> {
        let _tournament = self.locks.read_tournament(new_match.tournament_id).await;

        let txn = self.db.begin().await?;
        ensure_phase_in_tournament(&txn, new_match.tournament_id, new_match.phase_id).await?;
        let tournament_match = MatchRepository::new(&txn).create(new_match).await?;
        apply_match_result(&txn, None, &MatchResult::from(&tournament_match)).await?;
        txn.commit().await?;

        Ok(tournament_match)
    }

    pub async fn update_status(
        &self,
        match_id: i32,
        status: MatchStatus,
    ) -> Result<(entity::tournament_match::Model, Transition), Error> {
        self.edit(match_id, MatchEdit::Status(status)).await
    }

    /// Moves a match into another phase, or out of any phase with `None`
    pub async fn update_phase(
        &self,
        match_id: i32,
        phase_id: Option<i32>,
    ) -> Result<(entity::tournament_match::Model, Transition), Error> {
        self.edit(match_id, MatchEdit::Phase(phase_id)).await
    }

    /// Overwrites both scores directly, bypassing goal records
    pub async fn set_scores(
        &self,
        match_id: i32,
        home: Option<i32>,
        away: Option<i32>,
    ) -> Result<(entity::tournament_match::Model, Transition), Error> {
        self.edit(match_id, MatchEdit::Scores { home, away }).await
    }

    /// Deletes a match and removes whatever it contributed to standings.
    ///
    /// Goals of the match are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(Transition)` - Transition applied to retract the match
    /// - `Err(Error::StandingsError(MatchNotFound))` - The match does not exist
    /// - `Err(Error::DbErr)` - A database operation failed, nothing was committed
    pub async fn delete_match(&self, match_id: i32) -> Result<Transition, Error> {
        let tournament_id = self.tournament_id(match_id).await?;

        let _guard = self.locks.lock_match(tournament_id, match_id).await;
        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        let previous = match_repo
            .get(match_id)
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;
        let previous = MatchResult::from(&previous);

        let transition = apply_match_result(&txn, Some(&previous), &previous.retracted()).await?;
        match_repo.delete(match_id).await?;

        txn.commit().await?;

        Ok(transition)
    }

    /// Applies one edit as a unit of work under the match lock
    async fn edit(
        &self,
        match_id: i32,
        edit: MatchEdit,
    ) -> Result<(entity::tournament_match::Model, Transition), Error> {
        let tournament_id = self.tournament_id(match_id).await?;

        let _guard = self.locks.lock_match(tournament_id, match_id).await;
        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        let previous = match_repo
            .get(match_id)
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;
        if let MatchEdit::Phase(phase_id) = edit {
            ensure_phase_in_tournament(&txn, previous.tournament_id, phase_id).await?;
        }
        let next = match_repo
            .update(match_id, edit)
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        let transition = apply_match_result(
            &txn,
            Some(&MatchResult::from(&previous)),
            &MatchResult::from(&next),
        )
        .await?;

        txn.commit().await?;

        Ok((next, transition))
    }

    async fn tournament_id(&self, match_id: i32) -> Result<i32, Error> {
        let tournament_id = MatchRepository::new(self.db)
            .get_tournament_id(match_id)
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        Ok(tournament_id)
    }
}

/// Rejects a phase that is missing or belongs to another tournament
async fn ensure_phase_in_tournament<C: ConnectionTrait>(
    db: &C,
    tournament_id: i32,
    phase_id: Option<i32>,
) -> Result<(), Error> {
    let Some(phase_id) = phase_id else {
        return Ok(());
    };

    let owner = PhaseRepository::new(db)
        .get_tournament_id(phase_id)
        .await?
        .ok_or(StandingsError::PhaseNotFound(phase_id))?;
    if owner != tournament_id {
        return Err(StandingsError::PhaseNotInTournament {
            tournament_id,
            phase_id,
        }
        .into());
    }

    Ok(())
}

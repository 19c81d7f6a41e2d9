//! Goal orchestration.
//!
//! Adding or removing a goal changes the match scoreboard, which in turn may change what the
//! match contributes to standings. Both operations run as one unit of work under the match
//! lock: snapshot, mutate goals, persist the new score, snapshot again, apply the transition.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{goal::GoalRepository, tournament_match::MatchRepository},
    error::{standings::StandingsError, Error},
    model::{
        goal::{NewGoal, ScoreSide},
        match_result::MatchResult,
        tournament_match::MatchEdit,
    },
    service::{lock::LockRegistry, standings::apply_match_result},
};

/// Service for recording and retracting goals.
pub struct GoalService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a LockRegistry,
}

impl<'a> GoalService<'a> {
    /// Creates a new instance of [`GoalService`]
    pub fn new(db: &'a DatabaseConnection, locks: &'a LockRegistry) -> Self {
        Self { db, locks }
    }

    /// Records a goal and moves the match's standings contribution to the new scoreline.
    ///
    /// A regular goal increments the scoring team's side, an own goal increments the
    /// opponent's side.
    ///
    /// # Arguments
    /// - `new_goal` - The scoring event to record
    ///
    /// # Returns
    /// - `Ok(goal::Model)` - The persisted goal
    /// - `Err(Error::StandingsError(MatchNotFound))` - The match does not exist
    /// - `Err(Error::StandingsError(TeamNotInMatch))` - The scoring team plays on neither side
    /// - `Err(Error::StandingsError(TeamNotRegistered))` - A team of the match has no
    ///   tournament aggregate, nothing was committed
    /// - `Err(Error::DbErr)` - A database operation failed, nothing was committed
    pub async fn add_goal(&self, new_goal: NewGoal) -> Result<entity::goal::Model, Error> {
        let match_id = new_goal.match_id;
        let tournament_id = MatchRepository::new(self.db)
            .get_tournament_id(match_id)
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        let _guard = self.locks.lock_match(tournament_id, match_id).await;
        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        let previous = match_repo
            .get(match_id)
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        let side = ScoreSide::credited(
            previous.home_team_id,
            previous.away_team_id,
            new_goal.team_id,
            new_goal.is_own_goal,
        )
        .ok_or(StandingsError::TeamNotInMatch {
            match_id,
            team_id: new_goal.team_id,
        })?;

        let goal = GoalRepository::new(&txn).create(&new_goal).await?;

        let (home, away) = side.increment(previous.home_score, previous.away_score);
        let next = match_repo
            .update(match_id, MatchEdit::Scores { home, away })
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        apply_match_result(
            &txn,
            Some(&MatchResult::from(&previous)),
            &MatchResult::from(&next),
        )
        .await?;

        txn.commit().await?;

        Ok(goal)
    }

    /// Removes a goal and moves the match's standings contribution to the new scoreline.
    ///
    /// The credited side is resolved the same way as when the goal was added. A score that is
    /// already zero stays at zero, which indicates the stored score had drifted from its goals.
    ///
    /// # Arguments
    /// - `goal_id` - ID of the goal to remove
    ///
    /// # Returns
    /// - `Ok(())` - Goal removed and standings updated
    /// - `Err(Error::StandingsError(GoalNotFound))` - The goal does not exist
    /// - `Err(Error::StandingsError(MatchNotFound))` - The goal's match no longer exists
    /// - `Err(Error::StandingsError(TeamNotInMatch))` - The goal's team plays on neither side
    /// - `Err(Error::DbErr)` - A database operation failed, nothing was committed
    pub async fn delete_goal(&self, goal_id: i32) -> Result<(), Error> {
        let goal = GoalRepository::new(self.db)
            .get(goal_id)
            .await?
            .ok_or(StandingsError::GoalNotFound(goal_id))?;
        let match_id = goal.match_id;
        let tournament_id = MatchRepository::new(self.db)
            .get_tournament_id(match_id)
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        let _guard = self.locks.lock_match(tournament_id, match_id).await;
        let txn = self.db.begin().await?;
        let goal_repo = GoalRepository::new(&txn);
        let match_repo = MatchRepository::new(&txn);

        // Re-read under the lock, a concurrent delete may have won the race
        let goal = goal_repo
            .get(goal_id)
            .await?
            .ok_or(StandingsError::GoalNotFound(goal_id))?;
        let previous = match_repo
            .get(match_id)
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        let side = ScoreSide::credited(
            previous.home_team_id,
            previous.away_team_id,
            goal.team_id,
            goal.is_own_goal,
        )
        .ok_or(StandingsError::TeamNotInMatch {
            match_id,
            team_id: goal.team_id,
        })?;

        goal_repo.delete(goal_id).await?;

        let ((home, away), clamped) = side.decrement(previous.home_score, previous.away_score);
        if clamped {
            tracing::warn!(
                "Removing goal ID {} would drop the {:?} score of match ID {} below zero, keeping it at 0",
                goal_id,
                side,
                match_id
            );
        }

        let next = match_repo
            .update(match_id, MatchEdit::Scores { home, away })
            .await?
            .ok_or(StandingsError::MatchNotFound(match_id))?;

        apply_match_result(
            &txn,
            Some(&MatchResult::from(&previous)),
            &MatchResult::from(&next),
        )
        .await?;

        txn.commit().await?;

        Ok(())
    }
}

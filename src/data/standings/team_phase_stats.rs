use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::stats::TeamStatsUpdate;

use entity::{prelude::TeamPhaseStats, team_phase_stats::Column};

pub struct TeamPhaseStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamPhaseStatsRepository<'a, C> {
    /// Creates a new instance of [`TeamPhaseStatsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a signed delta to a team's phase aggregate, creating the row on first write
    ///
    /// Runs as one `INSERT ... ON CONFLICT (team_id, phase_id) DO UPDATE` statement where the
    /// update adds the delta to the stored row, so the create-or-increment is atomic.
    pub async fn upsert_increment(
        &self,
        team_id: i32,
        phase_id: i32,
        delta: &TeamStatsUpdate,
    ) -> Result<u64, DbErr> {
        let aggregate = entity::team_phase_stats::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            phase_id: ActiveValue::Set(phase_id),
            matches_played: ActiveValue::Set(delta.matches_played),
            wins: ActiveValue::Set(delta.wins),
            draws: ActiveValue::Set(delta.draws),
            losses: ActiveValue::Set(delta.losses),
            goals_for: ActiveValue::Set(delta.goals_for),
            goals_against: ActiveValue::Set(delta.goals_against),
            goal_difference: ActiveValue::Set(delta.goal_difference),
            points: ActiveValue::Set(delta.points),
        };

        TeamPhaseStats::insert(aggregate)
            .on_conflict(
                OnConflict::columns([Column::TeamId, Column::PhaseId])
                    .value(
                        Column::MatchesPlayed,
                        Expr::col((TeamPhaseStats, Column::MatchesPlayed))
                            .add(delta.matches_played),
                    )
                    .value(
                        Column::Wins,
                        Expr::col((TeamPhaseStats, Column::Wins)).add(delta.wins),
                    )
                    .value(
                        Column::Draws,
                        Expr::col((TeamPhaseStats, Column::Draws)).add(delta.draws),
                    )
                    .value(
                        Column::Losses,
                        Expr::col((TeamPhaseStats, Column::Losses)).add(delta.losses),
                    )
                    .value(
                        Column::GoalsFor,
                        Expr::col((TeamPhaseStats, Column::GoalsFor)).add(delta.goals_for),
                    )
                    .value(
                        Column::GoalsAgainst,
                        Expr::col((TeamPhaseStats, Column::GoalsAgainst)).add(delta.goals_against),
                    )
                    .value(
                        Column::GoalDifference,
                        Expr::col((TeamPhaseStats, Column::GoalDifference))
                            .add(delta.goal_difference),
                    )
                    .value(
                        Column::Points,
                        Expr::col((TeamPhaseStats, Column::Points)).add(delta.points),
                    )
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Deletes a team's phase aggregate once it no longer counts any match
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_if_empty(&self, team_id: i32, phase_id: i32) -> Result<u64, DbErr> {
        let result = TeamPhaseStats::delete_many()
            .filter(Column::TeamId.eq(team_id))
            .filter(Column::PhaseId.eq(phase_id))
            .filter(Column::MatchesPlayed.eq(0))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn get(
        &self,
        team_id: i32,
        phase_id: i32,
    ) -> Result<Option<entity::team_phase_stats::Model>, DbErr> {
        TeamPhaseStats::find_by_id((team_id, phase_id))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_phase_id(
        &self,
        phase_id: i32,
    ) -> Result<Vec<entity::team_phase_stats::Model>, DbErr> {
        TeamPhaseStats::find()
            .filter(Column::PhaseId.eq(phase_id))
            .order_by_asc(Column::TeamId)
            .all(self.db)
            .await
    }

    /// Deletes all phase aggregates for the provided phases
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_by_phase_ids(&self, phase_ids: &[i32]) -> Result<u64, DbErr> {
        if phase_ids.is_empty() {
            return Ok(0);
        }

        let result = TeamPhaseStats::delete_many()
            .filter(Column::PhaseId.is_in(phase_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    UpdateResult,
};

use crate::model::stats::TeamStatsUpdate;

use entity::tournament_team::Column;

pub struct TournamentTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TournamentTeamRepository<'a, C> {
    /// Creates a new instance of [`TournamentTeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a zeroed aggregate for a team registered into a tournament
    pub async fn create(
        &self,
        tournament_id: i32,
        team_id: i32,
    ) -> Result<entity::tournament_team::Model, DbErr> {
        let aggregate = entity::tournament_team::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            team_id: ActiveValue::Set(team_id),
            matches_played: ActiveValue::Set(0),
            wins: ActiveValue::Set(0),
            draws: ActiveValue::Set(0),
            losses: ActiveValue::Set(0),
            goals_for: ActiveValue::Set(0),
            goals_against: ActiveValue::Set(0),
            goal_difference: ActiveValue::Set(0),
            points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::TournamentTeam::insert(aggregate)
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get(
        &self,
        tournament_id: i32,
        team_id: i32,
    ) -> Result<Option<entity::tournament_team::Model>, DbErr> {
        entity::prelude::TournamentTeam::find_by_id((tournament_id, team_id))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_tournament_id(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<entity::tournament_team::Model>, DbErr> {
        entity::prelude::TournamentTeam::find()
            .filter(Column::TournamentId.eq(tournament_id))
            .order_by_asc(Column::TeamId)
            .all(self.db)
            .await
    }

    /// Atomically adds a signed delta to every stat column of a team's aggregate
    ///
    /// The increment is a single `UPDATE` so concurrent deltas for the same team commute.
    /// Zero [`UpdateResult::rows_affected`] means the team is not registered in the tournament.
    pub async fn increment(
        &self,
        tournament_id: i32,
        team_id: i32,
        delta: &TeamStatsUpdate,
    ) -> Result<UpdateResult, DbErr> {
        entity::prelude::TournamentTeam::update_many()
            .col_expr(
                Column::MatchesPlayed,
                Expr::col(Column::MatchesPlayed).add(delta.matches_played),
            )
            .col_expr(Column::Wins, Expr::col(Column::Wins).add(delta.wins))
            .col_expr(Column::Draws, Expr::col(Column::Draws).add(delta.draws))
            .col_expr(Column::Losses, Expr::col(Column::Losses).add(delta.losses))
            .col_expr(Column::GoalsFor, Expr::col(Column::GoalsFor).add(delta.goals_for))
            .col_expr(
                Column::GoalsAgainst,
                Expr::col(Column::GoalsAgainst).add(delta.goals_against),
            )
            .col_expr(
                Column::GoalDifference,
                Expr::col(Column::GoalDifference).add(delta.goal_difference),
            )
            .col_expr(Column::Points, Expr::col(Column::Points).add(delta.points))
            .filter(Column::TournamentId.eq(tournament_id))
            .filter(Column::TeamId.eq(team_id))
            .exec(self.db)
            .await
    }

    /// Sets every stat column to zero for all teams of a tournament
    pub async fn reset_by_tournament_id(&self, tournament_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::TournamentTeam::update_many()
            .col_expr(Column::MatchesPlayed, Expr::value(0))
            .col_expr(Column::Wins, Expr::value(0))
            .col_expr(Column::Draws, Expr::value(0))
            .col_expr(Column::Losses, Expr::value(0))
            .col_expr(Column::GoalsFor, Expr::value(0))
            .col_expr(Column::GoalsAgainst, Expr::value(0))
            .col_expr(Column::GoalDifference, Expr::value(0))
            .col_expr(Column::Points, Expr::value(0))
            .filter(Column::TournamentId.eq(tournament_id))
            .exec(self.db)
            .await
    }
}

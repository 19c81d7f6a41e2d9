use chrono::Utc;
use sea_orm::{sea_query::Expr, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn tournament<'a>(&'a self) -> TournamentFixtures<'a> {
        TournamentFixtures { setup: self }
    }
}

pub struct TournamentFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> TournamentFixtures<'a> {
    pub async fn insert_tournament(&self) -> Result<entity::tournament::Model, TestError> {
        Ok(
            entity::prelude::Tournament::insert(entity::tournament::ActiveModel {
                name: ActiveValue::Set("Copa de Prueba".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_team(&self, name: &str) -> Result<entity::team::Model, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_player(
        &self,
        team_id: i32,
    ) -> Result<entity::team_player::Model, TestError> {
        Ok(
            entity::prelude::TeamPlayer::insert(entity::team_player::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                name: ActiveValue::Set(format!("Player of team {}", team_id)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_phase(
        &self,
        tournament_id: i32,
        position: i32,
    ) -> Result<entity::phase::Model, TestError> {
        Ok(entity::prelude::Phase::insert(entity::phase::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            name: ActiveValue::Set(format!("Phase {}", position)),
            position: ActiveValue::Set(position),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Registers a team into a tournament with a zeroed aggregate
    pub async fn register_team(
        &self,
        tournament_id: i32,
        team_id: i32,
    ) -> Result<entity::tournament_team::Model, TestError> {
        Ok(
            entity::prelude::TournamentTeam::insert(entity::tournament_team::ActiveModel {
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
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a team and registers it into the tournament
    pub async fn insert_registered_team(
        &self,
        tournament_id: i32,
    ) -> Result<entity::team::Model, TestError> {
        let team = self.insert_team("Equipo").await?;
        self.register_team(tournament_id, team.id).await?;

        Ok(team)
    }

    /// Inserts a tournament with two registered teams
    pub async fn insert_tournament_with_teams(
        &self,
    ) -> Result<
        (
            entity::tournament::Model,
            entity::team::Model,
            entity::team::Model,
        ),
        TestError,
    > {
        let tournament = self.insert_tournament().await?;
        let home = self.insert_registered_team(tournament.id).await?;
        let away = self.insert_registered_team(tournament.id).await?;

        Ok((tournament, home, away))
    }

    /// Overwrites a team's stored points, leaving the aggregate out of sync with its matches
    pub async fn overwrite_points(
        &self,
        tournament_id: i32,
        team_id: i32,
        points: i32,
    ) -> Result<(), TestError> {
        entity::prelude::TournamentTeam::update_many()
            .col_expr(entity::tournament_team::Column::Points, Expr::value(points))
            .filter(entity::tournament_team::Column::TournamentId.eq(tournament_id))
            .filter(entity::tournament_team::Column::TeamId.eq(team_id))
            .exec(&self.setup.db)
            .await?;

        Ok(())
    }
}

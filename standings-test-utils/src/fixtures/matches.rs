use chrono::Utc;
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn matches<'a>(&'a self) -> MatchFixtures<'a> {
        MatchFixtures { setup: self }
    }
}

pub struct MatchFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> MatchFixtures<'a> {
    /// Inserts a match row directly, without touching any standings aggregate
    pub async fn insert_match(
        &self,
        tournament_id: i32,
        phase_id: Option<i32>,
        home_team_id: i32,
        away_team_id: i32,
        scores: Option<(i32, i32)>,
        status: MatchStatus,
    ) -> Result<entity::tournament_match::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::TournamentMatch::insert(
            entity::tournament_match::ActiveModel {
                tournament_id: ActiveValue::Set(tournament_id),
                phase_id: ActiveValue::Set(phase_id),
                home_team_id: ActiveValue::Set(home_team_id),
                away_team_id: ActiveValue::Set(away_team_id),
                home_score: ActiveValue::Set(scores.map(|(home, _)| home)),
                away_score: ActiveValue::Set(scores.map(|(_, away)| away)),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Inserts a goal row directly, leaving the match score untouched
    pub async fn insert_goal(
        &self,
        match_id: i32,
        team_player_id: i32,
        team_id: i32,
        is_own_goal: bool,
    ) -> Result<entity::goal::Model, TestError> {
        Ok(entity::prelude::Goal::insert(entity::goal::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            team_player_id: ActiveValue::Set(team_player_id),
            team_id: ActiveValue::Set(team_id),
            minute: ActiveValue::Set(10),
            is_own_goal: ActiveValue::Set(is_own_goal),
            is_penalty: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}

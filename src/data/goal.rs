use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait};

use crate::model::goal::NewGoal;

pub struct GoalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GoalRepository<'a, C> {
    /// Creates a new instance of [`GoalRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, goal: &NewGoal) -> Result<entity::goal::Model, DbErr> {
        let goal = entity::goal::ActiveModel {
            match_id: ActiveValue::Set(goal.match_id),
            team_player_id: ActiveValue::Set(goal.team_player_id),
            team_id: ActiveValue::Set(goal.team_id),
            minute: ActiveValue::Set(goal.minute),
            is_own_goal: ActiveValue::Set(goal.is_own_goal),
            is_penalty: ActiveValue::Set(goal.is_penalty),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        goal.insert(self.db).await
    }

    pub async fn get(&self, goal_id: i32) -> Result<Option<entity::goal::Model>, DbErr> {
        entity::prelude::Goal::find_by_id(goal_id).one(self.db).await
    }

    /// Deletes a goal
    ///
    /// Returns OK regardless of the goal existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, goal_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Goal::delete_by_id(goal_id)
            .exec(self.db)
            .await
    }
}

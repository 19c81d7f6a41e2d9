use chrono::Utc;
use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::tournament_match::{MatchEdit, NewMatch};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, new_match: NewMatch) -> Result<entity::tournament_match::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let tournament_match = entity::tournament_match::ActiveModel {
            tournament_id: ActiveValue::Set(new_match.tournament_id),
            phase_id: ActiveValue::Set(new_match.phase_id),
            home_team_id: ActiveValue::Set(new_match.home_team_id),
            away_team_id: ActiveValue::Set(new_match.away_team_id),
            home_score: ActiveValue::Set(new_match.home_score),
            away_score: ActiveValue::Set(new_match.away_score),
            status: ActiveValue::Set(new_match.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        tournament_match.insert(self.db).await
    }

    pub async fn get(&self, match_id: i32) -> Result<Option<entity::tournament_match::Model>, DbErr> {
        entity::prelude::TournamentMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }

    /// Returns only the tournament ID of a match, used to pick locks before a unit of work
    pub async fn get_tournament_id(&self, match_id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::TournamentMatch::find_by_id(match_id)
            .select_only()
            .column(entity::tournament_match::Column::TournamentId)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Applies an edit to a match
    ///
    /// Returns `Ok(None)` if the match does not exist.
    pub async fn update(
        &self,
        match_id: i32,
        edit: MatchEdit,
    ) -> Result<Option<entity::tournament_match::Model>, DbErr> {
        let tournament_match = match entity::prelude::TournamentMatch::find_by_id(match_id)
            .one(self.db)
            .await?
        {
            Some(tournament_match) => tournament_match,
            None => return Ok(None),
        };

        let mut match_am = tournament_match.into_active_model();

        match edit {
            MatchEdit::Status(status) => match_am.status = ActiveValue::Set(status),
            MatchEdit::Phase(phase_id) => match_am.phase_id = ActiveValue::Set(phase_id),
            MatchEdit::Scores { home, away } => {
                match_am.home_score = ActiveValue::Set(home);
                match_am.away_score = ActiveValue::Set(away);
            }
        }
        match_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let tournament_match = match_am.update(self.db).await?;

        Ok(Some(tournament_match))
    }

    /// Deletes a match, its goals are removed by the foreign key cascade
    ///
    /// Returns OK regardless of the match existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TournamentMatch::delete_by_id(match_id)
            .exec(self.db)
            .await
    }

    /// Returns every match of a tournament that currently counts towards standings
    pub async fn get_countable_by_tournament_id(
        &self,
        tournament_id: i32,
    ) -> Result<Vec<entity::tournament_match::Model>, DbErr> {
        entity::prelude::TournamentMatch::find()
            .filter(entity::tournament_match::Column::TournamentId.eq(tournament_id))
            .filter(entity::tournament_match::Column::Status.eq(MatchStatus::Finalized))
            .filter(entity::tournament_match::Column::HomeScore.is_not_null())
            .filter(entity::tournament_match::Column::AwayScore.is_not_null())
            .order_by_asc(entity::tournament_match::Column::Id)
            .all(self.db)
            .await
    }
}

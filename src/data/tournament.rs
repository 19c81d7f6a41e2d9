use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

pub struct TournamentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TournamentRepository<'a, C> {
    /// Creates a new instance of [`TournamentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, tournament_id: i32) -> Result<Option<entity::tournament::Model>, DbErr> {
        entity::prelude::Tournament::find_by_id(tournament_id)
            .one(self.db)
            .await
    }
}

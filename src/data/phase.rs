use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

pub struct PhaseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PhaseRepository<'a, C> {
    /// Creates a new instance of [`PhaseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the IDs of every phase belonging to a tournament
    pub async fn get_ids_by_tournament_id(&self, tournament_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Phase::find()
            .select_only()
            .column(entity::phase::Column::Id)
            .filter(entity::phase::Column::TournamentId.eq(tournament_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Returns the tournament a phase belongs to, `None` if the phase does not exist
    pub async fn get_tournament_id(&self, phase_id: i32) -> Result<Option<i32>, DbErr> {
        entity::prelude::Phase::find_by_id(phase_id)
            .select_only()
            .column(entity::phase::Column::TournamentId)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_player::Entity")]
    TeamPlayer,
    #[sea_orm(has_many = "super::tournament_team::Entity")]
    TournamentTeam,
    #[sea_orm(has_many = "super::team_phase_stats::Entity")]
    TeamPhaseStats,
}

impl Related<super::team_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamPlayer.def()
    }
}

impl Related<super::tournament_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentTeam.def()
    }
}

impl Related<super::team_phase_stats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamPhaseStats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tournament")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::phase::Entity")]
    Phase,
    #[sea_orm(has_many = "super::tournament_match::Entity")]
    TournamentMatch,
    #[sea_orm(has_many = "super::tournament_team::Entity")]
    TournamentTeam,
}

impl Related<super::phase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phase.def()
    }
}

impl Related<super::tournament_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentMatch.def()
    }
}

impl Related<super::tournament_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentTeam.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

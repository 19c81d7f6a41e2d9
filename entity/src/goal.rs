use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "goal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub team_player_id: i32,
    /// Team of the scoring player, not necessarily the team credited on the scoreboard
    pub team_id: i32,
    pub minute: i32,
    pub is_own_goal: bool,
    pub is_penalty: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tournament_match::Entity",
        from = "Column::MatchId",
        to = "super::tournament_match::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TournamentMatch,
    #[sea_orm(
        belongs_to = "super::team_player::Entity",
        from = "Column::TeamPlayerId",
        to = "super::team_player::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TeamPlayer,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Team,
}

impl Related<super::tournament_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentMatch.def()
    }
}

impl Related<super::team_player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamPlayer.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

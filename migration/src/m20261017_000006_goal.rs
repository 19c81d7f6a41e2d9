use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261017_000002_team::Team, m20261017_000003_team_player::TeamPlayer,
    m20261017_000005_tournament_match::TournamentMatch,
};

static IDX_GOAL_MATCH_ID: &str = "idx-goal-match_id";
static FK_GOAL_MATCH_ID: &str = "fk-goal-match_id";
static FK_GOAL_TEAM_PLAYER_ID: &str = "fk-goal-team_player_id";
static FK_GOAL_TEAM_ID: &str = "fk-goal-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Goal::Table)
                    .if_not_exists()
                    .col(pk_auto(Goal::Id))
                    .col(integer(Goal::MatchId))
                    .col(integer(Goal::TeamPlayerId))
                    .col(integer(Goal::TeamId))
                    .col(integer(Goal::Minute))
                    .col(boolean(Goal::IsOwnGoal).default(false))
                    .col(boolean(Goal::IsPenalty).default(false))
                    .col(timestamp(Goal::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GOAL_MATCH_ID)
                    .table(Goal::Table)
                    .col(Goal::MatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOAL_MATCH_ID)
                    .from_tbl(Goal::Table)
                    .from_col(Goal::MatchId)
                    .to_tbl(TournamentMatch::Table)
                    .to_col(TournamentMatch::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOAL_TEAM_PLAYER_ID)
                    .from_tbl(Goal::Table)
                    .from_col(Goal::TeamPlayerId)
                    .to_tbl(TeamPlayer::Table)
                    .to_col(TeamPlayer::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GOAL_TEAM_ID)
                    .from_tbl(Goal::Table)
                    .from_col(Goal::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_GOAL_TEAM_ID, FK_GOAL_TEAM_PLAYER_ID, FK_GOAL_MATCH_ID] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Goal::Table).to_owned())
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GOAL_MATCH_ID)
                    .table(Goal::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Goal::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Goal {
    Table,
    Id,
    MatchId,
    TeamPlayerId,
    TeamId,
    Minute,
    IsOwnGoal,
    IsPenalty,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_tournament::Tournament;

static IDX_PHASE_TOURNAMENT_ID: &str = "idx-phase-tournament_id";
static FK_PHASE_TOURNAMENT_ID: &str = "fk-phase-tournament_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Phase::Table)
                    .if_not_exists()
                    .col(pk_auto(Phase::Id))
                    .col(integer(Phase::TournamentId))
                    .col(string(Phase::Name))
                    .col(integer(Phase::Position))
                    .col(timestamp(Phase::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PHASE_TOURNAMENT_ID)
                    .table(Phase::Table)
                    .col(Phase::TournamentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PHASE_TOURNAMENT_ID)
                    .from_tbl(Phase::Table)
                    .from_col(Phase::TournamentId)
                    .to_tbl(Tournament::Table)
                    .to_col(Tournament::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PHASE_TOURNAMENT_ID)
                    .table(Phase::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PHASE_TOURNAMENT_ID)
                    .table(Phase::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Phase::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Phase {
    Table,
    Id,
    TournamentId,
    Name,
    Position,
    CreatedAt,
}

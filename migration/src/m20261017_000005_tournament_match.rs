use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20261017_000001_tournament::Tournament, m20261017_000002_team::Team,
    m20261017_000004_phase::Phase,
};

static IDX_TOURNAMENT_MATCH_TOURNAMENT_ID_STATUS: &str = "idx-tournament_match-tournament_id-status";
static IDX_TOURNAMENT_MATCH_PHASE_ID: &str = "idx-tournament_match-phase_id";
static FK_TOURNAMENT_MATCH_TOURNAMENT_ID: &str = "fk-tournament_match-tournament_id";
static FK_TOURNAMENT_MATCH_PHASE_ID: &str = "fk-tournament_match-phase_id";
static FK_TOURNAMENT_MATCH_HOME_TEAM_ID: &str = "fk-tournament_match-home_team_id";
static FK_TOURNAMENT_MATCH_AWAY_TEAM_ID: &str = "fk-tournament_match-away_team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentMatch::Id))
                    .col(integer(TournamentMatch::TournamentId))
                    .col(integer_null(TournamentMatch::PhaseId))
                    .col(integer(TournamentMatch::HomeTeamId))
                    .col(integer(TournamentMatch::AwayTeamId))
                    .col(integer_null(TournamentMatch::HomeScore))
                    .col(integer_null(TournamentMatch::AwayScore))
                    .col(string_len(TournamentMatch::Status, 16))
                    .col(timestamp(TournamentMatch::CreatedAt))
                    .col(timestamp(TournamentMatch::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Recalculation scans finalized matches per tournament
        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_MATCH_TOURNAMENT_ID_STATUS)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::TournamentId)
                    .col(TournamentMatch::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_MATCH_PHASE_ID)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::PhaseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_MATCH_TOURNAMENT_ID)
                    .from_tbl(TournamentMatch::Table)
                    .from_col(TournamentMatch::TournamentId)
                    .to_tbl(Tournament::Table)
                    .to_col(Tournament::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_MATCH_PHASE_ID)
                    .from_tbl(TournamentMatch::Table)
                    .from_col(TournamentMatch::PhaseId)
                    .to_tbl(Phase::Table)
                    .to_col(Phase::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_MATCH_HOME_TEAM_ID)
                    .from_tbl(TournamentMatch::Table)
                    .from_col(TournamentMatch::HomeTeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_MATCH_AWAY_TEAM_ID)
                    .from_tbl(TournamentMatch::Table)
                    .from_col(TournamentMatch::AwayTeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_TOURNAMENT_MATCH_AWAY_TEAM_ID,
            FK_TOURNAMENT_MATCH_HOME_TEAM_ID,
            FK_TOURNAMENT_MATCH_PHASE_ID,
            FK_TOURNAMENT_MATCH_TOURNAMENT_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TournamentMatch::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [
            IDX_TOURNAMENT_MATCH_PHASE_ID,
            IDX_TOURNAMENT_MATCH_TOURNAMENT_ID_STATUS,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(TournamentMatch::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(TournamentMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TournamentMatch {
    Table,
    Id,
    TournamentId,
    PhaseId,
    HomeTeamId,
    AwayTeamId,
    HomeScore,
    AwayScore,
    Status,
    CreatedAt,
    UpdatedAt,
}

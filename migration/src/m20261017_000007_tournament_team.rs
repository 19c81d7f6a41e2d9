use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000001_tournament::Tournament, m20261017_000002_team::Team};

static FK_TOURNAMENT_TEAM_TOURNAMENT_ID: &str = "fk-tournament_team-tournament_id";
static FK_TOURNAMENT_TEAM_TEAM_ID: &str = "fk-tournament_team-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentTeam::Table)
                    .if_not_exists()
                    .col(integer(TournamentTeam::TournamentId))
                    .col(integer(TournamentTeam::TeamId))
                    .col(integer(TournamentTeam::MatchesPlayed).default(0))
                    .col(integer(TournamentTeam::Wins).default(0))
                    .col(integer(TournamentTeam::Draws).default(0))
                    .col(integer(TournamentTeam::Losses).default(0))
                    .col(integer(TournamentTeam::GoalsFor).default(0))
                    .col(integer(TournamentTeam::GoalsAgainst).default(0))
                    .col(integer(TournamentTeam::GoalDifference).default(0))
                    .col(integer(TournamentTeam::Points).default(0))
                    .col(timestamp(TournamentTeam::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(TournamentTeam::TournamentId)
                            .col(TournamentTeam::TeamId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_TEAM_TOURNAMENT_ID)
                    .from_tbl(TournamentTeam::Table)
                    .from_col(TournamentTeam::TournamentId)
                    .to_tbl(Tournament::Table)
                    .to_col(Tournament::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOURNAMENT_TEAM_TEAM_ID)
                    .from_tbl(TournamentTeam::Table)
                    .from_col(TournamentTeam::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_TOURNAMENT_TEAM_TEAM_ID, FK_TOURNAMENT_TEAM_TOURNAMENT_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TournamentTeam::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(TournamentTeam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TournamentTeam {
    Table,
    TournamentId,
    TeamId,
    MatchesPlayed,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    Points,
    CreatedAt,
}

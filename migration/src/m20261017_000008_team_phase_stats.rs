use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000002_team::Team, m20261017_000004_phase::Phase};

static IDX_TEAM_PHASE_STATS_PHASE_ID: &str = "idx-team_phase_stats-phase_id";
static FK_TEAM_PHASE_STATS_TEAM_ID: &str = "fk-team_phase_stats-team_id";
static FK_TEAM_PHASE_STATS_PHASE_ID: &str = "fk-team_phase_stats-phase_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key doubles as the upsert conflict target
        manager
            .create_table(
                Table::create()
                    .table(TeamPhaseStats::Table)
                    .if_not_exists()
                    .col(integer(TeamPhaseStats::TeamId))
                    .col(integer(TeamPhaseStats::PhaseId))
                    .col(integer(TeamPhaseStats::MatchesPlayed).default(0))
                    .col(integer(TeamPhaseStats::Wins).default(0))
                    .col(integer(TeamPhaseStats::Draws).default(0))
                    .col(integer(TeamPhaseStats::Losses).default(0))
                    .col(integer(TeamPhaseStats::GoalsFor).default(0))
                    .col(integer(TeamPhaseStats::GoalsAgainst).default(0))
                    .col(integer(TeamPhaseStats::GoalDifference).default(0))
                    .col(integer(TeamPhaseStats::Points).default(0))
                    .primary_key(
                        Index::create()
                            .col(TeamPhaseStats::TeamId)
                            .col(TeamPhaseStats::PhaseId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_PHASE_STATS_PHASE_ID)
                    .table(TeamPhaseStats::Table)
                    .col(TeamPhaseStats::PhaseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_PHASE_STATS_TEAM_ID)
                    .from_tbl(TeamPhaseStats::Table)
                    .from_col(TeamPhaseStats::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_PHASE_STATS_PHASE_ID)
                    .from_tbl(TeamPhaseStats::Table)
                    .from_col(TeamPhaseStats::PhaseId)
                    .to_tbl(Phase::Table)
                    .to_col(Phase::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_TEAM_PHASE_STATS_PHASE_ID, FK_TEAM_PHASE_STATS_TEAM_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TeamPhaseStats::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_PHASE_STATS_PHASE_ID)
                    .table(TeamPhaseStats::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamPhaseStats::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamPhaseStats {
    Table,
    TeamId,
    PhaseId,
    MatchesPlayed,
    Wins,
    Draws,
    Losses,
    GoalsFor,
    GoalsAgainst,
    GoalDifference,
    Points,
}

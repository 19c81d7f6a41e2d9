pub use sea_orm_migration::prelude::*;

mod m20261017_000001_tournament;
mod m20261017_000002_team;
mod m20261017_000003_team_player;
mod m20261017_000004_phase;
mod m20261017_000005_tournament_match;
mod m20261017_000006_goal;
mod m20261017_000007_tournament_team;
mod m20261017_000008_team_phase_stats;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_tournament::Migration),
            Box::new(m20261017_000002_team::Migration),
            Box::new(m20261017_000003_team_player::Migration),
            Box::new(m20261017_000004_phase::Migration),
            Box::new(m20261017_000005_tournament_match::Migration),
            Box::new(m20261017_000006_goal::Migration),
            Box::new(m20261017_000007_tournament_team::Migration),
            Box::new(m20261017_000008_team_phase_stats::Migration),
        ]
    }
}

use clap::{Parser, Subcommand};
use dioxus_logger::tracing;

use standings::{
    config::Config,
    error::Error,
    service::{lock::LockRegistry, standings::StandingsService, tournament::TournamentService},
    startup,
};

/// Maintenance commands for tournament standings
#[derive(Parser)]
#[command(name = "standings", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rebuild every aggregate of a tournament from its finalized matches
    Recalculate { tournament_id: i32 },
    /// Report teams whose stored aggregate differs from their finalized matches
    Audit { tournament_id: i32 },
    /// Print the stored tournament standings as JSON
    Show {
        tournament_id: i32,
        /// Print the standings of a single phase instead
        #[arg(long)]
        phase: Option<i32>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_logger(&config);

    if let Err(e) = run(&config, cli.command).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config, command: Command) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;
    let locks = LockRegistry::new();

    match command {
        Command::Recalculate { tournament_id } => {
            let summary = StandingsService::new(&db, &locks)
                .recalculate_tournament_standings(tournament_id)
                .await?;

            print_json(&summary)
        }
        Command::Audit { tournament_id } => {
            let drift = StandingsService::new(&db, &locks)
                .audit_tournament_standings(tournament_id)
                .await?;

            print_json(&drift)?;

            if !drift.is_empty() {
                std::process::exit(2);
            }

            Ok(())
        }
        Command::Show {
            tournament_id,
            phase,
        } => {
            let tournament_service = TournamentService::new(&db);
            let standings = match phase {
                Some(phase_id) => tournament_service.get_phase_standings(phase_id).await?,
                None => tournament_service.get_standings(tournament_id).await?,
            };

            print_json(&standings)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| Error::InternalError(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);

    Ok(())
}

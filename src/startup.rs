use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{config::Config, error::Error};

/// Initialise the global tracing subscriber at the configured level
pub fn init_logger(config: &Config) {
    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialise logger: {}", e);
    }
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

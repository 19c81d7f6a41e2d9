//! Error types for the standings engine.
//!
//! Domain errors live in their own modules and are aggregated into [`Error`] with
//! `thiserror`'s `#[from]` so services can propagate any of them with `?`.

pub mod config;
pub mod standings;

use thiserror::Error;

use crate::error::{config::ConfigError, standings::StandingsError};

/// Main error type returned by services.
///
/// Repositories return [`sea_orm::DbErr`] directly; services wrap it here together with the
/// domain-specific errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Standings error (missing match, goal, or aggregate row).
    #[error(transparent)]
    StandingsError(#[from] StandingsError),
    /// Internal error indicating a bug in the engine's code.
    #[error("Internal error in the standings engine, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

//! Test fixture modules for database record creation.
//!
//! - `tournament` - Tournaments, teams, players, phases and team registrations
//! - `matches` - Matches and goals

pub mod matches;
pub mod tournament;

//! Database entities for tournaments, matches, goals, and standings aggregates.

pub mod prelude;

pub mod goal;
pub mod phase;
pub mod sea_orm_active_enums;
pub mod team;
pub mod team_phase_stats;
pub mod team_player;
pub mod tournament;
pub mod tournament_match;
pub mod tournament_team;

//! Standings aggregate repositories.
//!
//! Aggregate rows are only ever changed through signed increments pushed down to the
//! database as `col = col + delta`, never through read-modify-write in application code.
//! The one exception is the reset performed before a full recalculation.

pub mod team_phase_stats;
pub mod tournament_team;

#[cfg(test)]
mod tests;

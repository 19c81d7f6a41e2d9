//! Transient engine values and the DTOs returned to callers.

pub mod goal;
pub mod match_result;
pub mod standings;
pub mod stats;
pub mod tournament_match;

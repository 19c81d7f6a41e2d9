//! Service layer for business logic and orchestration.
//!
//! Services own units of work: each public operation acquires the in-process locks it needs,
//! opens one database transaction, drives the repositories, and commits only once every
//! write has succeeded.

pub mod goal;
pub mod lock;
pub mod standings;
pub mod tournament;
pub mod tournament_match;

//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for a single table and are generic over
//! [`sea_orm::ConnectionTrait`], so the same repository runs against a pooled connection or
//! inside the transaction of a service's unit of work.

pub mod goal;
pub mod phase;
pub mod standings;
pub mod tournament;
pub mod tournament_match;

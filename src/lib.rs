//! Standings consistency engine.
//!
//! Keeps each team's tournament and phase aggregates equal to the sum of its countable
//! matches while matches are created, scored, edited, moved between phases and deleted.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;

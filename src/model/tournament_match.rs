use entity::sea_orm_active_enums::MatchStatus;
use serde::{Deserialize, Serialize};

/// Request to schedule a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMatch {
    pub tournament_id: i32,
    pub phase_id: Option<i32>,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
}

/// A single edit applied to a persisted match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEdit {
    Status(MatchStatus),
    /// Move the match to another phase, or out of any phase with `None`
    Phase(Option<i32>),
    Scores {
        home: Option<i32>,
        away: Option<i32>,
    },
}

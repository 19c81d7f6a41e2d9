use entity::sea_orm_active_enums::MatchStatus;

/// The facts of a match that decide whether and how it counts towards standings.
///
/// Always derived from a match row through [`From<&entity::tournament_match::Model>`] so that
/// previous and next snapshots of the same match compare structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub tournament_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub status: MatchStatus,
    pub phase_id: Option<i32>,
}

impl MatchResult {
    /// A result counts only once finalized with both scores recorded
    pub fn is_countable(&self) -> bool {
        self.final_score().is_some()
    }

    /// Returns `(home, away)` when the result is countable
    pub fn final_score(&self) -> Option<(i32, i32)> {
        match (self.status, self.home_score, self.away_score) {
            (MatchStatus::Finalized, Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    /// Same match with its scores cleared, used as the next snapshot when a match is removed.
    pub fn retracted(self) -> Self {
        Self {
            home_score: None,
            away_score: None,
            ..self
        }
    }
}

impl From<&entity::tournament_match::Model> for MatchResult {
    fn from(model: &entity::tournament_match::Model) -> Self {
        Self {
            tournament_id: model.tournament_id,
            home_team_id: model.home_team_id,
            away_team_id: model.away_team_id,
            home_score: model.home_score,
            away_score: model.away_score,
            status: model.status,
            phase_id: model.phase_id,
        }
    }
}

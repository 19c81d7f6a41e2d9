use serde::{Deserialize, Serialize};

/// Request to record a scoring event on a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGoal {
    pub match_id: i32,
    pub team_player_id: i32,
    /// Team of the scoring player
    pub team_id: i32,
    pub minute: i32,
    pub is_own_goal: bool,
    pub is_penalty: bool,
}

/// Side of the scoreboard a goal is credited to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSide {
    Home,
    Away,
}

impl ScoreSide {
    /// Resolves the credited side for a goal scored by a player of `scoring_team_id`.
    ///
    /// An own goal is credited to the opponent of the scoring player's team. Returns `None`
    /// when the team plays on neither side of the match.
    pub fn credited(
        home_team_id: i32,
        away_team_id: i32,
        scoring_team_id: i32,
        is_own_goal: bool,
    ) -> Option<Self> {
        let side = if scoring_team_id == home_team_id {
            Self::Home
        } else if scoring_team_id == away_team_id {
            Self::Away
        } else {
            return None;
        };

        Some(if is_own_goal { side.opponent() } else { side })
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }

    /// Adds one goal to this side.
    ///
    /// A recorded goal means the scoreboard is recorded, so an unrecorded score on either side
    /// becomes zero.
    pub fn increment(self, home: Option<i32>, away: Option<i32>) -> (Option<i32>, Option<i32>) {
        let (home, away) = (home.unwrap_or(0), away.unwrap_or(0));

        match self {
            Self::Home => (Some(home + 1), Some(away)),
            Self::Away => (Some(home), Some(away + 1)),
        }
    }

    /// Removes one goal from this side, never going below zero.
    ///
    /// The returned flag reports whether the floor was hit, which means the stored score
    /// was already inconsistent with the recorded goals.
    pub fn decrement(
        self,
        home: Option<i32>,
        away: Option<i32>,
    ) -> ((Option<i32>, Option<i32>), bool) {
        let floor = |score: Option<i32>| {
            let current = score.unwrap_or(0);
            ((current - 1).max(0), current <= 0)
        };

        match self {
            Self::Home => {
                let (score, clamped) = floor(home);
                ((Some(score), away), clamped)
            }
            Self::Away => {
                let (score, clamped) = floor(away);
                ((home, Some(score)), clamped)
            }
        }
    }
}

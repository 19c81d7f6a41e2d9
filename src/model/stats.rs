use std::ops::{Add, AddAssign, Neg};

use serde::{Deserialize, Serialize};

/// Signed per-field change to a standings aggregate.
///
/// A negated copy is the exact inverse of the original, which is how a previously applied
/// contribution is undone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamStatsUpdate {
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
}

impl TeamStatsUpdate {
    /// Flips the sign of every field
    pub fn negate(self) -> Self {
        Self {
            matches_played: -self.matches_played,
            wins: -self.wins,
            draws: -self.draws,
            losses: -self.losses,
            goals_for: -self.goals_for,
            goals_against: -self.goals_against,
            goal_difference: -self.goal_difference,
            points: -self.points,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the derived fields agree with the counted ones.
    ///
    /// Holds for every single-match delta and for any sum of them, so it also holds for
    /// every aggregate row maintained through increments.
    pub fn is_consistent(&self) -> bool {
        self.points == 3 * self.wins + self.draws
            && self.goal_difference == self.goals_for - self.goals_against
            && self.matches_played == self.wins + self.draws + self.losses
    }
}

impl Neg for TeamStatsUpdate {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Add for TeamStatsUpdate {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            matches_played: self.matches_played + rhs.matches_played,
            wins: self.wins + rhs.wins,
            draws: self.draws + rhs.draws,
            losses: self.losses + rhs.losses,
            goals_for: self.goals_for + rhs.goals_for,
            goals_against: self.goals_against + rhs.goals_against,
            goal_difference: self.goal_difference + rhs.goal_difference,
            points: self.points + rhs.points,
        }
    }
}

impl AddAssign for TeamStatsUpdate {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Reads the running totals of a tournament aggregate as a delta from zero.
impl From<&entity::tournament_team::Model> for TeamStatsUpdate {
    fn from(model: &entity::tournament_team::Model) -> Self {
        Self {
            matches_played: model.matches_played,
            wins: model.wins,
            draws: model.draws,
            losses: model.losses,
            goals_for: model.goals_for,
            goals_against: model.goals_against,
            goal_difference: model.goal_difference,
            points: model.points,
        }
    }
}

impl From<&entity::team_phase_stats::Model> for TeamStatsUpdate {
    fn from(model: &entity::team_phase_stats::Model) -> Self {
        Self {
            matches_played: model.matches_played,
            wins: model.wins,
            draws: model.draws,
            losses: model.losses,
            goals_for: model.goals_for,
            goals_against: model.goals_against,
            goal_difference: model.goal_difference,
            points: model.points,
        }
    }
}

use crate::{
    model::{match_result::MatchResult, stats::TeamStatsUpdate},
    service::standings::calculate::calculate_team_stats,
};

/// What a countable match contributes to both of its teams
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contribution {
    pub tournament_id: i32,
    pub phase_id: Option<i32>,
    pub home_team_id: i32,
    pub home: TeamStatsUpdate,
    pub away_team_id: i32,
    pub away: TeamStatsUpdate,
}

impl Contribution {
    /// Returns `None` for a result that does not count
    pub fn of(result: &MatchResult) -> Option<Self> {
        let (home_score, away_score) = result.final_score()?;

        Some(Self {
            tournament_id: result.tournament_id,
            phase_id: result.phase_id,
            home_team_id: result.home_team_id,
            home: calculate_team_stats(home_score, away_score),
            away_team_id: result.away_team_id,
            away: calculate_team_stats(away_score, home_score),
        })
    }

    fn addition(&self) -> [DeltaWrite; 2] {
        [
            DeltaWrite {
                tournament_id: self.tournament_id,
                team_id: self.home_team_id,
                phase_id: self.phase_id,
                delta: self.home,
            },
            DeltaWrite {
                tournament_id: self.tournament_id,
                team_id: self.away_team_id,
                phase_id: self.phase_id,
                delta: self.away,
            },
        ]
    }

    fn removal(&self) -> [DeltaWrite; 2] {
        self.addition().map(|write| DeltaWrite {
            delta: write.delta.negate(),
            ..write
        })
    }
}

/// A single signed write against one team's aggregates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaWrite {
    pub tournament_id: i32,
    pub team_id: i32,
    /// Phase aggregate to write as well, if the match belongs to a phase
    pub phase_id: Option<i32>,
    pub delta: TeamStatsUpdate,
}

/// Classified change between two snapshots of the same match.
///
/// Countability of the previous and next snapshot selects the variant; when both count,
/// the variant further records whether anything changed and whether the phase moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Neither snapshot counts
    Uncounted,
    /// The match stopped counting, its previous contribution is removed
    Retract(Contribution),
    /// The match started counting
    Count(Contribution),
    /// Both snapshots count with identical contributions
    Unchanged(Contribution),
    /// Both count in the same phase but the scoreline or teams changed
    Rescore {
        previous: Contribution,
        next: Contribution,
    },
    /// Both count but the match moved between phases
    Reassign {
        previous: Contribution,
        next: Contribution,
    },
}

impl Transition {
    pub fn resolve(previous: Option<&MatchResult>, next: &MatchResult) -> Self {
        let previous = previous.and_then(Contribution::of);
        let next = Contribution::of(next);

        match (previous, next) {
            (None, None) => Self::Uncounted,
            (Some(previous), None) => Self::Retract(previous),
            (None, Some(next)) => Self::Count(next),
            (Some(previous), Some(next)) if previous == next => Self::Unchanged(next),
            (Some(previous), Some(next)) if previous.phase_id == next.phase_id => {
                Self::Rescore { previous, next }
            }
            (Some(previous), Some(next)) => Self::Reassign { previous, next },
        }
    }

    /// Writes that move the aggregates from the previous state to the next.
    ///
    /// Removals always come before additions. A reassignment removes from the old phase and
    /// adds to the new one while the tournament aggregate receives both halves.
    pub fn writes(&self) -> Vec<DeltaWrite> {
        match self {
            Self::Uncounted | Self::Unchanged(_) => Vec::new(),
            Self::Retract(previous) => previous.removal().to_vec(),
            Self::Count(next) => next.addition().to_vec(),
            Self::Rescore { previous, next } | Self::Reassign { previous, next } => previous
                .removal()
                .into_iter()
                .chain(next.addition())
                .collect(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Uncounted => "uncounted",
            Self::Retract(_) => "retract",
            Self::Count(_) => "count",
            Self::Unchanged(_) => "unchanged",
            Self::Rescore { .. } => "rescore",
            Self::Reassign { .. } => "reassign",
        }
    }
}

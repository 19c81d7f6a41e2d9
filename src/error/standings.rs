use thiserror::Error;

/// Errors raised while keeping standings aggregates consistent.
///
/// Every variant is returned before any aggregate write of the failing unit of work is
/// committed.
#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("Match ID {0} not found")]
    MatchNotFound(i32),
    #[error("Goal ID {0} not found")]
    GoalNotFound(i32),
    #[error("Tournament ID {0} not found")]
    TournamentNotFound(i32),
    #[error("Phase ID {0} not found")]
    PhaseNotFound(i32),
    #[error("Phase ID {phase_id} does not belong to tournament ID {tournament_id}")]
    PhaseNotInTournament { tournament_id: i32, phase_id: i32 },
    /// The tournament-level aggregate row is missing, the team was never registered
    #[error("Team ID {team_id} is not registered in tournament ID {tournament_id}")]
    TeamNotRegistered { tournament_id: i32, team_id: i32 },
    #[error("Team ID {team_id} does not play in match ID {match_id}")]
    TeamNotInMatch { match_id: i32, team_id: i32 },
}

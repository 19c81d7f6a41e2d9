pub use super::goal::Entity as Goal;
pub use super::phase::Entity as Phase;
pub use super::team::Entity as Team;
pub use super::team_phase_stats::Entity as TeamPhaseStats;
pub use super::team_player::Entity as TeamPlayer;
pub use super::tournament::Entity as Tournament;
pub use super::tournament_match::Entity as TournamentMatch;
pub use super::tournament_team::Entity as TournamentTeam;

use entity::sea_orm_active_enums::MatchStatus;
use standings::{
    data::tournament_match::MatchRepository,
    model::{goal::NewGoal, tournament_match::NewMatch},
    service::{goal::GoalService, lock::LockRegistry, tournament_match::MatchService},
};
use standings_test_utils::prelude::*;

use super::util::team_stats;

fn finalized_match(tournament_id: i32, home_team_id: i32, away_team_id: i32, score: (i32, i32)) -> NewMatch {
    NewMatch {
        tournament_id,
        phase_id: None,
        home_team_id,
        away_team_id,
        home_score: Some(score.0),
        away_score: Some(score.1),
        status: MatchStatus::Finalized,
    }
}

/// Expect a 2-1 win edited to 2-2 to leave both teams with one draw
#[tokio::test]
async fn finalize_then_edit_score() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament, team_a, team_b) = test.tournament().insert_tournament_with_teams().await?;
    let locks = LockRegistry::new();
    let match_service = MatchService::new(&test.db, &locks);

    let tournament_match = match_service
        .create_match(finalized_match(tournament.id, team_a.id, team_b.id, (2, 1)))
        .await
        .unwrap();

    let a = team_stats(&test.db, tournament.id, team_a.id).await?;
    assert_eq!(a.matches_played, 1);
    assert_eq!(a.wins, 1);
    assert_eq!(a.points, 3);
    assert_eq!((a.goals_for, a.goals_against, a.goal_difference), (2, 1, 1));
    let b = team_stats(&test.db, tournament.id, team_b.id).await?;
    assert_eq!(b.matches_played, 1);
    assert_eq!(b.losses, 1);
    assert_eq!(b.points, 0);
    assert_eq!((b.goals_for, b.goals_against, b.goal_difference), (1, 2, -1));

    match_service
        .set_scores(tournament_match.id, Some(2), Some(2))
        .await
        .unwrap();

    for team_id in [team_a.id, team_b.id] {
        let stats = team_stats(&test.db, tournament.id, team_id).await?;
        assert_eq!(stats.matches_played, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.points, 1);
        assert_eq!(stats.goal_difference, 0);
    }

    Ok(())
}

/// Expect a home own goal in a finalized 0-0 to make it 0-1 and follow that scoreline
#[tokio::test]
async fn own_goal_follows_scoreboard() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament, home, away) = test.tournament().insert_tournament_with_teams().await?;
    let defender = test.tournament().insert_player(home.id).await?;
    let locks = LockRegistry::new();

    let tournament_match = MatchService::new(&test.db, &locks)
        .create_match(finalized_match(tournament.id, home.id, away.id, (0, 0)))
        .await
        .unwrap();

    GoalService::new(&test.db, &locks)
        .add_goal(NewGoal {
            match_id: tournament_match.id,
            team_player_id: defender.id,
            team_id: home.id,
            minute: 30,
            is_own_goal: true,
            is_penalty: false,
        })
        .await
        .unwrap();

    let updated = MatchRepository::new(&test.db)
        .get(tournament_match.id)
        .await?
        .unwrap();
    assert_eq!((updated.home_score, updated.away_score), (Some(0), Some(1)));

    let home_stats = team_stats(&test.db, tournament.id, home.id).await?;
    assert_eq!((home_stats.losses, home_stats.points), (1, 0));
    assert_eq!(home_stats.goal_difference, -1);
    let away_stats = team_stats(&test.db, tournament.id, away.id).await?;
    assert_eq!((away_stats.wins, away_stats.points), (1, 3));
    assert_eq!(away_stats.goals_for, 1);

    Ok(())
}

/// Expect deleting a goal from an inconsistent 0-0 to keep both scores at zero
#[tokio::test]
async fn goal_deletion_floor() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament, home, away) = test.tournament().insert_tournament_with_teams().await?;
    let striker = test.tournament().insert_player(home.id).await?;
    let locks = LockRegistry::new();

    let tournament_match = MatchService::new(&test.db, &locks)
        .create_match(finalized_match(tournament.id, home.id, away.id, (0, 0)))
        .await
        .unwrap();
    // Goal recorded without its score, leaving the match inconsistent
    let goal = test
        .matches()
        .insert_goal(tournament_match.id, striker.id, home.id, false)
        .await?;

    GoalService::new(&test.db, &locks)
        .delete_goal(goal.id)
        .await
        .unwrap();

    let updated = MatchRepository::new(&test.db)
        .get(tournament_match.id)
        .await?
        .unwrap();
    assert_eq!((updated.home_score, updated.away_score), (Some(0), Some(0)));

    // Still a counted 0-0 draw
    let home_stats = team_stats(&test.db, tournament.id, home.id).await?;
    assert_eq!((home_stats.matches_played, home_stats.draws), (1, 1));
    assert!(home_stats.is_consistent());

    Ok(())
}

/// Expect suspending a finalized 3-0 to return aggregates to their pre-match values
#[tokio::test]
async fn suspend_counted_match() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament, home, away) = test.tournament().insert_tournament_with_teams().await?;
    let locks = LockRegistry::new();
    let match_service = MatchService::new(&test.db, &locks);

    // Earlier result so pre-match values are non-zero
    match_service
        .create_match(finalized_match(tournament.id, away.id, home.id, (1, 1)))
        .await
        .unwrap();
    let home_before = team_stats(&test.db, tournament.id, home.id).await?;
    let away_before = team_stats(&test.db, tournament.id, away.id).await?;

    let tournament_match = match_service
        .create_match(finalized_match(tournament.id, home.id, away.id, (3, 0)))
        .await
        .unwrap();
    assert_eq!(
        team_stats(&test.db, tournament.id, home.id).await?.points,
        home_before.points + 3
    );

    match_service
        .update_status(tournament_match.id, MatchStatus::Suspended)
        .await
        .unwrap();

    assert_eq!(team_stats(&test.db, tournament.id, home.id).await?, home_before);
    assert_eq!(team_stats(&test.db, tournament.id, away.id).await?, away_before);

    Ok(())
}

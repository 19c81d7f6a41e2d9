use entity::sea_orm_active_enums::MatchStatus;
use rand::{seq::SliceRandom, Rng};
use standings::{
    model::{goal::NewGoal, match_result::MatchResult, tournament_match::NewMatch},
    service::{
        goal::GoalService, lock::LockRegistry, standings::StandingsService,
        tournament_match::MatchService,
    },
};
use standings_test_utils::prelude::*;

use super::util::{finalized, phase_table, tournament_table};

/// Builds a tournament with `teams` registered teams and one phase
async fn league(
    test: &TestContext,
    teams: usize,
) -> Result<(i32, i32, Vec<i32>), TestError> {
    let tournament = test.tournament().insert_tournament().await?;
    let phase = test.tournament().insert_phase(tournament.id, 1).await?;

    let mut team_ids = Vec::with_capacity(teams);
    for _ in 0..teams {
        team_ids.push(test.tournament().insert_registered_team(tournament.id).await?.id);
    }

    Ok((tournament.id, phase.id, team_ids))
}

/// Round robin with random scores, every other match tagged with the phase
fn random_results(tournament_id: i32, phase_id: i32, team_ids: &[i32]) -> Vec<MatchResult> {
    let mut rng = rand::rng();
    let mut results = Vec::new();

    for (i, home) in team_ids.iter().enumerate() {
        for away in &team_ids[i + 1..] {
            let phase = (results.len() % 2 == 0).then_some(phase_id);
            let score = (rng.random_range(0..5), rng.random_range(0..5));
            results.push(finalized(tournament_id, phase, *home, *away, score));
        }
    }

    results
}

/// Expect any replay order of the same matches to produce identical aggregates
#[tokio::test]
async fn replay_order_does_not_matter() -> Result<(), TestError> {
    let first = TestBuilder::new().with_standings_tables().build().await?;
    let second = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament_id, phase_id, team_ids) = league(&first, 5).await?;
    league(&second, 5).await?;
    let locks = LockRegistry::new();

    let results = random_results(tournament_id, phase_id, &team_ids);
    let mut shuffled = results.clone();
    shuffled.shuffle(&mut rand::rng());

    let in_order = StandingsService::new(&first.db, &locks);
    for result in &results {
        in_order.apply_match_result(None, result).await.unwrap();
    }
    let shuffled_order = StandingsService::new(&second.db, &locks);
    for result in &shuffled {
        shuffled_order.apply_match_result(None, result).await.unwrap();
    }

    assert_eq!(
        tournament_table(&first.db, tournament_id).await?,
        tournament_table(&second.db, tournament_id).await?
    );
    assert_eq!(
        phase_table(&first.db, phase_id).await?,
        phase_table(&second.db, phase_id).await?
    );

    Ok(())
}

/// Expect counting then un-finalizing a match to restore every touched aggregate exactly
#[tokio::test]
async fn counting_then_retracting_is_zero_net() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament_id, phase_id, team_ids) = league(&test, 4).await?;
    let locks = LockRegistry::new();
    let service = StandingsService::new(&test.db, &locks);

    // Some prior state so the inverse is checked against non-zero rows
    let background = finalized(tournament_id, Some(phase_id), team_ids[2], team_ids[0], (2, 2));
    service.apply_match_result(None, &background).await.unwrap();
    let tournament_before = tournament_table(&test.db, tournament_id).await?;
    let phase_before = phase_table(&test.db, phase_id).await?;

    for status in [
        MatchStatus::Draft,
        MatchStatus::Scheduled,
        MatchStatus::InProgress,
        MatchStatus::Suspended,
    ] {
        let counted = finalized(tournament_id, Some(phase_id), team_ids[0], team_ids[1], (3, 1));
        let reverted = MatchResult { status, ..counted };

        service.apply_match_result(None, &counted).await.unwrap();
        service
            .apply_match_result(Some(&counted), &reverted)
            .await
            .unwrap();

        assert_eq!(tournament_table(&test.db, tournament_id).await?, tournament_before);
    }

    // Team 1 only appears in retracted matches, so it has no phase row either
    assert_eq!(phase_table(&test.db, phase_id).await?, phase_before);

    Ok(())
}

/// Expect applying an unchanged snapshot to leave every aggregate untouched
#[tokio::test]
async fn unchanged_snapshot_is_noop() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament_id, phase_id, team_ids) = league(&test, 2).await?;
    let locks = LockRegistry::new();
    let service = StandingsService::new(&test.db, &locks);

    let counted = finalized(tournament_id, Some(phase_id), team_ids[0], team_ids[1], (1, 0));
    service.apply_match_result(None, &counted).await.unwrap();
    let tournament_before = tournament_table(&test.db, tournament_id).await?;
    let phase_before = phase_table(&test.db, phase_id).await?;

    let uncounted = MatchResult {
        status: MatchStatus::Scheduled,
        home_score: None,
        away_score: None,
        ..counted
    };
    for snapshot in [counted, uncounted] {
        service
            .apply_match_result(Some(&snapshot), &snapshot)
            .await
            .unwrap();
    }

    assert_eq!(tournament_table(&test.db, tournament_id).await?, tournament_before);
    assert_eq!(phase_table(&test.db, phase_id).await?, phase_before);

    Ok(())
}

/// Expect a phase move to shift exactly the match's contribution between the two phases
#[tokio::test]
async fn phase_reassignment_conserves_totals() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament_id, group_id, team_ids) = league(&test, 2).await?;
    let knockout_id = test.tournament().insert_phase(tournament_id, 2).await?.id;
    let locks = LockRegistry::new();
    let service = StandingsService::new(&test.db, &locks);

    let in_group = finalized(tournament_id, Some(group_id), team_ids[0], team_ids[1], (0, 2));
    // A second group match so the group rows stay non-zero after the move
    let other = finalized(tournament_id, Some(group_id), team_ids[1], team_ids[0], (1, 1));
    service.apply_match_result(None, &in_group).await.unwrap();
    service.apply_match_result(None, &other).await.unwrap();

    let tournament_before = tournament_table(&test.db, tournament_id).await?;
    let group_before = phase_table(&test.db, group_id).await?;

    let in_knockout = MatchResult {
        phase_id: Some(knockout_id),
        ..in_group
    };
    service
        .apply_match_result(Some(&in_group), &in_knockout)
        .await
        .unwrap();

    assert_eq!(tournament_table(&test.db, tournament_id).await?, tournament_before);

    let group_after = phase_table(&test.db, group_id).await?;
    let knockout_after = phase_table(&test.db, knockout_id).await?;
    for ((team_id, before), (_, after)) in group_before.iter().zip(&group_after) {
        let moved = knockout_after
            .iter()
            .find(|(id, _)| id == team_id)
            .map(|(_, stats)| *stats)
            .unwrap();

        assert_eq!(*after + moved, *before);
        assert_eq!(moved.matches_played, 1);
    }

    Ok(())
}

/// Expect the derived-field invariants to hold after a random sequence of edits
#[tokio::test]
async fn invariants_hold_after_random_edits() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament_id, phase_id, team_ids) = league(&test, 4).await?;
    let locks = LockRegistry::new();
    let service = StandingsService::new(&test.db, &locks);
    let mut rng = rand::rng();

    let statuses = [
        MatchStatus::Draft,
        MatchStatus::Scheduled,
        MatchStatus::InProgress,
        MatchStatus::Finalized,
        MatchStatus::Suspended,
    ];

    let mut current: Vec<MatchResult> = random_results(tournament_id, phase_id, &team_ids)
        .into_iter()
        .map(|r| MatchResult {
            status: MatchStatus::Scheduled,
            ..r
        })
        .collect();

    for _ in 0..60 {
        let index = rng.random_range(0..current.len());
        let previous = current[index];
        let next = MatchResult {
            status: statuses[rng.random_range(0..statuses.len())],
            home_score: rng.random_bool(0.9).then(|| rng.random_range(0..4)),
            away_score: Some(rng.random_range(0..4)),
            phase_id: rng.random_bool(0.5).then_some(phase_id),
            ..previous
        };

        service
            .apply_match_result(Some(&previous), &next)
            .await
            .unwrap();
        current[index] = next;
    }

    for (_, stats) in tournament_table(&test.db, tournament_id).await? {
        assert!(stats.is_consistent(), "{stats:?}");
    }
    for (_, stats) in phase_table(&test.db, phase_id).await? {
        assert!(stats.is_consistent(), "{stats:?}");
    }

    // Incremental state must equal a full rebuild from the final snapshots
    let expected = TestBuilder::new().with_standings_tables().build().await?;
    league(&expected, 4).await?;
    let rebuild = StandingsService::new(&expected.db, &locks);
    for result in current.iter().filter(|r| r.is_countable()) {
        rebuild.apply_match_result(None, result).await.unwrap();
    }
    assert_eq!(
        tournament_table(&test.db, tournament_id).await?,
        tournament_table(&expected.db, tournament_id).await?
    );
    assert_eq!(
        phase_table(&test.db, phase_id).await?,
        phase_table(&expected.db, phase_id).await?
    );

    Ok(())
}

/// Expect a full recalculation after random service edits to reproduce both the tournament
/// and the phase tables exactly
#[tokio::test]
async fn recalculation_matches_incremental_service_edits() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament_id, group_id, team_ids) = league(&test, 4).await?;
    let knockout_id = test.tournament().insert_phase(tournament_id, 2).await?.id;
    let phases = [None, Some(group_id), Some(knockout_id)];
    let mut players = Vec::with_capacity(team_ids.len());
    for team_id in &team_ids {
        players.push(test.tournament().insert_player(*team_id).await?.id);
    }

    let locks = LockRegistry::new();
    let match_service = MatchService::new(&test.db, &locks);
    let goal_service = GoalService::new(&test.db, &locks);
    let mut rng = rand::rng();

    let mut matches = Vec::new();
    for (i, home) in team_ids.iter().enumerate() {
        for away in &team_ids[i + 1..] {
            let created = match_service
                .create_match(NewMatch {
                    tournament_id,
                    phase_id: phases[rng.random_range(0..phases.len())],
                    home_team_id: *home,
                    away_team_id: *away,
                    home_score: None,
                    away_score: None,
                    status: MatchStatus::Scheduled,
                })
                .await
                .unwrap();
            matches.push(created);
        }
    }
    // (goal ID, match ID)
    let mut goals: Vec<(i32, i32)> = Vec::new();

    for _ in 0..80 {
        if matches.is_empty() {
            break;
        }
        let index = rng.random_range(0..matches.len());
        let tournament_match = matches[index].clone();

        match rng.random_range(0..7) {
            0 | 1 => {
                let home = rng.random_bool(0.5);
                let team_id = if home {
                    tournament_match.home_team_id
                } else {
                    tournament_match.away_team_id
                };
                let position = team_ids.iter().position(|id| *id == team_id).unwrap();
                let goal = goal_service
                    .add_goal(NewGoal {
                        match_id: tournament_match.id,
                        team_player_id: players[position],
                        team_id,
                        minute: rng.random_range(1..90),
                        is_own_goal: rng.random_bool(0.2),
                        is_penalty: false,
                    })
                    .await
                    .unwrap();
                goals.push((goal.id, tournament_match.id));
            }
            2 => {
                if !goals.is_empty() {
                    let (goal_id, _) = goals.swap_remove(rng.random_range(0..goals.len()));
                    goal_service.delete_goal(goal_id).await.unwrap();
                }
            }
            3 => {
                let status = if rng.random_bool(0.7) {
                    MatchStatus::Finalized
                } else {
                    MatchStatus::Suspended
                };
                let (updated, _) = match_service
                    .update_status(tournament_match.id, status)
                    .await
                    .unwrap();
                matches[index] = updated;
            }
            4 => {
                let phase_id = phases[rng.random_range(0..phases.len())];
                let (updated, _) = match_service
                    .update_phase(tournament_match.id, phase_id)
                    .await
                    .unwrap();
                matches[index] = updated;
            }
            5 => {
                let (updated, _) = match_service
                    .set_scores(
                        tournament_match.id,
                        Some(rng.random_range(0..4)),
                        Some(rng.random_range(0..4)),
                    )
                    .await
                    .unwrap();
                matches[index] = updated;
            }
            _ => {
                match_service.delete_match(tournament_match.id).await.unwrap();
                matches.swap_remove(index);
                goals.retain(|(_, match_id)| *match_id != tournament_match.id);
            }
        }
    }

    let tournament_before = tournament_table(&test.db, tournament_id).await?;
    let group_before = phase_table(&test.db, group_id).await?;
    let knockout_before = phase_table(&test.db, knockout_id).await?;
    for (_, stats) in tournament_before
        .iter()
        .chain(&group_before)
        .chain(&knockout_before)
    {
        assert!(stats.is_consistent(), "{stats:?}");
        assert!(stats.matches_played > 0 || stats.is_zero(), "{stats:?}");
    }

    StandingsService::new(&test.db, &locks)
        .recalculate_tournament_standings(tournament_id)
        .await
        .unwrap();

    assert_eq!(tournament_table(&test.db, tournament_id).await?, tournament_before);
    assert_eq!(phase_table(&test.db, group_id).await?, group_before);
    assert_eq!(phase_table(&test.db, knockout_id).await?, knockout_before);

    Ok(())
}

/// Expect recalculating a tournament twice to leave other tournaments' phases untouched
#[tokio::test]
async fn recalculation_is_scoped_to_its_tournament() -> Result<(), TestError> {
    let test = TestBuilder::new().with_standings_tables().build().await?;
    let (tournament_id, _, team_ids) = league(&test, 2).await?;
    let (other_id, other_phase_id, other_team_ids) = league(&test, 2).await?;
    let locks = LockRegistry::new();
    let match_service = MatchService::new(&test.db, &locks);

    // Foreign phases are rejected up front
    assert!(match_service
        .create_match(NewMatch {
            tournament_id,
            phase_id: Some(other_phase_id),
            home_team_id: team_ids[0],
            away_team_id: team_ids[1],
            home_score: Some(1),
            away_score: Some(0),
            status: MatchStatus::Finalized,
        })
        .await
        .is_err());
    match_service
        .create_match(NewMatch {
            tournament_id: other_id,
            phase_id: Some(other_phase_id),
            home_team_id: other_team_ids[0],
            away_team_id: other_team_ids[1],
            home_score: Some(2),
            away_score: Some(0),
            status: MatchStatus::Finalized,
        })
        .await
        .unwrap();
    let other_phase_before = phase_table(&test.db, other_phase_id).await?;

    let service = StandingsService::new(&test.db, &locks);
    service.recalculate_tournament_standings(tournament_id).await.unwrap();
    service.recalculate_tournament_standings(tournament_id).await.unwrap();

    assert_eq!(phase_table(&test.db, other_phase_id).await?, other_phase_before);
    assert_eq!(other_phase_before[0].1.matches_played, 1);

    Ok(())
}

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use tokio::sync::{
    Mutex as AsyncMutex, OwnedMutexGuard, OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock,
};

type LockMap<L> = Arc<Mutex<HashMap<i32, Arc<L>>>>;

/// In-process lock registry serialising work on the same match.
///
/// Per-match operations hold a shared guard on their tournament plus an exclusive guard on
/// the match, while a full recalculation holds the tournament exclusively. Guards are always
/// acquired tournament first, then match. An entry is removed from the registry when the last
/// guard on it is released and nobody waits for it.
///
/// Clones share the same registry.
#[derive(Clone, Default)]
pub struct LockRegistry {
    matches: LockMap<AsyncMutex<()>>,
    tournaments: LockMap<RwLock<()>>,
}

/// Guard on one registry entry, evicting the entry on drop once it is unused
pub struct RegistryGuard<L, G> {
    map: LockMap<L>,
    id: i32,
    guard: Option<G>,
}

pub type TournamentReadGuard = RegistryGuard<RwLock<()>, OwnedRwLockReadGuard<()>>;
pub type TournamentWriteGuard = RegistryGuard<RwLock<()>, OwnedRwLockWriteGuard<()>>;

/// Held for the duration of a per-match unit of work
pub struct MatchGuard {
    _tournament: TournamentReadGuard,
    _match: RegistryGuard<AsyncMutex<()>, OwnedMutexGuard<()>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other unit of work touches the match and no recalculation runs on its
    /// tournament
    pub async fn lock_match(&self, tournament_id: i32, match_id: i32) -> MatchGuard {
        let tournament = self.read_tournament(tournament_id).await;
        let match_lock = entry(&self.matches, match_id).lock_owned().await;

        MatchGuard {
            _tournament: tournament,
            _match: RegistryGuard::new(&self.matches, match_id, match_lock),
        }
    }

    /// Shared guard on a tournament, excluding only recalculation
    pub async fn read_tournament(&self, tournament_id: i32) -> TournamentReadGuard {
        let guard = entry(&self.tournaments, tournament_id).read_owned().await;

        RegistryGuard::new(&self.tournaments, tournament_id, guard)
    }

    /// Exclusive guard on a tournament, waits for every in-flight match operation
    pub async fn lock_tournament(&self, tournament_id: i32) -> TournamentWriteGuard {
        let guard = entry(&self.tournaments, tournament_id).write_owned().await;

        RegistryGuard::new(&self.tournaments, tournament_id, guard)
    }
}

impl<L, G> RegistryGuard<L, G> {
    fn new(map: &LockMap<L>, id: i32, guard: G) -> Self {
        Self {
            map: map.clone(),
            id,
            guard: Some(guard),
        }
    }
}

impl<L, G> Drop for RegistryGuard<L, G> {
    fn drop(&mut self) {
        let mut map = lock_map(&self.map);

        // Released under the map lock so no new holder can clone the entry in between
        drop(self.guard.take());

        if map
            .get(&self.id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            map.remove(&self.id);
        }
    }
}

fn entry<L: Default>(map: &Mutex<HashMap<i32, Arc<L>>>, id: i32) -> Arc<L> {
    lock_map(map).entry(id).or_default().clone()
}

fn lock_map<L>(map: &Mutex<HashMap<i32, Arc<L>>>) -> MutexGuard<'_, HashMap<i32, Arc<L>>> {
    // Only map access happens under this lock, a panic elsewhere cannot leave it inconsistent
    map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

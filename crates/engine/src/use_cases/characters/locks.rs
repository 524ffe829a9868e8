//! Per-character exclusive access.

use std::sync::Arc;

use dashmap::DashMap;
use guildhall_domain::CharacterId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Serializes read-modify-write cycles on the same character.
///
/// Different characters never contend. The guard must be held from the
/// load until the save has returned.
#[derive(Default)]
pub struct CharacterLocks {
    locks: DashMap<CharacterId, Arc<Mutex<()>>>,
}

impl CharacterLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, id: CharacterId) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the map shard is unlocked before awaiting.
        let lock = self.locks.entry(id).or_default().clone();
        lock.lock_owned().await
    }
}

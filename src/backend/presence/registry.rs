//! Presence Registry
//!
//! Tracks who is in the room. A participant is created by registering a
//! name, kept alive by heartbeats, and removed by the inactivity sweeper.
//!
//! Registration and eviction each touch the store exactly once for the
//! participant record: insert-if-absent and select-and-delete are single
//! store operations, so two concurrent logins for the same name cannot both
//! succeed.

use std::sync::Arc;
use std::time::Duration;

use crate::backend::error::BackendError;
use crate::backend::messages::MessageLog;
use crate::backend::store::ChatStore;
use crate::shared::clock::clock_time;
use crate::shared::{Message, Participant};

#[derive(Clone)]
pub struct PresenceRegistry {
    store: Arc<dyn ChatStore>,
    messages: MessageLog,
}

impl PresenceRegistry {
    pub fn new(store: Arc<dyn ChatStore>, messages: MessageLog) -> Self {
        Self { store, messages }
    }

    /// Register `name` (already normalized) and announce it.
    ///
    /// # Errors
    ///
    /// * `ConflictError` - the name is taken; nothing is written
    /// * `StoreError` - the store failed
    pub async fn register(&self, name: &str, now_ms: i64) -> Result<Participant, BackendError> {
        let participant = Participant::new(name, now_ms);
        if !self.store.insert_participant(&participant).await? {
            return Err(BackendError::conflict(format!("{name} is already in the room")));
        }

        self.messages
            .append(&Message::entry(name, clock_time(now_ms)))
            .await?;

        tracing::info!("{} joined the room", name);
        Ok(participant)
    }

    /// Refresh the last-activity time of a registered participant
    pub async fn heartbeat(&self, name: &str, now_ms: i64) -> Result<(), BackendError> {
        if self.store.touch_participant(name, now_ms).await? {
            Ok(())
        } else {
            Err(BackendError::not_found(format!("{name} is not in the room")))
        }
    }

    pub async fn contains(&self, name: &str) -> Result<bool, BackendError> {
        Ok(self.store.contains_participant(name).await?)
    }

    pub async fn list(&self) -> Result<Vec<Participant>, BackendError> {
        Ok(self.store.list_participants().await?)
    }

    /// Remove everyone idle for at least `idle_timeout` and return their names.
    ///
    /// Departure notices are the caller's job.
    pub async fn evict_stale(
        &self,
        idle_timeout: Duration,
        now_ms: i64,
    ) -> Result<Vec<String>, BackendError> {
        let timeout_ms = i64::try_from(idle_timeout.as_millis()).unwrap_or(i64::MAX);
        let cutoff = now_ms.saturating_sub(timeout_ms);
        Ok(self.store.remove_idle_participants(cutoff).await?)
    }
}

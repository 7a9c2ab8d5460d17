//! In-memory chat store
//!
//! Participants live in a map keyed by name and messages in an
//! append-only vector whose index is the chronological order. Each trait
//! method takes the relevant lock once, which makes insert-if-absent and
//! select-and-delete atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::store::{select_visible, ChatStore, MessageWindow, StoreError};
use crate::shared::{Message, Participant};

#[derive(Debug, Default)]
pub struct MemoryStore {
    participants: RwLock<HashMap<String, Participant>>,
    messages: RwLock<Vec<Message>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages appended so far
    pub async fn message_count(&self) -> usize {
        self.messages.read().await.len()
    }
}

#[async_trait]
impl ChatStore for MemoryStore {
    async fn insert_participant(&self, participant: &Participant) -> Result<bool, StoreError> {
        let mut participants = self.participants.write().await;
        if participants.contains_key(&participant.name) {
            return Ok(false);
        }
        participants.insert(participant.name.clone(), participant.clone());
        Ok(true)
    }

    async fn contains_participant(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.participants.read().await.contains_key(name))
    }

    async fn touch_participant(&self, name: &str, at_ms: i64) -> Result<bool, StoreError> {
        match self.participants.write().await.get_mut(name) {
            Some(participant) => {
                participant.last_status = at_ms;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, StoreError> {
        Ok(self.participants.read().await.values().cloned().collect())
    }

    async fn remove_idle_participants(&self, cutoff_ms: i64) -> Result<Vec<String>, StoreError> {
        let mut participants = self.participants.write().await;
        let idle: Vec<String> = participants
            .values()
            .filter(|participant| participant.last_status <= cutoff_ms)
            .map(|participant| participant.name.clone())
            .collect();
        for name in &idle {
            participants.remove(name);
        }
        Ok(idle)
    }

    async fn append_message(&self, message: &Message) -> Result<(), StoreError> {
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn visible_messages(
        &self,
        viewer: &str,
        window: MessageWindow,
    ) -> Result<Vec<Message>, StoreError> {
        Ok(select_visible(&self.messages.read().await, viewer, window))
    }
}

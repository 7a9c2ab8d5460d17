//! Chat Store Module
//!
//! The document store behind the Presence Registry and the Message Log.
//! Everything the chat persists goes through the [`ChatStore`] trait, so
//! the services and the sweeper only ever hold an `Arc<dyn ChatStore>`.
//!
//! # Implementations
//!
//! - [`PgStore`] - PostgreSQL via `sqlx`, two tables (`participants`,
//!   `messages`) created by the migrations in `migrations/`
//! - [`MemoryStore`] - in-process maps behind `tokio::sync::RwLock`, used
//!   when `DATABASE_URL` is not configured and throughout the tests
//!
//! # Atomicity
//!
//! Each trait method is a single store operation. Registration relies on
//! [`ChatStore::insert_participant`] being insert-if-absent in one step, and
//! eviction on [`ChatStore::remove_idle_participants`] selecting and
//! deleting in one step. No method spans more than one operation.

use std::num::NonZeroU32;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{Message, Participant};

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Errors raised by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database driver error, surfaced with the driver's message
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed at startup
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be turned back into a chat type
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// The store could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::Corrupt(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }
}

/// Which slice of a viewer's visible history to return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageWindow {
    /// Every visible message, using [`Message::visible_in_history`]
    Full,
    /// The N most recent visible messages, using [`Message::visible_in_recent`]
    Recent(NonZeroU32),
}

/// Persistence operations needed by the chat
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Insert `participant` unless the name is taken.
    ///
    /// Returns `false`, and changes nothing, when a participant with the
    /// same name already exists.
    async fn insert_participant(&self, participant: &Participant) -> Result<bool, StoreError>;

    /// Whether a participant with this exact name is registered
    async fn contains_participant(&self, name: &str) -> Result<bool, StoreError>;

    /// Set `last_status` for an existing participant.
    ///
    /// Returns `false` when no such participant exists.
    async fn touch_participant(&self, name: &str, at_ms: i64) -> Result<bool, StoreError>;

    /// All registered participants, in no particular order
    async fn list_participants(&self) -> Result<Vec<Participant>, StoreError>;

    /// Delete every participant with `last_status <= cutoff_ms` and return
    /// their names
    async fn remove_idle_participants(&self, cutoff_ms: i64) -> Result<Vec<String>, StoreError>;

    /// Append a message to the log
    async fn append_message(&self, message: &Message) -> Result<(), StoreError>;

    /// Messages `viewer` may read, oldest first
    async fn visible_messages(
        &self,
        viewer: &str,
        window: MessageWindow,
    ) -> Result<Vec<Message>, StoreError>;
}

/// Apply a window to a chronologically ordered log.
///
/// The result keeps chronological order; for [`MessageWindow::Recent`] it is
/// the tail of the visible messages.
pub fn select_visible(log: &[Message], viewer: &str, window: MessageWindow) -> Vec<Message> {
    match window {
        MessageWindow::Full => log
            .iter()
            .filter(|message| message.visible_in_history(viewer))
            .cloned()
            .collect(),
        MessageWindow::Recent(limit) => {
            let mut recent: Vec<Message> = log
                .iter()
                .rev()
                .filter(|message| message.visible_in_recent(viewer))
                .take(limit.get() as usize)
                .cloned()
                .collect();
            recent.reverse();
            recent
        }
    }
}

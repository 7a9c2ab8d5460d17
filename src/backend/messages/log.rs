//! Message Log
//!
//! Append-only chat history over the [`ChatStore`]. Messages are never
//! updated or deleted; a query returns what a given viewer may read.
//!
//! # Query paths
//!
//! - no limit: every message visible under [`Message::visible_in_history`]
//! - `limit = N`: the N most recent messages visible under
//!   [`Message::visible_in_recent`], oldest first

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::store::{ChatStore, MessageWindow};
use crate::shared::Message;

#[derive(Clone)]
pub struct MessageLog {
    store: Arc<dyn ChatStore>,
}

impl MessageLog {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// Append an immutable record
    pub async fn append(&self, message: &Message) -> Result<(), BackendError> {
        self.store.append_message(message).await?;
        Ok(())
    }

    /// Messages visible to `viewer`, optionally only the `limit` most recent
    pub async fn query(
        &self,
        viewer: &str,
        limit: Option<NonZeroU32>,
    ) -> Result<Vec<Message>, BackendError> {
        let window = match limit {
            Some(limit) => MessageWindow::Recent(limit),
            None => MessageWindow::Full,
        };
        Ok(self.store.visible_messages(viewer, window).await?)
    }
}

/// Parse the `limit` query parameter.
///
/// Absent means unlimited. Anything present must be a positive integer;
/// values beyond `u32::MAX` are clamped.
pub fn parse_limit(raw: Option<&str>) -> Result<Option<NonZeroU32>, BackendError> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let invalid = || BackendError::validation(format!("limit must be a positive integer, got {raw:?}"));
    let value = raw.trim().parse::<i64>().map_err(|_| invalid())?;
    if value <= 0 {
        return Err(invalid());
    }

    let clamped = u32::try_from(value).unwrap_or(u32::MAX);
    Ok(NonZeroU32::new(clamped))
}

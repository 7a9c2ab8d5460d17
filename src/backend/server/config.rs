//! Store Selection
//!
//! Picks the chat store at startup from `ChatConfig`.
//!
//! With a `DATABASE_URL`, the server connects to PostgreSQL and runs the
//! migrations. Without one, or if the connection or migration fails, it
//! logs why and falls back to the in-memory store so the server still
//! starts.

use std::sync::Arc;

use crate::backend::store::{ChatStore, MemoryStore, PgStore};
use crate::shared::ChatConfig;

/// Load the store described by `config`
///
/// # Example
///
/// ```rust,no_run
/// use roomchat::backend::server::config::load_store;
/// use roomchat::shared::ChatConfig;
///
/// # async fn example() {
/// let store = load_store(&ChatConfig::default()).await;
/// # }
/// ```
pub async fn load_store(config: &ChatConfig) -> Arc<dyn ChatStore> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Chat state will be kept in memory.");
        return Arc::new(MemoryStore::new());
    };

    tracing::info!("Connecting to database...");

    match PgStore::connect(database_url).await {
        Ok(store) => {
            tracing::info!("Database connected and migrations applied");
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Failed to initialize database store: {}", e);
            tracing::warn!("Falling back to in-memory chat state.");
            Arc::new(MemoryStore::new())
        }
    }
}

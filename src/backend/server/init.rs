//! Server Initialization
//!
//! Builds the Axum application and the inactivity sweeper from one store
//! handle.
//!
//! # Initialization Process
//!
//! 1. Create `AppState` (Presence Registry + Message Log) over the store
//! 2. Create the router with all routes and middleware
//! 3. Spawn the sweeper over the same services (see [`start_sweeper`])

use std::sync::Arc;

use axum::Router;
use tokio::task::JoinHandle;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::backend::store::ChatStore;
use crate::backend::sweeper::Sweeper;
use crate::shared::ChatConfig;

/// Create the Axum application over `store`
pub fn create_app(store: Arc<dyn ChatStore>) -> Router<()> {
    create_router(AppState::new(store))
}

/// Build the sweeper for `store` using the configured interval and timeout
pub fn build_sweeper(store: Arc<dyn ChatStore>, config: &ChatConfig) -> Sweeper {
    let state = AppState::new(store);
    Sweeper::new(
        state.presence,
        state.messages,
        config.sweep_interval,
        config.idle_timeout,
    )
}

/// Spawn the sweeper as a background task
///
/// The returned handle should be aborted on shutdown.
pub fn start_sweeper(store: Arc<dyn ChatStore>, config: &ChatConfig) -> JoinHandle<()> {
    let handle = build_sweeper(store, config).spawn();
    tracing::info!("Inactivity sweeper scheduled");
    handle
}

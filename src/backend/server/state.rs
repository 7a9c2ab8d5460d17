//! Application State Management
//!
//! `AppState` is the single state container handed to the Axum router. It
//! owns the two chat services, both built on the same store handle, and
//! implements `FromRef` so handlers can extract just the service they need.
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::extract::State;
//! use roomchat::backend::presence::PresenceRegistry;
//!
//! async fn handler(State(presence): State<PresenceRegistry>) {
//!     let _ = presence.list().await;
//! }
//! ```

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::messages::MessageLog;
use crate::backend::presence::PresenceRegistry;
use crate::backend::store::ChatStore;

#[derive(Clone)]
pub struct AppState {
    /// Presence Registry (participants)
    pub presence: PresenceRegistry,

    /// Message Log
    pub messages: MessageLog,
}

impl AppState {
    /// Build both services over one shared store handle
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        let messages = MessageLog::new(store.clone());
        let presence = PresenceRegistry::new(store, messages.clone());
        Self { presence, messages }
    }
}

impl FromRef<AppState> for PresenceRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.presence.clone()
    }
}

impl FromRef<AppState> for MessageLog {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.messages.clone()
    }
}

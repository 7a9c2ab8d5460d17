//! roomchat - Main Library
//!
//! A small polling chat backend. Participants log in with a display name,
//! post broadcast or private messages, send heartbeats, and are evicted by a
//! background sweeper once they go quiet.
//!
//! # Module Structure
//!
//! - **`shared`** - Store- and transport-independent types
//!   - `Message`, `MessageKind` and the audience rules
//!   - `Participant`
//!   - Input normalization, clock helpers, `ChatConfig`
//!
//! - **`backend`** - The server
//!   - Axum router and handlers
//!   - Presence Registry, Message Log, inactivity sweeper
//!   - `ChatStore` with PostgreSQL (`sqlx`) and in-memory implementations
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use roomchat::backend::server::{create_app, start_sweeper};
//! use roomchat::backend::store::MemoryStore;
//! use roomchat::shared::ChatConfig;
//!
//! # async fn example() {
//! let config = ChatConfig::default();
//! let store = Arc::new(MemoryStore::new());
//! let _sweeper = start_sweeper(store.clone(), &config);
//! let app = create_app(store);
//! // Serve `app` with axum::serve
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The store handle is an `Arc<dyn ChatStore>` shared by every handler and
//! the sweeper. Each store call is atomic on its own; nothing spans two
//! calls.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

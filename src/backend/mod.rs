//! Backend Module
//!
//! All server-side code: an Axum HTTP server over a chat store, plus the
//! inactivity sweeper.
//!
//! # Architecture
//!
//! - **`server`** - Application state, store selection, app construction
//! - **`routes`** - Router assembly and middleware
//! - **`presence`** - Presence Registry and `/participants`, `/status`
//! - **`messages`** - Message Log and `/messages`
//! - **`sweeper`** - Periodic eviction of idle participants
//! - **`store`** - `ChatStore` trait with PostgreSQL and in-memory backends
//! - **`middleware`** - `user` header extraction
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs       - Module exports and documentation
//! ├── main.rs      - Server binary
//! ├── server/      - State and initialization
//! ├── routes/      - Route configuration
//! ├── presence/    - Participants and heartbeats
//! ├── messages/    - Message log
//! ├── sweeper/     - Inactivity sweeper
//! ├── store/       - Persistence
//! ├── middleware/  - Request extractors
//! └── error/       - Error types
//! ```

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Presence Registry
pub mod presence;

/// Message Log
pub mod messages;

/// Inactivity sweeper
pub mod sweeper;

/// Chat store abstraction and implementations
pub mod store;

/// Request extractors
pub mod middleware;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState};

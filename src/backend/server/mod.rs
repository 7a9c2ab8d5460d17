//! Server Module
//!
//! Server-side setup: application state, store selection and app
//! construction.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Store selection from ChatConfig
//! └── init.rs   - App and sweeper construction
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `ChatConfig::from_env()`
//! 2. **Store**: `load_store` picks PostgreSQL or the in-memory store
//! 3. **Sweeper**: `start_sweeper` spawns the inactivity sweeper
//! 4. **Router**: `create_app` wires routes and middleware
//!
//! The store handle is created once and passed into both the router state
//! and the sweeper; nothing is global.

/// Application state management
pub mod state;

/// Store selection
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::load_store;
pub use init::{build_sweeper, create_app, start_sweeper};
pub use state::AppState;

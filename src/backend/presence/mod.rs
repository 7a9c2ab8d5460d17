//! Presence Module
//!
//! The Presence Registry and its HTTP handlers.
//!
//! ```text
//! presence/
//! ├── mod.rs      - Module exports
//! ├── registry.rs - PresenceRegistry service
//! └── handlers.rs - /participants and /status handlers
//! ```

pub mod handlers;
pub mod registry;

pub use handlers::{heartbeat, list_participants, register_participant};
pub use registry::PresenceRegistry;

//! Shared Module
//!
//! Chat types and input rules that do not depend on the HTTP server or on
//! any particular store: messages, participants, normalization, clock
//! helpers and configuration.

/// Message data structure and audience rules
pub mod message;

/// Participant record
pub mod participant;

/// Shared error types
pub mod error;

/// Markup stripping and required-field checks
pub mod normalize;

/// Wall-clock helpers
pub mod clock;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use message::{Message, MessageKind, BROADCAST_RECIPIENT};
pub use participant::Participant;
pub use error::SharedError;
pub use config::{ChatConfig, ChatConfigBuilder, ConfigError};

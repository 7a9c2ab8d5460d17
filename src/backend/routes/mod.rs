//! Route Configuration Module
//!
//! All HTTP routes of the chat server live in [`router`]; handlers stay in
//! the `presence` and `messages` modules.

/// Main router creation
pub mod router;

// Re-export commonly used functions
pub use router::create_router;

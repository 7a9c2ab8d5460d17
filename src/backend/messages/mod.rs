//! Messages Module
//!
//! The append-only Message Log and its HTTP handlers.
//!
//! ```text
//! messages/
//! ├── mod.rs      - Module exports
//! ├── log.rs      - MessageLog service and limit parsing
//! └── handlers.rs - POST/GET /messages
//! ```

pub mod handlers;
pub mod log;

pub use handlers::{get_messages, post_message};
pub use log::{parse_limit, MessageLog};

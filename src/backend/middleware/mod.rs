//! Middleware Module
//!
//! Request-processing helpers shared by the chat handlers.
//!
//! - **`user`** - extractor for the normalized `user` header

pub mod user;

pub use user::{UserHeader, USER_HEADER};

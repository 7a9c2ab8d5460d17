//! Integration tests
//!
//! Endpoint, sweeper and store tests driven through the public API

mod sweeper_test;

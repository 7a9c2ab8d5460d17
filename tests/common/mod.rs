//! Common test utilities and helpers
//!
//! - Test server over a fresh in-memory store
//! - `user` header helpers
//! - A store double whose operations can be made to fail

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use roomchat::backend::server::create_app;
use roomchat::backend::store::{ChatStore, MemoryStore, MessageWindow, StoreError};
use roomchat::shared::{Message, Participant};

/// Create a test server and return the store behind it
pub fn test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = TestServer::new(create_app(store.clone())).expect("Failed to create test server");
    (server, store)
}

/// `user` header carrying `name`
pub fn user(name: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("user"),
        HeaderValue::from_str(name).expect("header-safe name"),
    )
}

/// Register `name` through the API and check it succeeded
pub async fn login(server: &TestServer, name: &str) {
    let response = server
        .post("/participants")
        .json(&serde_json::json!({ "name": name }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "login {name}");
}

/// Post a message as `from`, returning the status code
pub async fn say(server: &TestServer, from: &str, to: &str, text: &str, kind: &str) -> StatusCode {
    let (name, value) = user(from);
    server
        .post("/messages")
        .add_header(name, value)
        .json(&serde_json::json!({ "to": to, "text": text, "type": kind }))
        .await
        .status_code()
}

/// Memory store with switchable failures
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_eviction: AtomicBool,
    pub fail_appends: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_eviction(&self, fail: bool) {
        self.fail_eviction.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ChatStore for FlakyStore {
    async fn insert_participant(&self, participant: &Participant) -> Result<bool, StoreError> {
        self.inner.insert_participant(participant).await
    }

    async fn contains_participant(&self, name: &str) -> Result<bool, StoreError> {
        self.inner.contains_participant(name).await
    }

    async fn touch_participant(&self, name: &str, at_ms: i64) -> Result<bool, StoreError> {
        self.inner.touch_participant(name, at_ms).await
    }

    async fn list_participants(&self) -> Result<Vec<Participant>, StoreError> {
        self.inner.list_participants().await
    }

    async fn remove_idle_participants(&self, cutoff_ms: i64) -> Result<Vec<String>, StoreError> {
        if self.fail_eviction.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("connection reset"));
        }
        self.inner.remove_idle_participants(cutoff_ms).await
    }

    async fn append_message(&self, message: &Message) -> Result<(), StoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("write timed out"));
        }
        self.inner.append_message(message).await
    }

    async fn visible_messages(
        &self,
        viewer: &str,
        window: MessageWindow,
    ) -> Result<Vec<Message>, StoreError> {
        self.inner.visible_messages(viewer, window).await
    }
}

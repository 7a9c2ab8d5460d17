//! Inactivity sweeper integration tests
//!
//! The sweeper is driven directly with a chosen "now" so no test has to
//! wait out the idle timeout.

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use roomchat::backend::error::BackendError;
use roomchat::backend::server::{build_sweeper, create_app};
use roomchat::backend::store::ChatStore;
use roomchat::shared::clock::now_millis;
use roomchat::shared::{ChatConfig, Message, MessageKind, Participant, BROADCAST_RECIPIENT};

use crate::common::{login, say, test_server, user, FlakyStore};

fn config() -> ChatConfig {
    ChatConfig::builder()
        .sweep_interval(Duration::from_secs(15))
        .idle_timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_idle_participant_is_swept_with_departure_notice() {
    let (server, store) = test_server();
    login(&server, "Ana").await;
    assert_eq!(say(&server, "Ana", "all", "hi", "message").await, StatusCode::CREATED);

    let sweeper = build_sweeper(store.clone(), &config());
    let report = sweeper.sweep_once(now_millis() + 11_000).await.unwrap();
    assert_eq!(report.evicted, vec!["Ana".to_string()]);

    let participants: Vec<Participant> = server.get("/participants").await.json();
    assert!(participants.is_empty());

    let (name, value) = user("Bia");
    let messages: Vec<Message> = server.get("/messages").add_header(name, value).await.json();
    let departures: Vec<&Message> = messages
        .iter()
        .filter(|m| m.kind == MessageKind::Status && m.text == "left the room...")
        .collect();
    assert_eq!(departures.len(), 1);
    assert_eq!(departures[0].from, "Ana");
    assert_eq!(departures[0].to, BROADCAST_RECIPIENT);

    // Evicted participants can no longer post
    assert_eq!(
        say(&server, "Ana", "all", "still here?", "message").await,
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn test_active_participant_survives_sweep() {
    let (server, store) = test_server();
    login(&server, "Ana").await;

    let sweeper = build_sweeper(store.clone(), &config());
    let report = sweeper.sweep_once(now_millis() + 5_000).await.unwrap();
    assert!(report.evicted.is_empty());

    let participants: Vec<Participant> = server.get("/participants").await.json();
    assert_eq!(participants.len(), 1);
}

#[tokio::test]
async fn test_only_idle_participants_are_swept() {
    let (server, store) = test_server();
    login(&server, "Ana").await;
    login(&server, "Bia").await;

    let later = now_millis() + 11_000;
    store.touch_participant("Bia", later).await.unwrap();

    let sweeper = build_sweeper(store.clone(), &config());
    let report = sweeper.sweep_once(later).await.unwrap();
    assert_eq!(report.evicted, vec!["Ana".to_string()]);

    let participants: Vec<Participant> = server.get("/participants").await.json();
    assert_eq!(participants, vec![Participant::new("Bia", later)]);
}

#[tokio::test]
async fn test_swept_name_can_log_in_again() {
    let (server, store) = test_server();
    login(&server, "Ana").await;

    build_sweeper(store.clone(), &config())
        .sweep_once(now_millis() + 11_000)
        .await
        .unwrap();

    login(&server, "Ana").await;
}

#[tokio::test]
async fn test_failed_eviction_is_reported_and_next_cycle_recovers() {
    let store = Arc::new(FlakyStore::new());
    let server = TestServer::new(create_app(store.clone())).unwrap();
    login(&server, "Ana").await;

    let sweeper = build_sweeper(store.clone(), &config());
    store.set_fail_eviction(true);
    assert_matches!(
        sweeper.sweep_once(now_millis() + 11_000).await,
        Err(BackendError::StoreError(_))
    );

    let participants: Vec<Participant> = server.get("/participants").await.json();
    assert_eq!(participants.len(), 1);

    store.set_fail_eviction(false);
    let report = sweeper.sweep_once(now_millis() + 11_000).await.unwrap();
    assert_eq!(report.evicted, vec!["Ana".to_string()]);
}

#[tokio::test]
async fn test_failed_notice_does_not_undo_eviction() {
    let store = Arc::new(FlakyStore::new());
    let server = TestServer::new(create_app(store.clone())).unwrap();
    login(&server, "Ana").await;

    store.set_fail_appends(true);
    let report = build_sweeper(store.clone(), &config())
        .sweep_once(now_millis() + 11_000)
        .await
        .unwrap();
    assert_eq!(report.evicted, vec!["Ana".to_string()]);
    assert_eq!(report.failed_notices, vec!["Ana".to_string()]);

    let participants: Vec<Participant> = server.get("/participants").await.json();
    assert!(participants.is_empty());
}

#[tokio::test]
async fn test_store_failure_surfaces_as_500() {
    let store = Arc::new(FlakyStore::new());
    let server = TestServer::new(create_app(store.clone())).unwrap();

    store.set_fail_appends(true);
    let response = server
        .post("/participants")
        .json(&serde_json::json!({ "name": "Ana" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "store unavailable: write timed out");
}

#[tokio::test]
async fn test_spawned_sweeper_runs_on_its_interval() {
    let (server, store) = test_server();
    login(&server, "Ana").await;

    let config = ChatConfig::builder()
        .sweep_interval(Duration::from_millis(200))
        .idle_timeout(Duration::from_millis(1))
        .build()
        .unwrap();

    // Make Ana idle by wall clock before the first tick fires
    std::thread::sleep(Duration::from_millis(5));

    let handle = build_sweeper(store.clone(), &config).spawn();
    tokio::time::sleep(Duration::from_millis(450)).await;
    handle.abort();

    let participants: Vec<Participant> = server.get("/participants").await.json();
    assert!(participants.is_empty());
}

//! Presence Handlers
//!
//! - `POST /participants` - log in with a display name
//! - `GET /participants` - list everyone currently in the room
//! - `POST /status` - heartbeat for the participant named in `user`

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::registry::PresenceRegistry;
use crate::backend::error::BackendError;
use crate::backend::middleware::UserHeader;
use crate::shared::clock::now_millis;
use crate::shared::normalize::required_text;
use crate::shared::Participant;

/// Body of `POST /participants`
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
}

/// Log in
///
/// # Errors
///
/// * `422 Unprocessable Entity` - missing, non-string or empty `name`
/// * `409 Conflict` - the name is already in the room
/// * `500 Internal Server Error` - store failure
///
/// # Example Request
///
/// ```http
/// POST /participants HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Ana" }
/// ```
pub async fn register_participant(
    State(presence): State<PresenceRegistry>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(request) = payload?;
    let name = required_text("name", request.name.as_deref())?;

    presence.register(&name, now_millis()).await?;
    Ok(StatusCode::CREATED)
}

pub async fn list_participants(
    State(presence): State<PresenceRegistry>,
) -> Result<Json<Vec<Participant>>, BackendError> {
    Ok(Json(presence.list().await?))
}

/// Heartbeat
///
/// A missing `user` header is treated like an unknown participant.
pub async fn heartbeat(
    State(presence): State<PresenceRegistry>,
    UserHeader(user): UserHeader,
) -> Result<StatusCode, BackendError> {
    let name = user.ok_or_else(|| BackendError::not_found("user header is required"))?;
    presence.heartbeat(&name, now_millis()).await?;
    Ok(StatusCode::OK)
}

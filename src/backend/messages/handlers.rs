//! Message HTTP Handlers
//!
//! `POST /messages` and `GET /messages`. Both identify the caller through
//! the `user` header.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::log::{parse_limit, MessageLog};
use crate::backend::error::BackendError;
use crate::backend::middleware::UserHeader;
use crate::backend::presence::PresenceRegistry;
use crate::shared::clock::{clock_time, now_millis};
use crate::shared::normalize::required_text;
use crate::shared::{Message, MessageKind};

/// Body of `POST /messages`
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation error naming it.
#[derive(Debug, Default, Deserialize)]
pub struct PostMessageRequest {
    pub to: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Query string of `GET /messages`
#[derive(Debug, Default, Deserialize)]
pub struct MessagesQuery {
    pub limit: Option<String>,
}

/// Post a broadcast or private message
///
/// # Errors
///
/// * `422 Unprocessable Entity` - missing/empty `to` or `text`, `type` other
///   than `message`/`private_message`, or a `user` header that is missing or
///   names nobody in the room
/// * `500 Internal Server Error` - store failure
pub async fn post_message(
    State(presence): State<PresenceRegistry>,
    State(messages): State<MessageLog>,
    UserHeader(user): UserHeader,
    payload: Result<Json<PostMessageRequest>, JsonRejection>,
) -> Result<StatusCode, BackendError> {
    let Json(request) = payload?;

    let to = required_text("to", request.to.as_deref())?;
    let text = required_text("text", request.text.as_deref())?;
    let kind = request
        .kind
        .as_deref()
        .ok_or_else(|| BackendError::validation("type is required"))?;
    let kind = MessageKind::from_client(kind)?;

    let from = user.ok_or_else(|| BackendError::validation("user header is required"))?;
    if !presence.contains(&from).await? {
        tracing::warn!("Message from unknown participant rejected: {}", from);
        return Err(BackendError::validation(format!("{from} is not in the room")));
    }

    let message = Message::new(from, to, text, kind, clock_time(now_millis()));
    messages.append(&message).await?;
    tracing::debug!("{} -> {} ({})", message.from, message.to, message.kind);

    Ok(StatusCode::CREATED)
}

/// List the messages the caller may read
///
/// `?limit=N` returns only the N most recent, oldest first.
///
/// # Errors
///
/// * `422 Unprocessable Entity` - `limit` not a positive integer, or no
///   `user` header
pub async fn get_messages(
    State(messages): State<MessageLog>,
    UserHeader(user): UserHeader,
    query: Result<Query<MessagesQuery>, QueryRejection>,
) -> Result<Json<Vec<Message>>, BackendError> {
    let Query(query) = query?;
    let limit = parse_limit(query.limit.as_deref())?;
    let viewer = user.ok_or_else(|| BackendError::validation("user header is required"))?;

    let visible = messages.query(&viewer, limit).await?;
    Ok(Json(visible))
}

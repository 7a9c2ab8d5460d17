//! Message Data Structure
//!
//! This module defines the chat `Message` record, its `MessageKind`, and the
//! audience rules that decide which viewer may read which message.
//!
//! Messages are immutable once created. The wire shape matches what polling
//! clients expect:
//!
//! ```json
//! { "from": "Ana", "to": "all", "text": "hi", "type": "message", "time": "14:03:22" }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Recipient value meaning "every participant"
pub const BROADCAST_RECIPIENT: &str = "all";

/// Text of the status notice appended when a participant logs in
pub const ENTRY_NOTICE: &str = "joined the room...";

/// Text of the status notice appended when a participant is swept out
pub const DEPARTURE_NOTICE: &str = "left the room...";

/// The three kinds of chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Public message, readable by everyone
    Message,
    /// Direct message between two participants
    PrivateMessage,
    /// System-generated entry/departure notice
    Status,
}

impl MessageKind {
    /// Storage and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
            Self::Status => "status",
        }
    }

    /// Parse a kind sent by a client.
    ///
    /// Clients may only post `message` or `private_message`; `status` is
    /// reserved for the server. Only surrounding whitespace is tolerated,
    /// markup around the value is rejected.
    pub fn from_client(value: &str) -> Result<Self, SharedError> {
        match value.trim().parse::<Self>()? {
            Self::Status => Err(SharedError::unknown_kind(value)),
            kind => Ok(kind),
        }
    }
}

impl FromStr for MessageKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            "status" => Ok(Self::Status),
            other => Err(SharedError::unknown_kind(other)),
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single chat message
///
/// # Fields
/// * `from` - Sender name
/// * `to` - `"all"` or a participant name
/// * `text` - Normalized, non-empty body
/// * `kind` - Serialized as `type`
/// * `time` - `HH:MM:SS` in server local time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub time: String,
}

impl Message {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
        kind: MessageKind,
        time: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
            kind,
            time: time.into(),
        }
    }

    /// Status notice announcing that `name` logged in
    pub fn entry(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self::new(name, BROADCAST_RECIPIENT, ENTRY_NOTICE, MessageKind::Status, time)
    }

    /// Status notice announcing that `name` was evicted
    pub fn departure(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self::new(name, BROADCAST_RECIPIENT, DEPARTURE_NOTICE, MessageKind::Status, time)
    }

    /// Audience rule for the full-history query.
    ///
    /// Every broadcast-kind message is included, whoever it is addressed to.
    pub fn visible_in_history(&self, viewer: &str) -> bool {
        self.to == BROADCAST_RECIPIENT
            || self.to == viewer
            || self.from == viewer
            || self.kind == MessageKind::Message
    }

    /// Audience rule for the most-recent-N query.
    ///
    /// Same audience as [`Message::visible_in_history`], plus every
    /// `status` notice whoever it is addressed to.
    pub fn visible_in_recent(&self, viewer: &str) -> bool {
        self.to == BROADCAST_RECIPIENT
            || self.to == viewer
            || self.from == viewer
            || matches!(self.kind, MessageKind::Message | MessageKind::Status)
    }
}

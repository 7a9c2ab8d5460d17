//! Participant record
//!
//! A participant is a registered display name plus the time it was last
//! seen. `last_status` is epoch milliseconds and goes over the wire as
//! `lastStatus`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    /// Unique, case-sensitive, already normalized
    pub name: String,
    /// Last login or heartbeat, epoch milliseconds
    #[serde(rename = "lastStatus")]
    pub last_status: i64,
}

impl Participant {
    pub fn new(name: impl Into<String>, last_status: i64) -> Self {
        Self {
            name: name.into(),
            last_status,
        }
    }
}

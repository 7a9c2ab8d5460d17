//! `user` Header Extractor
//!
//! Chat clients identify themselves with a free-text `user` header. There is
//! no authentication; the extractor only normalizes the value the same way
//! participant names are normalized at registration, so that lookups match.
//!
//! A missing, non-UTF-8 or blank header extracts as `None`. Each handler
//! decides what that means (422 for messages, 404 for heartbeats).

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, HeaderMap};

use crate::shared::normalize::strip_markup;

/// Name of the header carrying the participant name
pub const USER_HEADER: &str = "user";

/// Normalized value of the `user` header, if any
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserHeader(pub Option<String>);

impl UserHeader {
    /// Read and normalize the header from a header map
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let name = headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(strip_markup)
            .filter(|name| !name.is_empty());
        Self(name)
    }
}

impl<S> FromRequestParts<S> for UserHeader
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

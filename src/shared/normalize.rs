//! Input normalization
//!
//! Every free-text field a client sends (`name`, `to`, `text`, and the
//! `user` header) is stripped of markup and surrounding whitespace before it
//! is validated or stored.

use std::sync::LazyLock;

use regex::Regex;

use crate::shared::error::SharedError;

/// An opening, closing or self-closing tag. A bare `<` or `>` is text.
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[A-Za-z][^<>]*>").expect("markup pattern is valid")
});

/// Remove HTML/XML tags and trim surrounding whitespace.
///
/// Repeats until no tag is left, so `<<b>b>` does not collapse into `<b>`.
pub fn strip_markup(raw: &str) -> String {
    let mut cleaned = raw.to_string();
    while has_markup(&cleaned) {
        cleaned = MARKUP.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Whether `text` still contains something shaped like a tag
pub fn has_markup(text: &str) -> bool {
    MARKUP.is_match(text)
}

/// Normalize a required field, rejecting it if nothing is left
pub fn required_text(field: &str, raw: Option<&str>) -> Result<String, SharedError> {
    let raw = raw.ok_or_else(|| SharedError::validation(field, "is required"))?;
    let cleaned = strip_markup(raw);
    if cleaned.is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    Ok(cleaned)
}

//! Validators for project identifiers.

use crate::primitives::has_trimmed_whitespace;
use regex::Regex;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static PROJECT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9-]{4,28}[a-z0-9]$").unwrap());

static PROJECT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9 '!-]{4,30}$").unwrap());

/// Validates a project ID.
///
/// A valid project ID is 6 to 30 characters long, starts with a lowercase
/// letter, contains only lowercase letters, digits, and hyphens, and does
/// not end with a hyphen.
pub fn is_valid_project_id(id: &str) -> bool {
    if !(6..=30).contains(&id.len()) {
        return false;
    }
    if !has_trimmed_whitespace(id) {
        return false;
    }
    PROJECT_ID_RE.is_match(id)
}

/// Validates a project display name.
///
/// A valid display name is 4 to 30 characters long and contains only
/// letters, digits, spaces, single quotes, hyphens, and exclamation points.
/// Leading or trailing spaces are rejected even though spaces are otherwise
/// allowed.
pub fn is_valid_project_name(name: &str) -> bool {
    if !(4..=30).contains(&name.len()) {
        return false;
    }
    if !has_trimmed_whitespace(name) {
        return false;
    }
    PROJECT_NAME_RE.is_match(name)
}

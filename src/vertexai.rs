//! Validators for Vertex AI identifiers.

use crate::primitives::has_trimmed_whitespace;
use regex::Regex;
use std::sync::LazyLock;

// Model resource paths are shape-driven and owned by the resource module;
// re-exported here because callers working with Vertex AI expect to find it
// alongside the name validators.
pub use crate::resource::is_valid_vertex_model_resource_name;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static VERTEX_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]*$").unwrap());

/// Validates a Vertex AI model display name.
///
/// A valid model name starts with a letter, contains only letters, digits,
/// dashes, and underscores, and is at most 128 characters long. This covers
/// the user-chosen display name, not server-assigned numeric IDs or
/// publisher model IDs.
pub fn is_valid_vertex_model_name(name: &str) -> bool {
    if name.is_empty() || name.len() > 128 {
        return false;
    }
    if !has_trimmed_whitespace(name) {
        return false;
    }
    VERTEX_NAME_RE.is_match(name)
}

/// Validates a Vertex AI endpoint display name.
///
/// Endpoint names follow the same grammar as model names.
pub fn is_valid_vertex_endpoint_name(name: &str) -> bool {
    is_valid_vertex_model_name(name)
}

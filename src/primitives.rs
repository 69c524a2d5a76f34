//! Shared predicates applied by every identifier grammar.

/// Returns `true` when `s` carries no leading or trailing whitespace.
///
/// Every validator rejects accidental padding before applying its own
/// grammar; invalid padding is a rejection, never silently stripped.
pub fn has_trimmed_whitespace(s: &str) -> bool {
    !s.starts_with(char::is_whitespace) && !s.ends_with(char::is_whitespace)
}

/// Returns `true` when `s` is usable as a free-form resource path segment:
/// non-empty, no whitespace anywhere, and no `/` separator.
///
/// Deliberately looser than the platform-assigned grammars. Publishers and
/// model IDs inside a resource path are opaque external identifiers, not
/// names the platform hands out.
pub fn is_valid_path_segment(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '/')
}

//! Validators for Cloud Storage identifiers.

use crate::primitives::has_trimmed_whitespace;
use regex::Regex;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static BUCKET_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9._-]*[a-z0-9]$").unwrap());

// Dotted-quad names like 192.168.1.1 are reserved and must be rejected.
static IP_ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

/// Validates a Cloud Storage bucket name.
///
/// A valid bucket name:
/// - contains only lowercase letters, digits, dashes, underscores, and dots
/// - starts and ends with a letter or digit
/// - is 3 to 63 characters long; dotted names may run to 222 characters
///   total with each dot-separated component at most 63
/// - contains no consecutive dots
/// - does not look like an IP address
///
/// Format only — this does not check whether the name is available.
pub fn is_valid_bucket_name(name: &str) -> bool {
    if name.len() < 3 {
        return false;
    }
    if !has_trimmed_whitespace(name) {
        return false;
    }

    if name.contains('.') {
        if name.len() > 222 {
            return false;
        }
        if name.split('.').any(|part| part.len() > 63) {
            return false;
        }
        if name.contains("..") {
            return false;
        }
    } else if name.len() > 63 {
        return false;
    }

    if IP_ADDRESS_RE.is_match(name) {
        return false;
    }

    BUCKET_NAME_RE.is_match(name)
}

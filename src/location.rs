//! Validators for location identifiers: regions, zones, and `global`.

use crate::primitives::has_trimmed_whitespace;
use regex::Regex;
use std::sync::LazyLock;

// ─── Cached regexes ─────────────────────────────────────────────────────────

// Region codes are hyphen-separated lowercase words ending in digits,
// e.g. us-central1, europe-west4, northamerica-northeast1.
static REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(-[a-z]+)*[0-9]+$").unwrap());

// A zone is a region code plus a single lowercase zone letter, e.g. us-central1-a.
static ZONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+(-[a-z]+)*[0-9]+-[a-z]$").unwrap());

/// Validates a region identifier such as `us-central1` or `europe-west4`.
///
/// Syntax only — this does not check that the region exists or is available
/// for a given service.
pub fn is_valid_region(region: &str) -> bool {
    if region.is_empty() || region.len() > 100 {
        return false;
    }
    if !has_trimmed_whitespace(region) {
        return false;
    }
    REGION_RE.is_match(region)
}

/// Validates a zone identifier such as `us-central1-a`.
pub fn is_valid_zone(zone: &str) -> bool {
    if zone.is_empty() || zone.len() > 100 {
        return false;
    }
    if !has_trimmed_whitespace(zone) {
        return false;
    }
    ZONE_RE.is_match(zone)
}

/// Validates a location identifier: a valid region, a valid zone, or the
/// literal `global`.
pub fn is_valid_location(location: &str) -> bool {
    location == "global" || is_valid_region(location) || is_valid_zone(location)
}

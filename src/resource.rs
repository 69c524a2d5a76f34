//! Shape-driven validation of hierarchical resource paths.
//!
//! A resource path is accepted when it matches one of a fixed set of
//! *shapes*: ordered templates of literal collection names and variable
//! segments. The shape is selected by segment count, literal positions must
//! match exactly, and each variable segment is delegated to the validator
//! for its kind. Shapes within one validator have pairwise-distinct lengths,
//! so selection is unambiguous: once a length matches, a wrong literal is a
//! hard failure rather than a fall-through to another shape.

use crate::location::is_valid_location;
use crate::primitives::{has_trimmed_whitespace, is_valid_path_segment};
use crate::project::is_valid_project_id;

/// Grammar governing one variable path segment.
#[derive(Clone, Copy, Debug)]
enum SegmentKind {
    /// Platform-assigned project ID.
    Project,
    /// Region, zone, or the literal `global`.
    Location,
    /// Opaque external identifier: non-empty, no whitespace, no slash.
    Opaque,
}

/// One position in a path shape.
#[derive(Clone, Copy, Debug)]
enum Token {
    /// Fixed collection name, compared case-sensitively.
    Literal(&'static str),
    /// Variable segment delegated to the validator for its kind.
    Variable(SegmentKind),
}

use Token::{Literal, Variable};

const PROJECT_LOCATION_PARENT: &[Token] = &[
    Literal("projects"),
    Variable(SegmentKind::Project),
    Literal("locations"),
    Variable(SegmentKind::Location),
];

const MODEL_PATH: &[Token] = &[
    Literal("projects"),
    Variable(SegmentKind::Project),
    Literal("locations"),
    Variable(SegmentKind::Location),
    Literal("models"),
    Variable(SegmentKind::Opaque),
];

const PUBLISHER_MODEL_PATH: &[Token] = &[
    Literal("projects"),
    Variable(SegmentKind::Project),
    Literal("locations"),
    Variable(SegmentKind::Location),
    Literal("publishers"),
    Variable(SegmentKind::Opaque),
    Literal("models"),
    Variable(SegmentKind::Opaque),
];

fn segment_matches(kind: SegmentKind, segment: &str) -> bool {
    match kind {
        SegmentKind::Project => is_valid_project_id(segment),
        SegmentKind::Location => is_valid_location(segment),
        SegmentKind::Opaque => is_valid_path_segment(segment),
    }
}

/// Splits `path` on `/` and validates it against the shape whose length
/// equals the segment count. Short-circuits on the first failing position.
fn matches_any_shape(path: &str, shapes: &[&[Token]]) -> bool {
    if path.is_empty() || !has_trimmed_whitespace(path) {
        return false;
    }

    // Plain split, empty segments kept: a leading or trailing slash yields
    // an empty segment that can never match a literal or a segment grammar.
    let segments: Vec<&str> = path.split('/').collect();

    let Some(shape) = shapes.iter().find(|shape| shape.len() == segments.len()) else {
        return false;
    };

    segments
        .iter()
        .zip(shape.iter())
        .all(|(&segment, token)| match token {
            Token::Literal(expected) => segment == *expected,
            Token::Variable(kind) => segment_matches(*kind, segment),
        })
}

/// Validates a `projects/{project}/locations/{location}` parent path.
///
/// `{project}` must be a valid project ID and `{location}` a valid location.
/// Structure only — this does not check that the resource exists.
pub fn is_valid_project_location_parent(parent: &str) -> bool {
    matches_any_shape(parent, &[PROJECT_LOCATION_PARENT])
}

/// Validates a Vertex AI model resource name.
///
/// Accepted path structures:
/// - `projects/{project}/locations/{location}/models/{modelId}`
/// - `projects/{project}/locations/{location}/publishers/{publisher}/models/{modelId}`
///
/// `{project}` must be a valid project ID, `{location}` a valid location,
/// and `{publisher}` / `{modelId}` free-form path segments (non-empty, no
/// whitespace, no slash). Structure only — this does not check that the
/// resource exists.
pub fn is_valid_vertex_model_resource_name(path: &str) -> bool {
    matches_any_shape(path, &[MODEL_PATH, PUBLISHER_MODEL_PATH])
}

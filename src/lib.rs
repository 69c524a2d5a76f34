//! Syntactic validators for Google Cloud resource identifiers.
//!
//! Every validator is a pure `&str -> bool` predicate over one documented
//! naming grammar: project IDs and display names, locations (regions, zones,
//! and the literal `global`), Cloud Storage bucket names, Vertex AI model and
//! endpoint names, and hierarchical resource paths such as
//! `projects/{project}/locations/{location}`.
//!
//! Validation is syntax-only. Nothing here checks whether a resource exists,
//! performs I/O, or mutates its input — an identifier with stray whitespace
//! is rejected, never trimmed.
//!
//! # Quick Start
//!
//! ```rust
//! assert!(gcpvalidate::is_valid_project_id("my-project-123"));
//! assert!(gcpvalidate::is_valid_location("us-central1"));
//! assert!(!gcpvalidate::is_valid_bucket_name("192.168.1.1"));
//!
//! // Composite resource paths delegate each segment to its own grammar.
//! assert!(gcpvalidate::is_valid_project_location_parent(
//!     "projects/my-project-123/locations/us-central1"
//! ));
//! assert!(gcpvalidate::is_valid_vertex_model_resource_name(
//!     "projects/my-project-123/locations/global/publishers/google/models/gemini-2.0-flash"
//! ));
//! ```
//!
//! All validators may be called concurrently without coordination: compiled
//! patterns are process-wide immutable state, initialized lazily and never
//! written afterwards.

pub mod location;
pub mod primitives;
pub mod project;
pub mod resource;
pub mod storage;
pub mod vertexai;

// Re-export the validator surface at the crate root for convenience.
pub use location::{is_valid_location, is_valid_region, is_valid_zone};
pub use project::{is_valid_project_id, is_valid_project_name};
pub use resource::{is_valid_project_location_parent, is_valid_vertex_model_resource_name};
pub use storage::is_valid_bucket_name;
pub use vertexai::{is_valid_vertex_endpoint_name, is_valid_vertex_model_name};

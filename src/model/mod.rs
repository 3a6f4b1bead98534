//! Project model and its static schema.
//!
//! # Modules
//!
//! - `project`: the serde-backed project types persisted in `whatunga.json`
//! - `schema`: node kinds, borrowed node views and the child enumerator

pub mod project;
pub mod schema;

pub use project::{Project, PROJECT_FILE};
pub use schema::{children, ModelCollection, ModelObject, NodeKind, NodeRef, Scalar};

//! Path expressions for addressing nodes of the project model.
//!
//! # Supported Syntax
//!
//! - `name` - Plain segment: an object or scalar child
//! - `name[3]` - Numeric index into a collection
//! - `name[master]` - Named index: the element whose name attribute matches
//! - `name[1:3]`, `name[:]` - Range (parsed, reserved, never resolved)
//! - `a.b.c` - Segments are separated by dots; the empty path is the root
//!
//! # Examples
//!
//! ```text
//! config.templates.domain
//! hosts[master].servers[0].port-offset
//! server-groups[0].deployments[:]
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod resolver;

pub use ast::{Index, Number, Path, Range, Segment, SegmentKind};
pub use error::PathError;
pub use parser::parse;
pub use resolver::resolve;

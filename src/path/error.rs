//! Error types for path parsing, resolution and navigation.

use thiserror::Error;

/// Errors raised by the path engine.
///
/// Parse and resolve errors carry the whole path string first and the
/// offending segment second.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// A token matched none of the segment grammars.
    #[error("Invalid segment \"{1}\" in path \"{0}\"")]
    Parse(String, String),

    /// The segment names no declared child of its context.
    #[error("Unable to resolve path \"{0}\": Segment \"{1}\" not found.")]
    UnknownSegment(String, String),

    /// A collection was addressed without an index.
    #[error("Unable to resolve path \"{0}\": Missing index given for collection \"{1}\".")]
    MissingIndex(String, String),

    /// An index or range was applied to something other than a collection.
    #[error("Unable to resolve path \"{0}\": Segment \"{1}\" does not refer to a collection.")]
    WrongKind(String, String),

    #[error("Unable to resolve path \"{0}\": Index in segment \"{1}\" is out of bounds.")]
    IndexOutOfBounds(String, String),

    #[error("Unable to resolve path \"{0}\": Named index in segment \"{1}\" not found.")]
    NamedIndexNotFound(String, String),

    /// Range segments are reserved syntax.
    #[error("Unable to resolve path \"{0}\": Range in segment \"{1}\" not supported.")]
    RangeNotSupported(String, String),

    #[error("Already at root")]
    NavigationAtRoot,

    #[error("No previous path")]
    NoPreviousPath,
}

impl PathError {
    /// The offending segment, for errors tied to one.
    pub fn segment(&self) -> Option<&str> {
        match self {
            PathError::Parse(_, segment)
            | PathError::UnknownSegment(_, segment)
            | PathError::MissingIndex(_, segment)
            | PathError::WrongKind(_, segment)
            | PathError::IndexOutOfBounds(_, segment)
            | PathError::NamedIndexNotFound(_, segment)
            | PathError::RangeNotSupported(_, segment) => Some(segment),
            PathError::NavigationAtRoot | PathError::NoPreviousPath => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PathError::UnknownSegment("foo".to_string(), "foo".to_string());
        assert_eq!(
            err.to_string(),
            r#"Unable to resolve path "foo": Segment "foo" not found."#
        );

        let err = PathError::Parse("foo[bar.".to_string(), "foo[bar".to_string());
        assert_eq!(err.to_string(), r#"Invalid segment "foo[bar" in path "foo[bar.""#);
        assert_eq!(err.segment(), Some("foo[bar"));
        assert_eq!(PathError::NoPreviousPath.segment(), None);
    }
}

//! Path expression parser.
//!
//! A path is split on `.` and every token is matched against the segment
//! grammars, most specific first:
//!
//! 1. range: `name[from:to]`, both bounds optional
//! 2. index: `name[42]` (numeric, any run of digits) or `name[master]` (named)
//! 3. plain: `name`
//!
//! Parsing is purely syntactic; nothing here knows about the project model.

use lazy_static::lazy_static;
use regex::Regex;

use super::ast::{Index, Number, Path, Range, Segment};
use super::error::PathError;

lazy_static! {
    static ref RANGE_SEGMENT: Regex =
        Regex::new(r"^([A-Za-z0-9_-]+)\[([0-9]*):([0-9]*)\]$").unwrap();
    static ref INDEX_SEGMENT: Regex =
        Regex::new(r"^([A-Za-z0-9_-]+)\[([A-Za-z0-9_-]+)\]$").unwrap();
    static ref PLAIN_SEGMENT: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

/// Parses a dotted path expression.
///
/// The empty string is the root path. Every other token must be a valid
/// segment; an empty token (`a..b`, a leading or trailing dot) is rejected.
///
/// # Example
///
/// ```
/// use whatunga::path::parser::parse;
///
/// let path = parse("hosts[master].servers[0].port-offset").unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "hosts[master].servers[0].port-offset");
/// assert!(parse("hosts[master").is_err());
/// ```
pub fn parse(text: &str) -> Result<Path, PathError> {
    if text.is_empty() {
        return Ok(Path::root());
    }

    text.split('.')
        .map(|token| parse_segment(text, token))
        .collect::<Result<Vec<_>, _>>()
        .map(Path::new)
}

fn parse_segment(text: &str, token: &str) -> Result<Segment, PathError> {
    if let Some(groups) = RANGE_SEGMENT.captures(token) {
        // An empty bound is open.
        let range = Range::bounds(Number::parse(&groups[2]), Number::parse(&groups[3]));
        return Ok(Segment::range(&groups[1], range));
    }

    if let Some(groups) = INDEX_SEGMENT.captures(token) {
        let index = match Number::parse(&groups[2]) {
            Some(number) => Index::Numeric(number),
            None => Index::Named(groups[2].to_string()),
        };
        return Ok(Segment::index(&groups[1], index));
    }

    if PLAIN_SEGMENT.is_match(token) {
        return Ok(Segment::plain(token));
    }

    Err(PathError::Parse(text.to_string(), token.to_string()))
}

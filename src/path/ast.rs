//! Segment and path types for model path expressions.

use std::fmt;
use std::str::FromStr;

use super::error::PathError;
use super::parser;

/// A decimal number as written in a path.
///
/// Keeps the source digits so `hosts[01]` prints back as written. A number
/// too large for `usize` has no value and never addresses an element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    digits: String,
    value: Option<usize>,
}

impl Number {
    /// Reads a non-empty run of ASCII digits.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self {
            digits: digits.to_string(),
            value: digits.parse().ok(),
        })
    }

    /// The numeric value, or `None` if it overflows `usize`.
    pub fn value(&self) -> Option<usize> {
        self.value
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl From<usize> for Number {
    fn from(value: usize) -> Self {
        Self {
            digits: value.to_string(),
            value: Some(value),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digits)
    }
}

/// Index of a collection element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Index {
    /// Position in the collection (`hosts[0]`)
    Numeric(Number),
    /// Value of the element's name attribute (`hosts[master]`)
    Named(String),
}

impl Index {
    pub fn position(position: usize) -> Self {
        Index::Numeric(Number::from(position))
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::Numeric(number) => write!(f, "{}", number),
            Index::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Slice bounds (`[from:to]`). Either bound may be left open.
///
/// Ranges are accepted by the parser but never resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub from: Option<Number>,
    pub to: Option<Number>,
}

impl Range {
    pub fn new(from: Option<usize>, to: Option<usize>) -> Self {
        Self::bounds(from.map(Number::from), to.map(Number::from))
    }

    pub fn bounds(from: Option<Number>, to: Option<Number>) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(from) = &self.from {
            write!(f, "{}", from)?;
        }
        write!(f, ":")?;
        if let Some(to) = &self.to {
            write!(f, "{}", to)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// `name`
    Plain,
    /// `name[index]`
    Index(Index),
    /// `name[from:to]`
    Range(Range),
}

/// One dot-delimited unit of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: String,
    kind: SegmentKind,
}

impl Segment {
    pub fn new(name: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn plain(name: impl Into<String>) -> Self {
        Self::new(name, SegmentKind::Plain)
    }

    pub fn index(name: impl Into<String>, index: Index) -> Self {
        Self::new(name, SegmentKind::Index(index))
    }

    pub fn range(name: impl Into<String>, range: Range) -> Self {
        Self::new(name, SegmentKind::Range(range))
    }

    /// The tag this segment addresses.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &SegmentKind {
        &self.kind
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        match &self.kind {
            SegmentKind::Plain => Ok(()),
            SegmentKind::Index(index) => write!(f, "[{}]", index),
            SegmentKind::Range(range) => write!(f, "[{}]", range),
        }
    }
}

/// A path into the project model, in root-to-leaf order.
///
/// The empty path denotes the root. Paths are never modified in place;
/// `append` and `parent` return new values.
///
/// # Example
///
/// ```
/// use whatunga::path::Path;
///
/// let host: Path = "hosts[master]".parse().unwrap();
/// let server: Path = "servers[0].jvm".parse().unwrap();
/// let full = host.append(&server);
/// assert_eq!(full.to_string(), "hosts[master].servers[0].jvm");
/// assert_eq!(host.to_string(), "hosts[master]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns a new path with the segments of `other` after the segments of `self`.
    pub fn append(&self, other: &Path) -> Path {
        let mut segments = Vec::with_capacity(self.len() + other.len());
        segments.extend_from_slice(&self.segments);
        segments.extend_from_slice(&other.segments);
        Path::new(segments)
    }

    /// Returns the path without its last segment, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        let (_, parent) = self.segments.split_last()?;
        Some(Path::new(parent.to_vec()))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse(s)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_display() {
        assert_eq!(Segment::plain("name").to_string(), "name");
        assert_eq!(
            Segment::index("hosts", Index::position(3)).to_string(),
            "hosts[3]"
        );
        assert_eq!(
            Segment::index("hosts", Index::Named("master".to_string())).to_string(),
            "hosts[master]"
        );
        assert_eq!(
            Segment::range("users", Range::new(None, None)).to_string(),
            "users[:]"
        );
        assert_eq!(
            Segment::range("users", Range::new(Some(1), Some(4))).to_string(),
            "users[1:4]"
        );
    }

    #[test]
    fn test_root_displays_empty() {
        assert_eq!(Path::root().to_string(), "");
        assert!(Path::root().is_empty());
    }

    #[test]
    fn test_append_to_empty() {
        let foo = Path::new(vec![Segment::plain("foo")]);
        assert_eq!(Path::root().append(&foo), foo);
    }

    #[test]
    fn test_append_leaves_operands_untouched() {
        let foo = Path::new(vec![Segment::plain("foo")]);
        let bar = Path::new(vec![Segment::plain("bar")]);
        let foobar = foo.append(&bar);
        assert_eq!(foobar.to_string(), "foo.bar");
        assert_eq!(foo.len(), 1);
        assert_eq!(bar.len(), 1);
    }

    #[test]
    fn test_parent() {
        let path = Path::new(vec![Segment::plain("config"), Segment::plain("templates")]);
        assert_eq!(path.parent().unwrap().to_string(), "config");
        assert_eq!(path.parent().unwrap().parent(), Some(Path::root()));
        assert_eq!(Path::root().parent(), None);
    }
}

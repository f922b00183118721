//! Dotted paths addressing a location inside a nested value.
//!
//! A path is a sequence of segments. Each segment is either a field name
//! (for records) or an index (for sequences). The text form joins segments
//! with `.`; a segment whose first character is an ASCII digit is an index,
//! anything else is a field name. The empty string is the root.
//!
//! There is no escaping: field names containing `.` or starting with a digit
//! cannot be addressed.
//!
//! # Example
//!
//! ```
//! use structedit::{Path, Segment};
//!
//! let path: Path = "Employees.1.Name".parse().unwrap();
//! assert_eq!(path.segments()[1], Segment::Index(1));
//! assert_eq!(path.to_string(), "Employees.1.Name");
//! assert_eq!(path, Path::root().field("Employees").index(1).field("Name"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EditError;

/// A single step in a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Record field access by name.
    Field(String),
    /// Sequence element access by position.
    Index(usize),
}

impl Segment {
    /// Create a field-name segment.
    #[inline]
    pub fn field(name: impl Into<String>) -> Self {
        Segment::Field(name.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Segment::Index(i)
    }

    /// Decode one piece of path text.
    ///
    /// A piece starting with an ASCII digit must parse entirely as an index.
    pub fn parse(piece: &str) -> Result<Self, EditError> {
        if piece.starts_with(|c: char| c.is_ascii_digit()) {
            piece
                .parse()
                .map(Segment::Index)
                .map_err(|_| EditError::MalformedIndex {
                    segment: piece.to_owned(),
                })
        } else {
            Ok(Segment::Field(piece.to_owned()))
        }
    }

    #[inline]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Segment::Field(name) => Some(name),
            Segment::Index(_) => None,
        }
    }

    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Field(_) => None,
            Segment::Index(i) => Some(*i),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Segment::Field(s.to_owned())
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Segment::Field(s)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Segment::Index(i)
    }
}

/// A path from the root of a value to one of its locations.
///
/// The empty path addresses the root itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The root path (no segments).
    #[inline]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Parse path text. Equivalent to `text.parse::<Path>()`.
    pub fn parse(text: &str) -> Result<Self, EditError> {
        if text.is_empty() {
            return Ok(Self::root());
        }
        text.split('.')
            .map(Segment::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Append a field segment (builder).
    #[inline]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.0.push(Segment::Field(name.into()));
        self
    }

    /// Append an index segment (builder).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Segment::Index(i));
        self
    }

    /// A copy of this path with `segment` appended.
    pub fn with_appended(&self, segment: Segment) -> Path {
        let mut out = self.clone();
        out.0.push(segment);
        out
    }

    /// A copy of this path without its last segment. The root stays root.
    pub fn with_last_removed(&self) -> Path {
        let mut out = self.clone();
        out.0.pop();
        out
    }

    #[inline]
    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }

    /// Shorten the path to `len` segments. No-op if already shorter.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Push `segment`, run `f` with the extended path, then restore the path
    /// to exactly its previous contents.
    ///
    /// Anything `f` pushes without popping is discarded as well.
    pub fn visiting<R>(&mut self, segment: Segment, f: impl FnOnce(&mut Path) -> R) -> R {
        let depth = self.0.len();
        self.0.push(segment);
        let out = f(self);
        self.0.truncate(depth);
        out
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Same as [`is_empty`](Self::is_empty).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Segment> {
        self.0.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path(segments)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Paths travel as their text form.
impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Path::parse(&text).map_err(serde::de::Error::custom)
    }
}

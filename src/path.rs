//! Locator paths for values in nested structures.
//!
//! This module provides [`ValuePath`] and [`PathSegment`] for building the
//! dotted/bracketed locators (e.g. `config.retries[2]`) that appear in
//! validation error messages. Paths carry no validation semantics of their
//! own; they exist purely so a failure can say precisely where it happened.

use std::fmt::{self, Display};

/// A single step of a [`ValuePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named field access (e.g. `retries`).
    Field(String),
    /// An array index access (e.g. `[2]`).
    Index(usize),
}

impl PathSegment {
    /// Creates a field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates an index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// The accumulated location of a value under check.
///
/// Checkers extend the path as they descend into arrays, maps and shapes,
/// so the failure that finally surfaces can render a full locator such as
/// `config.retries[2]`. Paths are immutable; the `push_*` methods return a
/// new path and leave the original untouched, which lets combinators hand
/// independent paths to each child they visit.
///
/// # Example
///
/// ```rust
/// use gatecheck::ValuePath;
///
/// let path = ValuePath::from_field("config")
///     .push_field("retries")
///     .push_index(2);
///
/// assert_eq!(path.to_string(), "config.retries[2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ValuePath {
    segments: Vec<PathSegment>,
}

impl ValuePath {
    /// Creates an empty path (the value itself, no descent yet).
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path rooted at a single named field.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if no segments have been pushed.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or `None` for the root path.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for ValuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
            }
        }
        Ok(())
    }
}

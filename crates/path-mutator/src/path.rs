//! Property path parsing.
//!
//! A property path is a `.`-separated list of segments, each a name with at
//! most one trailing `[digits]` index:
//!
//! ```text
//! path    = segment ('.' segment)*
//! segment = name ('[' digits ']')?
//! ```
//!
//! Parsing never fails. Tokens that do not end in a well-formed bracket group
//! are kept verbatim as names, so `a[x]`, `a[0]b` and `a[]` are plain keys.

use std::fmt;

/// One `.`-separated step of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedSegment {
    pub name: String,
    pub index: Option<usize>,
}

impl ParsedSegment {
    pub fn key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
        }
    }
}

impl fmt::Display for ParsedSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(index) = self.index {
            write!(f, "[{index}]")?;
        }
        Ok(())
    }
}

/// Split a single path token into its name and optional trailing index.
///
/// Only the last bracket group is recognised, and only when it closes the
/// token and holds at least one ASCII digit. Indices too large for `usize`
/// saturate to `usize::MAX`.
///
/// # Example
///
/// ```
/// use path_mutator::{parse_segment, ParsedSegment};
///
/// assert_eq!(parse_segment("items[3]"), ParsedSegment::indexed("items", 3));
/// assert_eq!(parse_segment("items"), ParsedSegment::key("items"));
/// assert_eq!(parse_segment("a[1][2]"), ParsedSegment::indexed("a[1]", 2));
/// assert_eq!(parse_segment("a[x]"), ParsedSegment::key("a[x]"));
/// assert_eq!(parse_segment("[0]"), ParsedSegment::indexed("", 0));
/// ```
pub fn parse_segment(token: &str) -> ParsedSegment {
    let Some(body) = token.strip_suffix(']') else {
        return ParsedSegment::key(token);
    };
    let Some(open) = body.rfind('[') else {
        return ParsedSegment::key(token);
    };
    let digits = &body[open + 1..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return ParsedSegment::key(token);
    }
    let index = digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    });
    ParsedSegment::indexed(&body[..open], index)
}

/// A parsed property path. Always holds at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyPath {
    segments: Vec<ParsedSegment>,
}

impl PropertyPath {
    /// Parse a property path.
    ///
    /// The empty string is a single segment with an empty name, and empty
    /// tokens between dots are empty keys.
    ///
    /// # Example
    ///
    /// ```
    /// use path_mutator::{ParsedSegment, PropertyPath};
    ///
    /// let path = PropertyPath::parse("a.b[2].c");
    /// assert_eq!(
    ///     path.segments(),
    ///     &[
    ///         ParsedSegment::key("a"),
    ///         ParsedSegment::indexed("b", 2),
    ///         ParsedSegment::key("c"),
    ///     ]
    /// );
    /// assert_eq!(path.to_string(), "a.b[2].c");
    /// ```
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path.split('.').map(parse_segment).collect(),
        }
    }

    pub fn segments(&self) -> &[ParsedSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`: a path has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The terminal segment and the intermediate segments leading to it.
    pub fn split_last(&self) -> (&ParsedSegment, &[ParsedSegment]) {
        match self.segments.split_last() {
            Some(split) => split,
            None => unreachable!("str::split yields at least one token"),
        }
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

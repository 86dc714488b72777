//! Structural location tracking for conversion errors
//!
//! A [`Location`] identifies a position inside a nested value as the path of
//! field names and array indices from the conversion root. Locations are
//! append-only values: extending one produces a new `Location`, so sibling
//! element conversions can branch from the same parent concurrently.

use std::fmt;

/// Path from the conversion root to the value currently being processed
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    segments: Vec<String>,
}

impl Location {
    /// The conversion root, with no segments
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a location from an ordered list of segments
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Produce a new location with `segment` appended
    ///
    /// Pure: the receiver is never mutated.
    pub fn extend<S: Into<String>>(&self, segment: S) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Produce a new location for the array element at `index`
    ///
    /// The segment is the decimal string of the zero-based index.
    pub fn extend_index(&self, index: usize) -> Self {
        self.extend(index.to_string())
    }

    /// Segments in root-to-leaf order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Location {
    /// Renders as a JSON path: `$` for the root, `.name` for field segments,
    /// `[i]` for all-digit index segments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                write!(f, "[{}]", segment)?;
            } else {
                write!(f, ".{}", segment)?;
            }
        }
        Ok(())
    }
}

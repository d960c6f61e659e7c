//! Word-index spans.

use std::fmt;

/// An inclusive range of 0-based word indices.
///
/// A span covers the words `start..=end`. Preterminals cover a single word,
/// so their spans are points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Index of the leftmost word covered (inclusive).
    pub start: usize,
    /// Index of the rightmost word covered (inclusive).
    pub end: usize,
}

impl Span {
    /// Create a span covering `start..=end`.
    ///
    /// Panics if `start > end`; spans are never empty.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// A span covering the single word at `index`.
    pub fn point(index: usize) -> Self {
        Self { start: index, end: index }
    }

    /// Number of words covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether the span covers exactly one word.
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Whether `other` covers exactly the same words.
    pub fn matches(&self, other: Span) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Whether `other` lies entirely within this span.
    pub fn contains(&self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.start, self.end)
    }
}

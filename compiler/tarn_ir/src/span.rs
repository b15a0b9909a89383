//! Source location spans.
//!
//! A span is a half-open byte range into one submitted source text. Every
//! token, AST node, and diagnostic locates itself with one.

use std::fmt;
use std::ops::Range;

/// A byte offset that does not fit in a `u32`.
///
/// Sources are limited to 4 GiB so spans stay 8 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpanError {
    pub offset: usize,
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "byte offset {} is past the {}-byte source limit",
            self.offset,
            u32::MAX
        )
    }
}

impl std::error::Error for SpanError {}

/// `start..end` in bytes; `end` is exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// For nodes that have no source text of their own.
    pub const DUMMY: Span = Span::point(0);

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`, such as end of input.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span::new(offset, offset)
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both, e.g. a binary expression from its operands.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The text this span covers in `source`.
    ///
    /// Empty if the span is out of bounds or splits a character.
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.to_range()).unwrap_or("")
    }
}

impl TryFrom<Range<usize>> for Span {
    type Error = SpanError;

    fn try_from(range: Range<usize>) -> Result<Self, Self::Error> {
        let narrow = |offset: usize| u32::try_from(offset).map_err(|_| SpanError { offset });
        Ok(Span::new(narrow(range.start)?, narrow(range.end)?))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

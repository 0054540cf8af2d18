//! Byte ranges into the input document.

use std::ops::Range;

/// A half-open byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create a span covering the character at `offset` in `source`.
    ///
    /// Offsets at or past the end of `source` yield an empty span at the end.
    pub fn at(source: &str, offset: usize) -> Self {
        let start = offset.min(source.len());
        let len = source[start..].chars().next().map_or(0, char::len_utf8);
        Self::new(start..start + len)
    }

    pub fn start(self) -> usize {
        self.start
    }

    pub fn end(self) -> usize {
        self.end
    }

    pub fn len(self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Convert a 1-based line/column pair into a byte offset in `source`.
///
/// The JSON decoder reports columns as byte counts within the line.
pub(crate) fn offset_of(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Byte offset of `part` within `source`.
///
/// `part` must be a subslice of `source`, as borrowed JSON values are.
pub(crate) fn offset_in(source: &str, part: &str) -> usize {
    (part.as_ptr() as usize)
        .saturating_sub(source.as_ptr() as usize)
        .min(source.len())
}

//! Highlight range classification
//!
//! A highlight is an inclusive interval over absolute byte addresses. It
//! knows nothing about rows or columns; the emitter asks about one address
//! at a time.

/// Inclusive address interval to emphasize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    pub start: u64,
    pub end: u64,
}

impl HighlightRange {
    pub fn new(start: u64, end: u64) -> Self {
        HighlightRange { start, end }
    }

    /// Whether `addr` falls inside the range, inclusive on both ends.
    ///
    /// A reversed range (`start > end`) contains nothing; that is a legal
    /// value, not an error.
    pub fn contains(&self, addr: u64) -> bool {
        self.start <= addr && addr <= self.end
    }
}

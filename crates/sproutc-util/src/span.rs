//! Source location tracking.
//!
//! A [`Span`] is a single point in source text, recorded as a 0-based line
//! and column. The front end never needs byte ranges — every diagnostic in
//! this system pins a single originating token, not a region — so unlike a
//! full compiler's `Span` this is a point, not an interval.

use std::fmt;

/// A source location: the line and column a token started at.
///
/// Both fields are 0-based, matching the lexer's own counters (a fresh
/// `Lexer` starts at line 0, column 0 and bumps `line` on every newline).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// The location a fresh lexer starts at.
    pub const START: Span = Span { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

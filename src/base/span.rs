//! Source positions and ranges.
//!
//! Two coordinate systems meet here. The code model speaks the parser's
//! convention: 1-indexed lines and columns, with an *inclusive* end column.
//! The editor protocol speaks 0-indexed positions with an exclusive end.

use std::fmt;

/// A position as reported by the parser (1-indexed line and column).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct CodePosition {
    /// 1-indexed line number
    pub line: u32,
    /// 1-indexed column (in characters)
    pub column: u32,
}

impl CodePosition {
    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<LineCol> for CodePosition {
    fn from(pos: LineCol) -> Self {
        Self {
            line: pos.line.saturating_add(1),
            column: pos.col.saturating_add(1),
        }
    }
}

impl fmt::Debug for CodePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for CodePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A source range as reported by the parser. Both ends are inclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct CodeRange {
    pub start: CodePosition,
    pub end: CodePosition,
}

impl CodeRange {
    /// Create a new range.
    #[inline]
    pub const fn new(start: CodePosition, end: CodePosition) -> Self {
        Self { start, end }
    }

    /// Shorthand for a range on one line: `line:start_col..=line:end_col`.
    #[inline]
    pub const fn on_line(line: u32, start_col: u32, end_col: u32) -> Self {
        Self {
            start: CodePosition::new(line, start_col),
            end: CodePosition::new(line, end_col),
        }
    }

    /// Check whether `pos` lies inside this range (ends included).
    pub fn contains(&self, pos: CodePosition) -> bool {
        self.start <= pos && pos <= self.end
    }

    /// Convert to a protocol range.
    pub fn to_lsp(&self) -> LspRange {
        LspRange {
            start: LineCol::new(
                self.start.line.saturating_sub(1),
                self.start.column.saturating_sub(1),
            ),
            end: LineCol::new(self.end.line.saturating_sub(1), self.end.column),
        }
    }

    /// Rough "size" of the range, used to pick the innermost of nested ranges.
    pub(crate) fn extent(&self) -> u64 {
        let lines = u64::from(self.end.line.saturating_sub(self.start.line));
        let cols = if lines == 0 {
            u64::from(self.end.column.saturating_sub(self.start.column))
        } else {
            u64::from(self.end.column) + 1000
        };
        lines * 1000 + cols
    }
}

impl fmt::Debug for CodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}..={:?}", self.start, self.end)
    }
}

/// A line and column position in the editor protocol.
///
/// Both line and column are 0-indexed internally, but displayed as 1-indexed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineCol {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }

    /// Get 1-indexed line number (for display).
    #[inline]
    pub const fn line_one_indexed(self) -> u32 {
        self.line.saturating_add(1)
    }

    /// Get 1-indexed column number (for display).
    #[inline]
    pub const fn col_one_indexed(self) -> u32 {
        self.col.saturating_add(1)
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_one_indexed(), self.col_one_indexed())
    }
}

/// A protocol range: 0-indexed, end exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LspRange {
    pub start: LineCol,
    pub end: LineCol,
}

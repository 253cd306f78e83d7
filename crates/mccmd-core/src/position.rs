//! Source positions and spans.

/// A position in a source line: byte offset plus 1-based line/column.
///
/// `offset` increases monotonically as the `Reader` advances; `column`
/// resets to 0 on every line break. `line` is tracked even though MCCMD
/// lines are parsed independently, because sub-parsing (see
/// `crate::subparser`) feeds synthetic multi-line payloads (decoded JSON
/// strings never contain real newlines, but embedded `rawtext` bodies may
/// span what the outer reader considers a single logical line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn start() -> Self {
        Position { offset: 0, line: 0, column: 0 }
    }

    /// Offsets this position by `n` characters on the same line. Used by
    /// sub-parsers translating an inner offset back into outer coordinates
    /// where no line break can occur.
    pub fn offset(&self, n: isize) -> Self {
        let offset = (self.offset as isize + n) as usize;
        let column = (self.column as isize + n) as u32;
        Position { offset, line: self.line, column }
    }
}

/// A half-open `[begin, end)` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub begin: Position,
    pub end: Position,
}

impl Span {
    pub fn new(begin: Position, end: Position) -> Self {
        Span { begin, end }
    }

    pub fn contains_column(&self, column: u32) -> bool {
        self.begin.column <= column && column < self.end.column
    }

    pub fn is_empty(&self) -> bool {
        self.begin.offset == self.end.offset
    }
}

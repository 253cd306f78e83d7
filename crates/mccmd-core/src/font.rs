//! The closed font enumeration used for syntax-highlight marks.

/// A visual category applied to a span of source text.
///
/// Marks may overlap; later marks override earlier ones for the
/// overlapping columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Command,
    Keyword,
    Numeric,
    String,
    Position,
    Rotation,
    Scoreboard,
    Target,
    Tag,
    Comment,
    Meta,
    Default,
}

impl Default for Font {
    fn default() -> Self {
        Font::Default
    }
}

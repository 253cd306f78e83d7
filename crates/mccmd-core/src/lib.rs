//! Grammar-driven parser, syntax highlighter and autocompleter for
//! Minecraft Bedrock command lines. Builds a command-word line into a
//! list of diagnostics, font marks for highlighting and autocomplete
//! marks for suggestion lookup, all driven off the single grammar
//! [`grammar::get_default_tree`] builds once per process.

mod diagnostic;
mod engine;
mod font;
pub mod grammar;
mod marker;
mod node;
mod position;
mod reader;
mod subparser;
mod suggest;
mod suggestion;
mod version;

pub use diagnostic::{Diagnostic, DiagnosticKind, KwArg};
pub use font::Font;
pub use marker::{AutoCompleteMark, AutoCompleteUnit, FontMark};
pub use position::{Position, Span};
pub use suggestion::{RuleWeight, Suggestion};
pub use version::{version_ge, version_le, version_lt, Version, VersionPredicate};

use mccmd_idtable::IdTable;

use crate::marker::Marker;
use crate::node::{Graph, NodeId};

/// One parsed line's worth of accumulated output, reduced from `Marker`'s
/// internal state to what callers outside this crate need.
pub struct ParseOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub font_marks: Vec<FontMark>,
    ac_marks: Vec<AutoCompleteMark>,
    line_chars: Vec<char>,
}

impl ParseOutcome {
    /// Ranked suggestions for the cursor sitting at `column` (a char
    /// index into the line that was parsed).
    pub fn suggestions_at(&self, parser: &MCCmdParser, column: usize) -> Vec<Suggestion> {
        suggest::suggestions_at(&parser.graph, &self.ac_marks, &self.line_chars, column, parser.id_table.as_ref())
    }
}

/// The entry point: a frozen grammar plus an optional identifier
/// catalogue (for resolving `minecraft:` ids, game rules, etc. into
/// suggestions), bound to a target game version.
pub struct MCCmdParser {
    graph: std::sync::Arc<(Graph, NodeId)>,
    id_table: Option<IdTable>,
    version: Version,
}

impl MCCmdParser {
    pub fn new(version: Version) -> Self {
        MCCmdParser { graph: grammar::get_default_tree(), id_table: None, version }
    }

    pub fn with_id_table(mut self, id_table: IdTable) -> Self {
        self.id_table = Some(id_table);
        self
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Parses one line of a `.mcfunction` file — a command, a `#comment`,
    /// or a blank line — recording diagnostics and highlight/autocomplete
    /// marks as it goes.
    pub fn parse_line(&self, line: &str) -> ParseOutcome {
        let (graph, root) = &*self.graph;
        let mut marker = Marker::new(reader::Reader::new(line), self.version);
        engine::parse_line(graph, &mut marker, *root);
        ParseOutcome {
            diagnostics: marker.diagnostics,
            font_marks: marker.font_marks,
            ac_marks: marker.ac_marks,
            line_chars: line.chars().collect(),
        }
    }
}

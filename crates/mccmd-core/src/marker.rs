//! Per-parse mutable state.

use crate::diagnostic::Diagnostic;
use crate::font::Font;
use crate::node::{Context, NodeId, Value};
use crate::position::{Position, Span};
use crate::reader::Reader;
use crate::version::Version;

/// `(span, Font)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMark {
    pub span: Span,
    pub font: Font,
}

/// Enough to produce suggestions later without re-parsing: the node that
/// was expected and the parse context at that point. Production is
/// deferred to `crate::suggest`.
#[derive(Debug, Clone)]
pub struct AutoCompleteUnit {
    pub node: NodeId,
    pub version: Version,
    pub context: Context,
}

/// `(span, AutoCompleteUnit)`.
#[derive(Debug, Clone)]
pub struct AutoCompleteMark {
    pub span: Span,
    pub unit: AutoCompleteUnit,
}

/// A checker scheduled during parsing but not yet run. Stored as
/// `(value, node, index)` rather than a boxed closure so `Marker` doesn't
/// need the grammar's lifetime: the checker function itself still lives
/// on the `Node`.
struct DeferredChecker {
    value: Value,
    node: NodeId,
    checker_index: usize,
}

/// A rewind point captured by `Marker::snapshot`; truncates every
/// append-only list back to where it was.
#[derive(Clone, Copy)]
pub struct Snapshot {
    reader_pos: Position,
    font_marks_len: usize,
    ac_marks_len: usize,
    font_stack_len: usize,
    deferred_checkers_len: usize,
    context: ContextSnapshot,
}

/// `Context` is small and `Clone`, so snapshotting it is just a copy, but
/// kept as its own field (rather than folded into the `Position` tuple)
/// since it's conceptually independent rollback state.
#[derive(Clone)]
struct ContextSnapshot(Context);

pub struct Marker {
    pub reader: Reader,
    pub font_marks: Vec<FontMark>,
    pub ac_marks: Vec<AutoCompleteMark>,
    pub diagnostics: Vec<Diagnostic>,
    font_stack: Vec<Font>,
    deferred_checkers: Vec<DeferredChecker>,
    pub version: Version,
    pub context: Context,
}

impl Marker {
    pub fn new(reader: Reader, version: Version) -> Self {
        Marker {
            reader,
            font_marks: Vec::new(),
            ac_marks: Vec::new(),
            diagnostics: Vec::new(),
            font_stack: Vec::new(),
            deferred_checkers: Vec::new(),
            version,
            context: Context::default(),
        }
    }

    pub fn push_font(&mut self, font: Font) {
        self.font_stack.push(font);
    }

    pub fn pop_font(&mut self) {
        self.font_stack.pop();
    }

    pub fn top_font(&self) -> Option<Font> {
        self.font_stack.last().copied()
    }

    pub fn push_checker(&mut self, value: Value, node: NodeId, checker_index: usize) {
        self.deferred_checkers.push(DeferredChecker { value, node, checker_index });
    }

    /// Runs every deferred checker in order, appending diagnostics for any
    /// that fail. Called once after the grammar root accepts.
    pub fn trigger_checkers(&mut self, graph: &crate::node::Graph) {
        for dc in &self.deferred_checkers {
            let node = graph.get(dc.node);
            if let Some(checker) = node.checkers.get(dc.checker_index) {
                if let Some(diag) = checker(&dc.value) {
                    self.diagnostics.push(diag);
                }
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            reader_pos: self.reader.get_location(),
            font_marks_len: self.font_marks.len(),
            ac_marks_len: self.ac_marks.len(),
            font_stack_len: self.font_stack.len(),
            deferred_checkers_len: self.deferred_checkers.len(),
            context: ContextSnapshot(self.context.clone()),
        }
    }

    /// Rewinds reader position, mark list lengths, font stack depth and
    /// checker list length back to a prior `snapshot()`.
    pub fn restore(&mut self, s: Snapshot) {
        self.reader.set_location(s.reader_pos);
        self.font_marks.truncate(s.font_marks_len);
        self.ac_marks.truncate(s.ac_marks_len);
        self.font_stack.truncate(s.font_stack_len);
        self.deferred_checkers.truncate(s.deferred_checkers_len);
        self.context = s.context.0;
    }
}

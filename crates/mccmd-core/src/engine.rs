//! Depth-first branch selection with longest-match error recovery.
//!
//! Grounded on the peek-then-commit shape of
//! `apollo_parser::parser::grammar::value::value` (try each alternative in
//! declared order, first success wins), generalized to backtrack through
//! a declared branch list instead of a single `match` on a lookahead
//! token, and to keep the *deepest-reaching* failure across alternatives
//! rather than just the last one tried.

use crate::diagnostic::{self, Diagnostic, DiagnosticKind};
use crate::font::Font;
use crate::marker::{AutoCompleteMark, AutoCompleteUnit, FontMark, Marker};
use crate::node::{ContextCapture, Graph, NodeId, NodeKind, ParseFailure, Value};
use crate::position::{Position, Span};
use crate::reader::Reader;

/// The deepest failure seen so far while trying a node's branches: the
/// *deepest-reaching* failure wins, tiebreaking on the earlier declared
/// branch.
struct BestFailure {
    offset: usize,
    diagnostic: Diagnostic,
}

impl BestFailure {
    fn expectation_at(pos: Position, key: &'static str) -> Self {
        BestFailure {
            offset: pos.offset,
            diagnostic: Diagnostic::new(Span::new(pos, pos), DiagnosticKind::Expectation, key),
        }
    }

    fn from_arg_parse(diag: Diagnostic) -> Self {
        BestFailure { offset: diag.span.end.offset, diagnostic: diag }
    }

    /// Keeps `self` unless `other` reaches strictly deeper; on a tie the
    /// earlier-declared branch (i.e. whichever was recorded first) wins.
    fn deeper(self, other: BestFailure) -> Self {
        if other.offset > self.offset {
            other
        } else {
            self
        }
    }
}

use crate::diagnostic::keys::{EXPECT_CONTINUATION as EXPECT_NO_BRANCH, EXPECT_TERMINATOR};

/// Parses one complete line starting at `root`. Diagnostics, font marks
/// and AC marks accumulate on `marker`; on success, deferred semantic
/// checkers run.
pub fn parse_line(graph: &Graph, marker: &mut Marker, root: NodeId) {
    match parse_node(graph, marker, root) {
        Ok(_) => marker.trigger_checkers(graph),
        Err(best) => marker.diagnostics.push(best.diagnostic),
    }
}

pub(crate) fn parse_node(graph: &Graph, marker: &mut Marker, node_id: NodeId) -> Result<Value, BestFailure> {
    let pre_pos = marker.reader.get_location();
    let node = graph.get(node_id);

    let value = match &node.kind {
        NodeKind::Leaf { parse, .. } => {
            let snap = marker.snapshot();
            match parse(&mut marker.reader) {
                Ok(v) => v,
                Err(ParseFailure::Expectation) => {
                    marker.restore(snap);
                    let key = node.expect_key.unwrap_or("error.expect.unknown");
                    return Err(BestFailure::expectation_at(pre_pos, key));
                }
                Err(ParseFailure::ArgParse(diag)) => {
                    marker.restore(snap);
                    return Err(BestFailure::from_arg_parse(diag));
                }
            }
        }
        NodeKind::Compressed => Value::None,
        NodeKind::Finish => {
            if marker.reader.at_line_end() {
                Value::None
            } else {
                // Committed to the line having ended here: trailing
                // content is a tier-2 failure ("too many arguments"),
                // not a cheap tier-1 expectation.
                let start = marker.reader.get_location();
                marker.reader.read_until_eol();
                let diag = Diagnostic::new(
                    Span::new(start, marker.reader.get_location()),
                    DiagnosticKind::ArgParse,
                    diagnostic::keys::TOO_MANY_ARGS,
                );
                return Err(BestFailure::from_arg_parse(diag));
            }
        }
        NodeKind::Subparsing(f) => {
            let snap = marker.snapshot();
            match f(marker, graph) {
                Ok(v) => v,
                Err(ParseFailure::Expectation) => {
                    marker.restore(snap);
                    let key = node.expect_key.unwrap_or("error.expect.unknown");
                    return Err(BestFailure::expectation_at(pre_pos, key));
                }
                Err(ParseFailure::ArgParse(diag)) => {
                    marker.restore(snap);
                    return Err(BestFailure::from_arg_parse(diag));
                }
            }
        }
    };

    if let (Some(capture), Some(text)) = (node.context_capture, value.as_str()) {
        match capture {
            ContextCapture::BlockId => {
                let id = text.strip_prefix("minecraft:").unwrap_or(text).to_owned();
                marker.context.block_id = Some(id);
            }
            ContextCapture::BlockStateKey => {
                marker.context.block_state_key = Some(text.to_owned());
            }
        }
    }

    let post_pos = marker.reader.get_location();

    if !matches!(node.kind, NodeKind::Subparsing(_)) {
        let font = node.default_font.unwrap_or_else(|| marker.top_font().unwrap_or(Font::Default));
        if post_pos.offset > pre_pos.offset {
            marker.font_marks.push(FontMark { span: Span::new(pre_pos, post_pos), font });
        }
    }

    // Every node that consumed text gets an AC mark; so does a
    // zero-width terminal node (no branches of its own) — EOL is the
    // common case, and without this a line ending exactly where the
    // grammar ends would have no mark to hang an "end of line" suggestion
    // off of.
    if post_pos.offset > pre_pos.offset || node.branches.is_empty() {
        marker.ac_marks.push(AutoCompleteMark {
            span: Span::new(pre_pos, post_pos),
            unit: AutoCompleteUnit { node: node_id, version: marker.version, context: marker.context.clone() },
        });
    }

    for (idx, _checker) in node.checkers.iter().enumerate() {
        marker.push_checker(value.clone(), node_id, idx);
    }

    if node.branches.is_empty() {
        return Ok(value);
    }

    let mut best: Option<BestFailure> = None;
    for branch in &node.branches {
        if !branch.version_predicate.holds(marker.version) {
            continue;
        }

        let branch_snap = marker.snapshot();

        if node.argument_end && !branch.is_close {
            match marker.reader.peek() {
                Some(' ') => {
                    marker.reader.next();
                }
                c if Reader::is_line_end(c) => {}
                _ => {
                    let here = marker.reader.get_location();
                    best = Some(match best {
                        Some(b) => b.deeper(BestFailure::expectation_at(here, EXPECT_TERMINATOR)),
                        None => BestFailure::expectation_at(here, EXPECT_TERMINATOR),
                    });
                    continue;
                }
            }
        }

        match parse_node(graph, marker, branch.target) {
            Ok(v) => return Ok(v),
            Err(e) => {
                marker.restore(branch_snap);
                best = Some(match best {
                    Some(b) => b.deeper(e),
                    None => e,
                });
            }
        }
    }

    Err(best.unwrap_or_else(|| BestFailure::expectation_at(post_pos, EXPECT_NO_BRANCH)))
}

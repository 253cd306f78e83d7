//! Suggestion production: at-cursor lookup over a parse's
//! `AutoCompleteMark`s, then expanding the chosen unit's node (and, for an
//! empty typed prefix, its declared continuations) into ranked
//! `Suggestion`s.

use mccmd_idtable::IdTable;

use crate::marker::{AutoCompleteMark, AutoCompleteUnit};
use crate::node::{Context, Graph, NodeId, NodeKind, SuggestEnv};
use crate::suggestion::{rank, RuleWeight, Suggestion};
use crate::version::Version;

/// Finds the mark covering `column` (a char index into the parsed line)
/// and expands it into ranked suggestions. Later-appended marks win over
/// earlier ones that also cover `column`, mirroring `FontMark`'s
/// "later overrides earlier" rule so a sub-parser's
/// translated marks take priority over the coarse span the engine
/// records for the subparsing node itself.
pub fn suggestions_at(
    graph: &Graph,
    marks: &[AutoCompleteMark],
    line_chars: &[char],
    column: usize,
    id_table: Option<&IdTable>,
) -> Vec<Suggestion> {
    let chosen = marks
        .iter()
        .rev()
        .find(|m| m.span.begin.offset <= column && column <= m.span.end.offset);

    let Some(mark) = chosen else {
        return Vec::new();
    };

    let prefix: String = line_chars[mark.span.begin.offset..column].iter().collect();
    produce_suggestions(graph, &mark.unit, &prefix, id_table)
}

pub fn produce_suggestions(
    graph: &Graph,
    unit: &AutoCompleteUnit,
    prefix: &str,
    id_table: Option<&IdTable>,
) -> Vec<Suggestion> {
    let mut out = base_suggestions(graph, unit.node, &unit.context, id_table);
    if prefix.is_empty() {
        out.extend(branch_suggestions(graph, unit.node, &unit.context, id_table, unit.version));
    }
    rank(out, prefix)
}

/// The suggestions a node itself offers for the token currently being
/// typed: a `Leaf`'s static `suggest`, dynamically re-resolved against the
/// `IdTable` when the node carries a `DynamicSuggest`. Other node kinds
/// have nothing of their own to suggest.
fn base_suggestions(graph: &Graph, node_id: NodeId, context: &Context, id_table: Option<&IdTable>) -> Vec<Suggestion> {
    let node = graph.get(node_id);
    let suggest = match &node.kind {
        NodeKind::Leaf { suggest, .. } => suggest,
        NodeKind::Finish => {
            return vec![Suggestion::new("autocomp.eol", "\n", |prefix: &str| {
                if prefix.is_empty() {
                    RuleWeight::Other
                } else {
                    RuleWeight::Failed
                }
            })]
        }
        _ => return Vec::new(),
    };

    let env = SuggestEnv { context, id_table };
    let static_suggestions = suggest(&env);

    let Some(dynamic) = &node.dynamic else {
        return static_suggestions;
    };

    let resolved = (dynamic.path)(context).and_then(|path| id_table?.get(&path));
    match resolved {
        Some(id_node) => (dynamic.map)(id_node)
            .into_iter()
            .map(|(id, label)| {
                let display = label.unwrap_or_else(|| id.clone());
                Suggestion::new(display, id.clone(), crate::suggestion::str_find_rule(id))
            })
            .collect(),
        None => static_suggestions.into_iter().map(|s| s.with_note("autocomp.missing_catalogue")).collect(),
    }
}

/// Walks `node`'s declared branches: each branch's
/// target contributes its own `base_suggestions`; a `is_close` branch is
/// additionally walked past (its own continuations are optional, so the
/// real "what comes next" may be one more hop away), while a non-close
/// branch's contribution is the last one taken along that path.
fn branch_suggestions(
    graph: &Graph,
    node_id: NodeId,
    context: &Context,
    id_table: Option<&IdTable>,
    version: Version,
) -> Vec<Suggestion> {
    let node = graph.get(node_id);
    let mut out = Vec::new();
    for branch in &node.branches {
        if !branch.version_predicate.holds(version) {
            continue;
        }
        out.extend(base_suggestions(graph, branch.target, context, id_table));
        if branch.is_close {
            out.extend(branch_suggestions(graph, branch.target, context, id_table, version));
        }
    }
    out
}

//! Repetition and variation combinators over already-built subtrees:
//! `nodes.py`'s `Series`, `Invertable`, `Wildcard`, `IntRange`.

use crate::font::Font;
use crate::grammar::join_tails;
use crate::grammar::primitives::{char_node, chars_node, integer_no_end_node, integer_node};
use crate::node::{Graph, NodeId, NodeKind};

/// `begin content (separator content)* end`, or just `begin end` when
/// `empty_ok` (`nodes.py`'s `Series`). `content` is built exactly once;
/// the repeat is a back-edge from its own exit through `separator` to its
/// own entry, the same forward-`NodeId` cycle `_execute` uses for tail
/// recursion — `nodes.py` gets this for free by calling `.branch()` more
/// than once on the same Python `Node` instance.
pub fn series(
    graph: &mut Graph,
    begin: NodeId,
    content: impl FnOnce(&mut Graph) -> (NodeId, NodeId),
    separator: impl FnOnce(&mut Graph) -> NodeId,
    end: NodeId,
    empty_ok: bool,
) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    graph.branch(root, begin);

    let (content_entry, content_exit) = content(graph);
    graph.branch(begin, content_entry);

    let sep = separator(graph);
    graph.branch(content_exit, sep);
    graph.branch(sep, content_entry);

    graph.branch(content_exit, end);
    if empty_ok {
        graph.branch(begin, end);
    }

    let exit = join_tails(graph, &[end]);
    (root, exit)
}

/// `node` or `!node` (`nodes.py`'s `Invertable`).
pub fn invertable(graph: &mut Graph, mut node: impl FnMut(&mut Graph) -> (NodeId, NodeId)) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let (plain_entry, plain_exit) = node(graph);
    graph.branch(root, plain_entry);

    let bang = char_node(graph, '!');
    graph.font(bang, Font::Meta);
    graph.note(bang, "note._invert");
    graph.branch(root, bang);
    let (inv_entry, inv_exit) = node(graph);
    graph.branch(bang, inv_entry);

    let exit = join_tails(graph, &[plain_exit, inv_exit]);
    (root, exit)
}

/// `node` or `*` (`nodes.py`'s `Wildcard`).
pub fn wildcard(
    graph: &mut Graph,
    mut node: impl FnMut(&mut Graph) -> (NodeId, NodeId),
    wildcard_note: &'static str,
) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let (node_entry, node_exit) = node(graph);
    graph.branch(root, node_entry);

    let star = char_node(graph, '*');
    graph.font(star, Font::Meta);
    graph.note(star, wildcard_note);
    graph.branch(root, star);

    let exit = join_tails(graph, &[node_exit, star]);
    (root, exit)
}

/// `n..m`, `n..`, `..m`, or a bare `n` (`nodes.py`'s `_RawIntRange`,
/// wrapped as `Invertable` by the public `int_range`).
fn raw_int_range(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    // `n..` / `n..m`: IntegerNoEnd so "n.." doesn't need a space before
    // the "..".
    let lo = integer_no_end_node(graph);
    graph.branch(root, lo);
    let dots = chars_node(graph, "..");
    graph.note(dots, "note._int_range");
    graph.branch(lo, dots);
    // "n.." with nothing after: open-ended range.
    let dots_bare = graph.alloc(NodeKind::Compressed);
    graph.branch(dots, dots_bare);
    let hi_after_lo = integer_node(graph);
    graph.branch(dots, hi_after_lo);
    // bare "n" with no ".." following: the terminator withheld by
    // IntegerNoEnd must come back here.
    let bare_lo = graph.alloc(NodeKind::Compressed);
    graph.branch(lo, bare_lo);

    // `..m` with no leading integer.
    let dots2 = chars_node(graph, "..");
    graph.note(dots2, "note._int_range");
    graph.branch(root, dots2);
    let hi_only = integer_node(graph);
    graph.branch(dots2, hi_only);

    let exit = join_tails(graph, &[dots_bare, hi_after_lo, bare_lo, hi_only]);
    (root, exit)
}

/// `n..m` (optionally inverted) used by `hasitem`'s quantity/slot filters
/// and selector's `scores`/`l`/`lm` ranges (`nodes.py`'s `IntRange`).
pub fn int_range(graph: &mut Graph) -> (NodeId, NodeId) {
    invertable(graph, raw_int_range)
}

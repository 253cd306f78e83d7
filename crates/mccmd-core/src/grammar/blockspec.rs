//! `BlockSpec`: a block id plus its `[state=value, ...]` block states,
//! whose suggestions are resolved dynamically against the `IdTable`
//! using the block id the line already typed. Grounded on `nodes.py`'s
//! `BlockSpec`/`_BlockStatePair`, redesigned per `crate::node`'s
//! `DynamicSuggest`/`ContextCapture` fields (see `DESIGN.md`) instead of
//! the source's `ResultTracked`/`DynamicId` monkey-patches.

use mccmd_idtable::IdNode;

use crate::grammar::checks::ranged_checker;
use crate::grammar::join_tails;
use crate::grammar::primitives::{boolean_node, char_node, integer_node, namespaced_id_node, quoted_string_node};
use crate::grammar::series::series;
use crate::node::{Context, ContextCapture, Graph, NodeId, NodeKind};
use crate::version::{version_ge, version_le, Version};

fn block_state_key_path(ctx: &Context) -> Option<Vec<String>> {
    let block_id = ctx.block_id.clone()?;
    Some(vec!["block_state".to_owned(), block_id])
}

/// Flattens `{"int": {...}, "bool": {...}, "str": {...}}` into quoted
/// key-literal candidates (`nodes.py`'s `_kmap_handler`): block state
/// values are always written back as a quoted string regardless of the
/// state's own value type.
fn block_state_key_map(node: &IdNode) -> Vec<(String, Option<String>)> {
    let IdNode::Map(types) = node else { return Vec::new() };
    let mut out = Vec::new();
    for ty in ["int", "bool", "str"] {
        let Some(IdNode::Map(keys)) = types.get(ty) else { continue };
        out.extend(keys.keys().map(|k| (format!("\"{k}\""), None)));
    }
    out
}

fn block_state_value_path(ctx: &Context, ty: &'static str) -> Option<Vec<String>> {
    let block_id = ctx.block_id.clone()?;
    let key = ctx.block_state_key.clone()?;
    Some(vec!["block_state".to_owned(), block_id, ty.to_owned(), key])
}
fn block_state_value_path_str(ctx: &Context) -> Option<Vec<String>> {
    block_state_value_path(ctx, "str")
}
fn block_state_value_path_int(ctx: &Context) -> Option<Vec<String>> {
    block_state_value_path(ctx, "int")
}
fn block_state_value_path_bool(ctx: &Context) -> Option<Vec<String>> {
    block_state_value_path(ctx, "bool")
}

fn block_state_value_map(node: &IdNode) -> Vec<(String, Option<String>)> {
    match node {
        IdNode::List(items) => items.iter().map(|s| (s.clone(), None)).collect(),
        IdNode::Map(entries) => entries.iter().map(|(k, v)| (k.clone(), v.as_label().map(str::to_owned))).collect(),
        IdNode::Leaf(_) => Vec::new(),
    }
}

/// One `key:value` pair inside a block state list (`nodes.py`'s
/// `BlockSpec._BlockStatePair`).
fn block_state_pair(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let key = quoted_string_node(graph);
    graph.note(key, "note._block_state.key");
    graph.capture(key, ContextCapture::BlockStateKey);
    graph.dynamic(key, block_state_key_path, block_state_key_map);
    graph.branch(root, key);

    let colon = char_node(graph, ':');
    graph.branch(key, colon);

    let str_val = quoted_string_node(graph);
    graph.note(str_val, "note._block_state.value");
    graph.dynamic(str_val, block_state_value_path_str, block_state_value_map);
    graph.branch(colon, str_val);

    let int_val = integer_node(graph);
    graph.note(int_val, "note._block_state.value");
    graph.dynamic(int_val, block_state_value_path_int, block_state_value_map);
    graph.branch(colon, int_val);

    let bool_val = boolean_node(graph);
    graph.note(bool_val, "note._block_state.value");
    graph.dynamic(bool_val, block_state_value_path_bool, block_state_value_map);
    graph.branch(colon, bool_val);

    let exit = join_tails(graph, &[str_val, int_val, bool_val]);
    (root, exit)
}

/// A block id plus optional block states (`nodes.py`'s `BlockSpec`).
/// `extra_tail`, if given, is additionally reachable right after the
/// block id with no block state at all — pre-1.19.80 commands that allow
/// writing e.g. block data directly after the id wire this in.
pub fn block_spec(graph: &mut Graph, extra_tail: Option<NodeId>) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let id = namespaced_id_node(graph, Some("block"));
    graph.capture(id, ContextCapture::BlockId);
    graph.branch(root, id);

    // Block data, deprecated since 1.19.70 (`nodes.py` keeps accepting it
    // up to and including that version).
    let data = integer_node(graph);
    graph.note(data, "note._block_data");
    graph.branch_versioned(id, data, version_le(Version::new(1, 19, 70)));

    let begin = char_node(graph, '[');
    graph.note(begin, "note._block_state.begin");
    let end = char_node(graph, ']');
    graph.note(end, "note._block_state.end");
    let (states_entry, states_exit) = series(graph, begin, block_state_pair, |g| char_node(g, ','), end, true);
    graph.branch(id, states_entry);

    // From 1.19.80, block state may be omitted entirely.
    let omit = graph.alloc(NodeKind::Compressed);
    graph.branch_versioned(id, omit, version_ge(Version::new(1, 19, 80)));

    let mut tails = vec![data, states_exit, omit];
    if let Some(extra) = extra_tail {
        graph.branch(id, extra);
        tails.push(extra);
    }
    let exit = join_tails(graph, &tails);
    (root, exit)
}

/// `ItemData`'s numeric range (`nodes.py`'s module-level `ItemData`),
/// exposed here since `hasitem`'s `data` filter and `give`/`replaceitem`
/// style commands both want it.
pub fn item_data(graph: &mut Graph, is_test: bool) -> NodeId {
    let n = integer_node(graph);
    let min = if is_test { -1.0 } else { 0.0 };
    graph.checker(n, ranged_checker(min, 32767.0));
    graph.note(n, "note._item_data");
    n
}

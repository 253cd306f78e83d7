//! Target selectors (`@e[...]`) and scoreboard targets. Grounded on
//! `nodes.py`'s `SelectorArg`, `Selector`, `ScoreSpec`.

use crate::font::Font;
use crate::grammar::blockspec::item_data;
use crate::grammar::checks::{min_checker, none_of_checker, one_of_checker, ranged_checker};
use crate::grammar::coordinates::pos;
use crate::grammar::join_tails;
use crate::grammar::primitives::{
    catalogued_word_node, char_node, enumerate_node, float_node, integer_node, keyword_ci_node, namespaced_id_node, string_node,
};
use crate::grammar::series::{int_range, invertable, series, wildcard};
use crate::node::{Graph, NodeId, NodeKind};
use crate::version::{version_ge, Version, VersionPredicate};

/// `tag`'s raw value: a `String`, or nothing at all — `@e[tag=]` selects
/// entities with no tags (`nodes.py`'s `SelectorArg._RawTag`).
fn raw_tag(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let s = string_node(graph);
    graph.font(s, Font::Tag);
    graph.note(s, "note._selector.complex.tag");
    graph.branch(root, s);
    let empty = graph.alloc(NodeKind::Compressed);
    graph.branch(root, empty);
    let exit = join_tails(graph, &[s, empty]);
    (root, exit)
}

/// One `name=range` entry inside `scores={...}` (`nodes.py`'s
/// `SelectorArg._ScoresArg`).
fn scores_arg(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let name = string_node(graph);
    graph.font(name, Font::Scoreboard);
    graph.note(name, "note._scoreboard");
    graph.branch(root, name);
    let eq = char_node(graph, '=');
    graph.branch(name, eq);
    let (range_entry, range_exit) = int_range(graph);
    graph.branch(eq, range_entry);
    (root, range_exit)
}

fn scores_series(graph: &mut Graph) -> (NodeId, NodeId) {
    let begin = char_node(graph, '{');
    graph.note(begin, "note._selector.complex.scores.begin");
    let end = char_node(graph, '}');
    graph.note(end, "note._selector.complex.scores.end");
    series(graph, begin, scores_arg, |g| char_node(g, ','), end, false)
}

fn has_permission_arg(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let perm = namespaced_id_node(graph, Some("permission"));
    graph.branch(root, perm);
    let eq = char_node(graph, '=');
    graph.branch(perm, eq);
    let state = enumerate_node(graph, &["enabled", "disabled"]);
    graph.font(state, Font::Numeric);
    graph.branch(eq, state);
    (root, state)
}

fn has_permission_series(graph: &mut Graph) -> (NodeId, NodeId) {
    let begin = char_node(graph, '{');
    graph.note(begin, "note._selector.complex.haspermission.begin");
    let end = char_node(graph, '}');
    graph.note(end, "note._selector.complex.haspermission.end");
    series(graph, begin, has_permission_arg, |g| char_node(g, ','), end, false)
}

/// `spectator|adventure|survival|creative|default|s|c|a|d`, or the
/// numeric id (`0,1,2`, plus `5` when `allow_5`) — `nodes.py`'s
/// `GameMode`.
pub fn game_mode(graph: &mut Graph, allow_5: bool) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);
    let word = enumerate_node(
        graph,
        &["spectator", "adventure", "survival", "creative", "default", "s", "c", "a", "d"],
    );
    graph.font(word, Font::Keyword);
    graph.branch(root, word);

    let num = integer_node(graph);
    let allowed: &'static [i64] = if allow_5 { &[0, 1, 2, 5] } else { &[0, 1, 2] };
    graph.checker(num, one_of_checker(allowed));
    graph.font(num, Font::Keyword);
    graph.branch(root, num);

    root
}

/// A single `@e[...]` filter argument and the value it takes
/// (`nodes.py`'s `SelectorArg`).
pub fn selector_arg(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let mut tails: Vec<NodeId> = Vec::new();

    let mut add = |graph: &mut Graph, name: &'static str, value_entry: NodeId, value_exit: NodeId, pred: VersionPredicate| {
        let kw = keyword_ci_node(graph, name);
        graph.note(kw, "note._selector.complex.arg_names");
        graph.branch_with(root, kw, pred, false);
        let eq = char_node(graph, '=');
        graph.note(eq, "note._selector.complex.equals");
        graph.branch(kw, eq);
        graph.branch(eq, value_entry);
        tails.push(value_exit);
    };

    let r = float_node(graph);
    graph.checker(r, min_checker(0.0));
    add(graph, "r", r, r, VersionPredicate::Always);
    let rm = float_node(graph);
    graph.checker(rm, min_checker(0.0));
    add(graph, "rm", rm, rm, VersionPredicate::Always);
    let dx = float_node(graph);
    add(graph, "dx", dx, dx, VersionPredicate::Always);
    let dy = float_node(graph);
    add(graph, "dy", dy, dy, VersionPredicate::Always);
    let dz = float_node(graph);
    add(graph, "dz", dz, dz, VersionPredicate::Always);

    let (xe, xx) = pos(graph, Font::Position);
    add(graph, "x", xe, xx, VersionPredicate::Always);
    let (ye, yx) = pos(graph, Font::Position);
    add(graph, "y", ye, yx, VersionPredicate::Always);
    let (ze, zx) = pos(graph, Font::Position);
    add(graph, "z", ze, zx, VersionPredicate::Always);

    let (scores_entry, scores_exit) = scores_series(graph);
    add(graph, "scores", scores_entry, scores_exit, VersionPredicate::Always);

    let (tag_entry, tag_exit) = invertable(graph, raw_tag);
    add(graph, "tag", tag_entry, tag_exit, VersionPredicate::Always);
    let (name_entry, name_exit) = invertable(graph, |g| {
        let s = string_node(g);
        (s, s)
    });
    add(graph, "name", name_entry, name_exit, VersionPredicate::Always);
    let (type_entry, type_exit) = invertable(graph, |g| {
        let id = namespaced_id_node(g, Some("entity"));
        (id, id)
    });
    add(graph, "type", type_entry, type_exit, VersionPredicate::Always);
    let (family_entry, family_exit) = invertable(graph, |g| {
        let id = catalogued_word_node(g, "family");
        (id, id)
    });
    add(graph, "family", family_entry, family_exit, VersionPredicate::Always);

    let rx = float_node(graph);
    graph.checker(rx, ranged_checker(-90.0, 90.0));
    add(graph, "rx", rx, rx, VersionPredicate::Always);
    let rxm = float_node(graph);
    graph.checker(rxm, ranged_checker(-90.0, 90.0));
    add(graph, "rxm", rxm, rxm, VersionPredicate::Always);
    let ry = float_node(graph);
    graph.checker(ry, ranged_checker(-180.0, 180.0));
    add(graph, "ry", ry, ry, VersionPredicate::Always);
    let rym = float_node(graph);
    graph.checker(rym, ranged_checker(-180.0, 180.0));
    add(graph, "rym", rym, rym, VersionPredicate::Always);

    let (hasitem_entry, hasitem_exit) = has_item(graph);
    add(graph, "hasitem", hasitem_entry, hasitem_exit, VersionPredicate::Always);

    let l = integer_node(graph);
    graph.checker(l, min_checker(0.0));
    add(graph, "l", l, l, VersionPredicate::Always);
    let lm = integer_node(graph);
    graph.checker(lm, min_checker(0.0));
    add(graph, "lm", lm, lm, VersionPredicate::Always);

    let m = game_mode(graph, false);
    add(graph, "m", m, m, VersionPredicate::Always);

    let c = integer_node(graph);
    graph.checker(c, none_of_checker(&[0]));
    add(graph, "c", c, c, VersionPredicate::Always);

    let (hp_entry, hp_exit) = has_permission_series(graph);
    add(graph, "haspermission", hp_entry, hp_exit, version_ge(Version::new(1, 19, 80)));

    let exit = join_tails(graph, &tails);
    (root, exit)
}

/// One `item=.. data=.. quantity=.. location=.. slot=..` entry inside
/// `hasitem={...}` (`nodes.py`'s `SelectorArg._HasItem._HasItemArg`).
fn has_item_arg(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let mut tails = Vec::new();
    let mut add = |graph: &mut Graph, name: &'static str, value_entry: NodeId, value_exit: NodeId| {
        let kw = keyword_ci_node(graph, name);
        graph.note(kw, "note._selector.complex.hasitem");
        graph.branch(root, kw);
        let eq = char_node(graph, '=');
        graph.note(eq, "note._selector.complex.hasitem.equals");
        graph.branch(kw, eq);
        graph.branch(eq, value_entry);
        tails.push(value_exit);
    };

    let item = namespaced_id_node(graph, Some("item"));
    add(graph, "item", item, item);
    let data = item_data(graph, true);
    add(graph, "data", data, data);
    let (qty_entry, qty_exit) = int_range(graph);
    add(graph, "quantity", qty_entry, qty_exit);
    let location = catalogued_word_node(graph, "entity_slot");
    add(graph, "location", location, location);
    let (slot_entry, slot_exit) = int_range(graph);
    add(graph, "slot", slot_entry, slot_exit);

    let exit = join_tails(graph, &tails);
    (root, exit)
}

/// `{item=...}` or a list of such objects `[{...}, {...}]`.
fn has_item(graph: &mut Graph) -> (NodeId, NodeId) {
    let obj_begin = char_node(graph, '{');
    graph.note(obj_begin, "note._selector.complex.hasitem.begin.object");
    let obj_end = char_node(graph, '}');
    graph.note(obj_end, "note._selector.complex.hasitem.end.object");
    let comma = char_node(graph, ',');
    graph.note(comma, "note._selector.complex.hasitem.seperator.object");
    let (obj_entry, obj_exit) = series(graph, obj_begin, has_item_arg, |_| comma, obj_end, false);

    let root = graph.alloc(NodeKind::Compressed);
    graph.branch(root, obj_entry);

    let list_begin = char_node(graph, '[');
    graph.note(list_begin, "note._selector.complex.hasitem.begin.array");
    let list_end = char_node(graph, ']');
    graph.note(list_end, "note._selector.complex.hasitem.end.array");
    let list_comma = char_node(graph, ',');
    graph.note(list_comma, "note._selector.complex.hasitem.seperator.array");
    let obj_begin2 = char_node(graph, '{');
    graph.note(obj_begin2, "note._selector.complex.hasitem.begin.object");
    let obj_end2 = char_node(graph, '}');
    graph.note(obj_end2, "note._selector.complex.hasitem.end.object");
    let comma2 = char_node(graph, ',');
    graph.note(comma2, "note._selector.complex.hasitem.seperator.object");
    let (list_obj_entry, list_obj_exit) = series(graph, obj_begin2, has_item_arg, |_| comma2, obj_end2, false);
    let (list_entry, list_exit) = series(graph, list_begin, |_| (list_obj_entry, list_obj_exit), |_| list_comma, list_end, false);
    graph.branch(root, list_entry);

    let exit = join_tails(graph, &[obj_exit, list_exit]);
    (root, exit)
}

/// A bare player-name `String`, or `@<var>[filters]` (`nodes.py`'s
/// `Selector`).
pub fn selector(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let name = string_node(graph);
    graph.font(name, Font::Target);
    graph.note(name, "note._selector.player_name");
    graph.branch(root, name);

    let at = char_node(graph, '@');
    graph.font(at, Font::Target);
    graph.note(at, "note._selector.complex.root");
    graph.branch(root, at);

    let var = enumerate_node(graph, &["a", "e", "r", "p", "s", "initiator"]);
    graph.font(var, Font::Target);
    graph.branch_close(at, var);

    let begin = char_node(graph, '[');
    graph.note(begin, "note._selector.complex.begin");
    let end = char_node(graph, ']');
    graph.note(end, "note._selector.complex.end");
    let (filters_entry, filters_exit) = series(graph, begin, selector_arg, |g| char_node(g, ','), end, false);
    graph.branch_close(var, filters_entry);
    let no_filters = graph.alloc(NodeKind::Compressed);
    graph.branch(var, no_filters);

    let exit = join_tails(graph, &[name, filters_exit, no_filters]);
    (root, exit)
}

/// A `Selector` (optionally `*`-wildcarded) followed by an objective name
/// (`nodes.py`'s `ScoreSpec`).
pub fn score_spec(graph: &mut Graph, wildcard_ok: bool) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let (sel_entry, sel_exit) = if wildcard_ok { wildcard(graph, selector, "note._wildcard") } else { selector(graph) };
    graph.branch(root, sel_entry);
    let objective = string_node(graph);
    graph.font(objective, Font::Scoreboard);
    graph.note(objective, "note._scoreboard");
    graph.branch(sel_exit, objective);
    (root, objective)
}

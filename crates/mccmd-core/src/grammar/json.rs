//! JSON arguments (`tellraw`'s rawtext body, `give`'s item components,
//! ...). `nodes.py`'s `Json`/`_JsonString`/`_JsonKeyValPair` drive this
//! off a `definition` dict keyed by JSON-Schema-like `@object`/`@array`/
//! `@string` markers, letting one key's value tree depend on which
//! object it sits in. This crate builds a single generic "any JSON
//! value" grammar (object/array/string/number/bool/null, with array
//! elements and object values looping back through the same `NodeId`
//! pair the way `_execute` tail-recurses) for arguments with no fixed
//! shape, plus dedicated builders — `rawtext_value`, `item_components_
//! value` — for the two arguments `nodes.py` gives a real `#lib`-keyed
//! schema: each dispatches its object's keys to one of this module's
//! five named value trees (`wildcard_selector_value`, `lock_mode_value`,
//! `block_value`, `scoreboard_value`, `translate_value`) the way
//! `_JsonString.__get_tree`'s `lib == ...` chain does, without
//! reproducing that chain's generic runtime dict-lookup machinery.

use crate::diagnostic::keys;
use crate::font::Font;
use crate::grammar::join_tails;
use crate::grammar::primitives::{boolean_node, char_node, float_node, keyword_node, quoted_string_node};
use crate::grammar::selector::selector;
use crate::grammar::series::{series, wildcard};
use crate::node::{Graph, NodeId, NodeKind, ParseFailure, Value};
use crate::subparser;

/// `key:value` inside a JSON object, looping the value back through
/// `(value_entry, value_exit)` — usually the same pair `json_value_node`
/// allocated for itself (`nodes.py`'s `_JsonKeyValPair`, with key
/// capture dropped along with the schema dispatch it fed).
fn json_key_value_pair(graph: &mut Graph, value_entry: NodeId, value_exit: NodeId) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let key = quoted_string_node(graph);
    graph.font(key, Font::String);
    graph.note(key, "note._json.key");
    graph.branch(root, key);
    let colon = char_node(graph, ':');
    graph.branch(key, colon);
    graph.branch(colon, value_entry);
    (root, value_exit)
}

/// A quoted JSON string that must equal `literal` — a fixed key name in
/// a `#lib`-dispatched object, not an arbitrary JSON key.
fn literal_key_node(graph: &mut Graph, literal: &'static str) -> NodeId {
    let id = graph.alloc(NodeKind::Subparsing(Box::new(move |marker, _graph| {
        let decoded = subparser::read_quoted_string(&mut marker.reader)?;
        if decoded.text == literal {
            Ok(Value::Str(decoded.text))
        } else {
            Err(ParseFailure::Expectation)
        }
    })));
    graph.no_argument_end(id);
    graph.font(id, Font::String);
    graph.note(id, "note._json.key");
    graph.expect(id, keys::EXPECT_QUOTED_STR);
    id
}

/// Any JSON value: object, array, string, number, bool, or `null`.
/// `root`/`exit` are allocated once and referenced again for object
/// values and array elements, so nesting doesn't recurse at
/// graph-construction time (`nodes.py`'s `Json`, simplified).
pub fn json_value_node(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let exit = graph.alloc(NodeKind::Compressed);

    let s = quoted_string_node(graph);
    graph.font(s, Font::String);
    graph.branch(root, s);
    graph.branch(s, exit);

    let n = float_node(graph);
    graph.branch(root, n);
    graph.branch(n, exit);

    let b = boolean_node(graph);
    graph.branch(root, b);
    graph.branch(b, exit);

    let null_kw = keyword_node(graph, "null");
    graph.branch(root, null_kw);
    graph.branch(null_kw, exit);

    let obj_begin = char_node(graph, '{');
    graph.note(obj_begin, "note._json.object.begin");
    let obj_end = char_node(graph, '}');
    graph.note(obj_end, "note._json.object.end");
    let (kv_entry, kv_exit) = json_key_value_pair(graph, root, exit);
    let (obj_entry, obj_exit) = series(graph, obj_begin, |_| (kv_entry, kv_exit), |g| char_node(g, ','), obj_end, true);
    graph.branch(root, obj_entry);
    graph.branch(obj_exit, exit);

    let arr_begin = char_node(graph, '[');
    graph.note(arr_begin, "note._json.array.begin");
    let arr_end = char_node(graph, ']');
    graph.note(arr_end, "note._json.array.end");
    let (arr_entry, arr_exit) = series(graph, arr_begin, |_| (root, exit), |g| char_node(g, ','), arr_end, true);
    graph.branch(root, arr_entry);
    graph.branch(arr_exit, exit);

    (root, exit)
}

/// `#lib: "wildcard_selector"` — a `Selector`, or `*` for "all entities".
pub fn wildcard_selector_value(graph: &mut Graph) -> (NodeId, NodeId) {
    wildcard(graph, selector, "note._wildcard")
}

/// `#lib: "lock_mode"`.
pub fn lock_mode_value(graph: &mut Graph) -> NodeId {
    let n = crate::grammar::primitives::enumerate_node(graph, &["lock_in_inventory", "lock_in_slot"]);
    graph.font(n, Font::Keyword);
    n
}

/// `#lib: "block"` — a bare block id, no block state (used for JSON
/// fields that only ever name a block, not a full `BlockSpec`).
pub fn block_value(graph: &mut Graph) -> NodeId {
    crate::grammar::primitives::namespaced_id_node(graph, Some("block"))
}

/// `#lib: "scoreboard"` — an objective name written as bare text rather
/// than a quoted JSON string.
pub fn scoreboard_value(graph: &mut Graph) -> NodeId {
    let n = crate::grammar::primitives::bare_text_node(graph, false);
    graph.font(n, Font::Scoreboard);
    n
}

/// `#lib: "translate"` — a rawtext translation key, highlighting
/// `%%1`.."%%9"/`%%s` substitution markers distinctly from the rest of
/// the text (`nodes.py`'s `_RawtextTranslate`).
pub fn translate_value(graph: &mut Graph) -> NodeId {
    let id = graph.alloc(NodeKind::Subparsing(Box::new(|marker, _graph| {
        let start = marker.reader.get_location();
        let text = marker.reader.read_until_eol();
        let end = marker.reader.get_location();
        if text.is_empty() {
            return Err(ParseFailure::Expectation);
        }
        marker.font_marks.push(crate::marker::FontMark {
            span: crate::position::Span::new(start, end),
            font: Font::String,
        });
        for (idx, _) in find_substitutions(&text) {
            let sub_start = start.offset(idx as isize);
            let sub_end = start.offset(idx as isize + 3);
            marker.font_marks.push(crate::marker::FontMark {
                span: crate::position::Span::new(sub_start, sub_end),
                font: Font::Meta,
            });
        }
        Ok(Value::Str(text))
    })));
    graph.no_argument_end(id);
    id
}

/// One `{objective: ..., name: ...}` pair inside a `"score"` field
/// (`nodes.py`'s `RawText()` `score` schema).
fn score_field_pair(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let obj_key = literal_key_node(graph, "objective");
    graph.note(obj_key, "note._rawtext.key");
    graph.branch(root, obj_key);
    let obj_colon = char_node(graph, ':');
    graph.branch(obj_key, obj_colon);
    let obj_val = scoreboard_value(graph);
    graph.branch(obj_colon, obj_val);

    let name_key = literal_key_node(graph, "name");
    graph.note(name_key, "note._rawtext.key");
    graph.branch(root, name_key);
    let name_colon = char_node(graph, ':');
    graph.branch(name_key, name_colon);
    let (name_entry, name_exit) = wildcard_selector_value(graph);
    graph.branch(name_colon, name_entry);

    let exit = join_tails(graph, &[obj_val, name_exit]);
    (root, exit)
}

/// One `key: value` pair inside a `"rawtext"` array element — `text`,
/// `translate`, `with`, `score`, or `selector` (`nodes.py`'s
/// `RawText()`). `with` is kept to its common shape, an array of plain
/// strings; the rarer nested-`{"rawtext":[...]}` redirect isn't
/// reproduced.
fn rawtext_field_pair(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let text_key = literal_key_node(graph, "text");
    graph.note(text_key, "note._rawtext.key");
    graph.branch(root, text_key);
    let text_colon = char_node(graph, ':');
    graph.branch(text_key, text_colon);
    let text_val = quoted_string_node(graph);
    graph.branch(text_colon, text_val);

    let translate_key = literal_key_node(graph, "translate");
    graph.note(translate_key, "note._rawtext.key");
    graph.branch(root, translate_key);
    let translate_colon = char_node(graph, ':');
    graph.branch(translate_key, translate_colon);
    let translate_val = translate_value(graph);
    graph.branch(translate_colon, translate_val);

    let with_key = literal_key_node(graph, "with");
    graph.note(with_key, "note._rawtext.key");
    graph.branch(root, with_key);
    let with_colon = char_node(graph, ':');
    graph.branch(with_key, with_colon);
    let with_arr_begin = char_node(graph, '[');
    graph.note(with_arr_begin, "note._json.array.begin");
    let with_arr_end = char_node(graph, ']');
    graph.note(with_arr_end, "note._json.array.end");
    let (with_arr_entry, with_arr_exit) = series(
        graph,
        with_arr_begin,
        |g| {
            let s = quoted_string_node(g);
            (s, s)
        },
        |g| char_node(g, ','),
        with_arr_end,
        true,
    );
    graph.branch(with_colon, with_arr_entry);

    let score_key = literal_key_node(graph, "score");
    graph.note(score_key, "note._rawtext.key");
    graph.branch(root, score_key);
    let score_colon = char_node(graph, ':');
    graph.branch(score_key, score_colon);
    let score_obj_begin = char_node(graph, '{');
    graph.note(score_obj_begin, "note._json.object.begin");
    let score_obj_end = char_node(graph, '}');
    graph.note(score_obj_end, "note._json.object.end");
    let (score_entry, score_exit) = series(graph, score_obj_begin, score_field_pair, |g| char_node(g, ','), score_obj_end, false);
    graph.branch(score_colon, score_entry);

    let selector_key = literal_key_node(graph, "selector");
    graph.note(selector_key, "note._rawtext.key");
    graph.branch(root, selector_key);
    let selector_colon = char_node(graph, ':');
    graph.branch(selector_key, selector_colon);
    let (selector_entry, selector_exit) = wildcard_selector_value(graph);
    graph.branch(selector_colon, selector_entry);

    let exit = join_tails(graph, &[text_val, translate_val, with_arr_exit, score_exit, selector_exit]);
    (root, exit)
}

/// `{ ...fields }` — one array element of `"rawtext"`, one or more of
/// `rawtext_field_pair` separated by commas (`nodes.py`'s `RawText()`
/// `#value@object`).
fn rawtext_entry_value(graph: &mut Graph) -> (NodeId, NodeId) {
    let obj_begin = char_node(graph, '{');
    graph.note(obj_begin, "note._json.object.begin");
    let obj_end = char_node(graph, '}');
    graph.note(obj_end, "note._json.object.end");
    series(graph, obj_begin, rawtext_field_pair, |g| char_node(g, ','), obj_end, false)
}

/// `{"rawtext": [ ...entries ]}` — `tellraw`/`titleraw`'s message body
/// (`nodes.py`'s `RawText()`).
pub fn rawtext_value(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let obj_begin = char_node(graph, '{');
    graph.note(obj_begin, "note._json.object.begin");
    graph.branch(root, obj_begin);
    let key = literal_key_node(graph, "rawtext");
    graph.note(key, "note._rawtext.key");
    graph.branch(obj_begin, key);
    let colon = char_node(graph, ':');
    graph.branch(key, colon);

    let arr_begin = char_node(graph, '[');
    graph.note(arr_begin, "note._json.array.begin");
    let arr_end = char_node(graph, ']');
    graph.note(arr_end, "note._json.array.end");
    let (arr_entry, arr_exit) = series(graph, arr_begin, rawtext_entry_value, |g| char_node(g, ','), arr_end, true);
    graph.branch(colon, arr_entry);

    let obj_end = char_node(graph, '}');
    graph.note(obj_end, "note._json.object.end");
    graph.branch(arr_exit, obj_end);

    (root, obj_end)
}

/// `{"blocks": [...]}` under `can_place_on`/`can_destroy` — a list of
/// bare block ids (`nodes.py`'s `ItemComponents()`).
fn can_place_or_destroy_value(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let obj_begin = char_node(graph, '{');
    graph.note(obj_begin, "note._json.object.begin");
    graph.branch(root, obj_begin);
    let blocks_key = literal_key_node(graph, "blocks");
    graph.note(blocks_key, "note._rawtext.key");
    graph.branch(obj_begin, blocks_key);
    let colon = char_node(graph, ':');
    graph.branch(blocks_key, colon);
    let arr_begin = char_node(graph, '[');
    graph.note(arr_begin, "note._json.array.begin");
    let arr_end = char_node(graph, ']');
    graph.note(arr_end, "note._json.array.end");
    let (arr_entry, arr_exit) = series(
        graph,
        arr_begin,
        |g| {
            let b = block_value(g);
            (b, b)
        },
        |g| char_node(g, ','),
        arr_end,
        true,
    );
    graph.branch(colon, arr_entry);
    let obj_end = char_node(graph, '}');
    graph.note(obj_end, "note._json.object.end");
    graph.branch(arr_exit, obj_end);
    (root, obj_end)
}

/// `{"mode": ...}` under `item_lock` (`nodes.py`'s `ItemComponents()`).
fn item_lock_value(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let obj_begin = char_node(graph, '{');
    graph.note(obj_begin, "note._json.object.begin");
    graph.branch(root, obj_begin);
    let mode_key = literal_key_node(graph, "mode");
    graph.note(mode_key, "note._rawtext.key");
    graph.branch(obj_begin, mode_key);
    let colon = char_node(graph, ':');
    graph.branch(mode_key, colon);
    let mode_val = lock_mode_value(graph);
    graph.branch(colon, mode_val);
    let obj_end = char_node(graph, '}');
    graph.note(obj_end, "note._json.object.end");
    graph.branch(mode_val, obj_end);
    (root, obj_end)
}

/// `{}` — `keep_on_death` takes no fields (`nodes.py`'s `ItemComponents()`).
fn keep_on_death_value(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);
    let obj_begin = char_node(graph, '{');
    graph.note(obj_begin, "note._json.object.begin");
    graph.branch(root, obj_begin);
    let obj_end = char_node(graph, '}');
    graph.note(obj_end, "note._json.object.end");
    graph.branch(obj_begin, obj_end);
    (root, obj_end)
}

/// One `"minecraft:..."` entry inside `give`'s item components object
/// (`nodes.py`'s `ItemComponents()`).
fn item_component_pair(graph: &mut Graph) -> (NodeId, NodeId) {
    let root = graph.alloc(NodeKind::Compressed);

    let cpo_key = literal_key_node(graph, "minecraft:can_place_on");
    graph.note(cpo_key, "note._rawtext.key");
    graph.branch(root, cpo_key);
    let cpo_colon = char_node(graph, ':');
    graph.branch(cpo_key, cpo_colon);
    let (cpo_val_entry, cpo_val_exit) = can_place_or_destroy_value(graph);
    graph.branch(cpo_colon, cpo_val_entry);

    let cd_key = literal_key_node(graph, "minecraft:can_destroy");
    graph.note(cd_key, "note._rawtext.key");
    graph.branch(root, cd_key);
    let cd_colon = char_node(graph, ':');
    graph.branch(cd_key, cd_colon);
    let (cd_val_entry, cd_val_exit) = can_place_or_destroy_value(graph);
    graph.branch(cd_colon, cd_val_entry);

    let lock_key = literal_key_node(graph, "minecraft:item_lock");
    graph.note(lock_key, "note._rawtext.key");
    graph.branch(root, lock_key);
    let lock_colon = char_node(graph, ':');
    graph.branch(lock_key, lock_colon);
    let (lock_val_entry, lock_val_exit) = item_lock_value(graph);
    graph.branch(lock_colon, lock_val_entry);

    let kod_key = literal_key_node(graph, "minecraft:keep_on_death");
    graph.note(kod_key, "note._rawtext.key");
    graph.branch(root, kod_key);
    let kod_colon = char_node(graph, ':');
    graph.branch(kod_key, kod_colon);
    let (kod_val_entry, kod_val_exit) = keep_on_death_value(graph);
    graph.branch(kod_colon, kod_val_entry);

    let exit = join_tails(graph, &[cpo_val_exit, cd_val_exit, lock_val_exit, kod_val_exit]);
    (root, exit)
}

/// `give`'s item components object: zero or more of `can_place_on`,
/// `can_destroy`, `item_lock`, `keep_on_death` (`nodes.py`'s
/// `ItemComponents()`).
pub fn item_components_value(graph: &mut Graph) -> (NodeId, NodeId) {
    let obj_begin = char_node(graph, '{');
    graph.note(obj_begin, "note._json.object.begin");
    let obj_end = char_node(graph, '}');
    graph.note(obj_end, "note._json.object.end");
    series(graph, obj_begin, item_component_pair, |g| char_node(g, ','), obj_end, true)
}

/// `%%s`, `%%1`..`%%9` — three-character substitution markers
/// (`nodes.py`'s `RE_SUBSTITUTION`).
fn find_substitutions(text: &str) -> Vec<(usize, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i + 3 <= chars.len() {
        if chars[i] == '%' && chars[i + 1] == '%' {
            let c = chars[i + 2];
            if c == 's' || (c.is_ascii_digit() && c != '0') {
                out.push((i, i + 3));
                i += 3;
                continue;
            }
        }
        i += 1;
    }
    out
}

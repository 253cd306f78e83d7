//! Leaf constructs: literal characters/words, numbers, ids, quoted and
//! bare text. Grounded on `nodes.py`'s `Char`, `Chars`, `Keyword`,
//! `Enumerate`, `Integer`, `Float`, `Boolean`, `Word`, `NamespacedId`,
//! `QuotedString`, `BareText`, `OffsetFloat`.

use mccmd_idtable::IdNode;

use crate::diagnostic::{keys, Diagnostic, DiagnosticKind};
use crate::font::Font;
use crate::node::{Graph, NodeId, NodeKind, ParseFailure, SuggestEnv, Value};
use crate::reader::{Reader, DIGITS, SIGNS};
use crate::subparser;
use crate::suggestion::{char_class_rule, char_rule_for, str_find_rule, RuleWeight, Suggestion};

const NAMESPACED_ID_CHARS: &str = "0123456789:._-abcdefghijklmnopqrstuvwxyz";

pub fn char_node(graph: &mut Graph, expected: char) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(move |reader: &mut Reader| {
            if reader.peek() == Some(expected) {
                reader.next();
                Ok(Value::None)
            } else {
                Err(ParseFailure::Expectation)
            }
        }),
        suggest: Box::new(move |_env: &SuggestEnv<'_>| {
            vec![Suggestion::new("autocomp.char", expected.to_string(), char_rule_for(expected))
                .with_kwarg("char", expected.to_string())]
        }),
    });
    graph.no_argument_end(id);
    graph.expect(id, keys::EXPECT_CHAR);
    id
}

pub fn chars_node(graph: &mut Graph, literal: &'static str) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(move |reader: &mut Reader| {
            let start = reader.get_location();
            for expected in literal.chars() {
                if reader.next() != Some(expected) {
                    reader.set_location(start);
                    return Err(ParseFailure::Expectation);
                }
            }
            Ok(Value::None)
        }),
        suggest: Box::new(move |_env: &SuggestEnv<'_>| {
            vec![Suggestion::new("autocomp.chars", literal, str_find_rule(literal)).with_kwarg("chars", literal)]
        }),
    });
    graph.no_argument_end(id);
    graph.font(id, Font::Meta);
    graph.expect(id, keys::EXPECT_CHARS);
    id
}

pub fn keyword_node(graph: &mut Graph, word: &'static str) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(move |reader: &mut Reader| {
            let start = reader.get_location();
            if reader.read_word() == word {
                Ok(Value::None)
            } else {
                reader.set_location(start);
                Err(ParseFailure::Expectation)
            }
        }),
        suggest: Box::new(move |_env: &SuggestEnv<'_>| {
            vec![Suggestion::new("autocomp.keyword", word, str_find_rule(word)).with_kwarg("keyword", word)]
        }),
    });
    graph.font(id, Font::Keyword);
    graph.expect(id, keys::EXPECT_KEYWORD);
    id
}

/// Word match, case-insensitively, used for selector filter names
/// (`nodes.py`'s `KeywordCaseInsensitive`).
pub fn keyword_ci_node(graph: &mut Graph, word: &'static str) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(move |reader: &mut Reader| {
            let start = reader.get_location();
            if reader.read_word().eq_ignore_ascii_case(word) {
                Ok(Value::None)
            } else {
                reader.set_location(start);
                Err(ParseFailure::Expectation)
            }
        }),
        suggest: Box::new(move |_env: &SuggestEnv<'_>| {
            vec![Suggestion::new("autocomp.keyword", word, str_find_rule(word)).with_kwarg("keyword", word)]
        }),
    });
    graph.font(id, Font::Keyword);
    graph.expect(id, keys::EXPECT_KEYWORD);
    id
}

pub fn enumerate_node(graph: &mut Graph, options: &'static [&'static str]) -> NodeId {
    enumerate_node_noted(graph, options, &[])
}

/// `options` paired one-to-one with `notes` (same length as `options`, or
/// empty to mean "no notes"); mirrors `nodes.py`'s `NotedEnumerate`.
pub fn enumerate_node_noted(
    graph: &mut Graph,
    options: &'static [&'static str],
    notes: &'static [&'static str],
) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(move |reader: &mut Reader| {
            let start = reader.get_location();
            let word = reader.read_word();
            if options.contains(&word.as_str()) {
                Ok(Value::Str(word))
            } else {
                reader.set_location(start);
                Err(ParseFailure::Expectation)
            }
        }),
        suggest: Box::new(move |_env: &SuggestEnv<'_>| {
            options
                .iter()
                .enumerate()
                .map(|(i, opt)| {
                    let mut s = Suggestion::new("autocomp.option", *opt, str_find_rule(*opt)).with_kwarg("option", *opt);
                    if let Some(note) = notes.get(i) {
                        s = s.with_note(*note);
                    }
                    s
                })
                .collect()
        }),
    });
    graph.font(id, Font::Keyword);
    graph.expect(id, keys::EXPECT_ENUM);
    id
}

pub fn integer_node(graph: &mut Graph) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(|reader: &mut Reader| reader.read_int().map(Value::Int).map_err(|_| ParseFailure::Expectation)),
        suggest: Box::new(|_env: &SuggestEnv<'_>| {
            vec![Suggestion::new("autocomp.integer", "0", char_class_rule(DIGITS_AND_SIGNS))]
        }),
    });
    graph.font(id, Font::Numeric);
    graph.expect(id, keys::EXPECT_INT);
    id
}

/// An integer that doesn't itself require an argument terminator
/// (`nodes.py`'s `IntegerNoEnd`, used by `IntRange` so `1..5` doesn't need
/// a space before `..`).
pub fn integer_no_end_node(graph: &mut Graph) -> NodeId {
    let id = integer_node(graph);
    graph.no_argument_end(id);
    id
}

const DIGITS_AND_SIGNS: &str = "0123456789+-";
const DIGITS_SIGNS_DOT: &str = "0123456789+-.";

pub fn float_node(graph: &mut Graph) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(|reader: &mut Reader| {
            reader.read_float(false).map(Value::Float).map_err(|_| ParseFailure::Expectation)
        }),
        suggest: Box::new(|_env: &SuggestEnv<'_>| {
            vec![Suggestion::new("autocomp.float", "0.0", char_class_rule(DIGITS_SIGNS_DOT))]
        }),
    });
    graph.font(id, Font::Numeric);
    graph.expect(id, keys::EXPECT_FLOAT);
    id
}

/// A float that may omit its integer part (`.5`) — relative position and
/// rotation offsets (`nodes.py`'s `OffsetFloat`).
pub fn offset_float_node(graph: &mut Graph) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(|reader: &mut Reader| {
            reader.read_float(true).map(Value::Float).map_err(|_| ParseFailure::Expectation)
        }),
        suggest: Box::new(|_env: &SuggestEnv<'_>| {
            vec![Suggestion::new("autocomp.offset_float", "0", char_class_rule(DIGITS_SIGNS_DOT))]
        }),
    });
    graph.font(id, Font::Position);
    graph.expect(id, keys::EXPECT_OFFSET_FLOAT);
    id
}

pub fn word_node(graph: &mut Graph) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(|reader: &mut Reader| {
            let word = reader.read_word();
            if word.is_empty() {
                Err(ParseFailure::Expectation)
            } else {
                Ok(Value::Str(word))
            }
        }),
        suggest: Box::new(|_env: &SuggestEnv<'_>| {
            vec![Suggestion::new("autocomp.word", "word", |prefix: &str| {
                if prefix.chars().any(|c| c == ' ') {
                    RuleWeight::Failed
                } else {
                    RuleWeight::Other
                }
            })]
        }),
    });
    graph.font(id, Font::String);
    graph.expect(id, keys::EXPECT_WORD);
    id
}

pub fn boolean_node(graph: &mut Graph) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(|reader: &mut Reader| match reader.read_word().as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(ParseFailure::Expectation),
        }),
        suggest: Box::new(|_env: &SuggestEnv<'_>| {
            vec![
                Suggestion::new("autocomp.true", "true", str_find_rule("true")),
                Suggestion::new("autocomp.false", "false", str_find_rule("false")),
            ]
        }),
    });
    graph.font(id, Font::Numeric);
    graph.expect(id, keys::EXPECT_BOOL);
    id
}

/// A `Word` restricted to the `NAMESPACEDID` charset, optionally tagged
/// with a catalogue category for static (non-dynamic) id suggestions
/// (`nodes.py`'s `NamespacedId`).
pub fn namespaced_id_node(graph: &mut Graph, id_category: Option<&'static str>) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(move |reader: &mut Reader| {
            let start = reader.get_location();
            let word = reader.read_word();
            if word.is_empty() {
                return Err(ParseFailure::Expectation);
            }
            if let Some(bad) = word.chars().find(|c| !NAMESPACED_ID_CHARS.contains(*c)) {
                let diag = Diagnostic::new(
                    crate::position::Span::new(start, reader.get_location()),
                    DiagnosticKind::ArgParse,
                    keys::ID_INVALID,
                )
                .with_kwarg("char", bad.to_string());
                return Err(ParseFailure::ArgParse(diag));
            }
            Ok(Value::Str(word))
        }),
        suggest: Box::new(move |env: &SuggestEnv<'_>| id_category_suggestions(env, id_category)),
    });
    graph.font(id, Font::String);
    graph.expect(id, keys::EXPECT_WORD);
    id
}

/// A plain `Word` whose suggestions are drawn from an `IdTable` category
/// with no charset restriction of its own — game rules, permissions and
/// similar identifiers that aren't `NAMESPACEDID`-shaped (`nodes.py`'s
/// `GameRule`/`IdPermission`, both subclasses of `Word` rather than
/// `NamespacedId`).
pub fn catalogued_word_node(graph: &mut Graph, category: &'static str) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(|reader: &mut Reader| {
            let word = reader.read_word();
            if word.is_empty() {
                Err(ParseFailure::Expectation)
            } else {
                Ok(Value::Str(word))
            }
        }),
        suggest: Box::new(move |env: &SuggestEnv<'_>| id_category_suggestions(env, Some(category))),
    });
    graph.font(id, Font::String);
    graph.expect(id, keys::EXPECT_WORD);
    id
}

fn id_category_suggestions(env: &SuggestEnv<'_>, category: Option<&'static str>) -> Vec<Suggestion> {
    let Some(category) = category else {
        return Vec::new();
    };
    let Some(table) = env.id_table else {
        return Vec::new();
    };
    let Some(IdNode::Map(entries)) = table.get(&[category.to_string()]) else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|(id, node)| {
            let label = node.as_label().map(str::to_owned).unwrap_or_else(|| id.clone());
            Suggestion::new(label, id.clone(), str_find_rule(id.clone()))
        })
        .collect()
}

/// `QuotedString` — a plain `"..."` literal with no inner grammar of its
/// own, bridged through `subparser` purely for its decode/escape handling.
pub fn quoted_string_node(graph: &mut Graph) -> NodeId {
    let id = graph.alloc(NodeKind::Subparsing(Box::new(|marker, _graph| {
        let decoded = subparser::read_quoted_string(&mut marker.reader)?;
        Ok(Value::Str(decoded.text))
    })));
    graph.no_argument_end(id);
    graph.font(id, Font::String);
    graph.expect(id, keys::EXPECT_QUOTED_STR);
    id
}

/// `String` — a bare `Word` or a `QuotedString`, whichever matches
/// (`nodes.py`'s `String`, used heavily by selector filters).
pub fn string_node(graph: &mut Graph) -> NodeId {
    let root = graph.alloc(NodeKind::Compressed);
    let word = word_node(graph);
    let qstr = quoted_string_node(graph);
    graph.branch(root, word);
    graph.branch(root, qstr);
    root
}

/// Consumes to end of line (`nodes.py`'s `BareText`).
pub fn bare_text_node(graph: &mut Graph, empty_ok: bool) -> NodeId {
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(move |reader: &mut Reader| {
            let text = reader.read_until_eol();
            if text.is_empty() && !empty_ok {
                Err(ParseFailure::Expectation)
            } else {
                Ok(Value::Str(text))
            }
        }),
        suggest: Box::new(|_env: &SuggestEnv<'_>| vec![Suggestion::new("autocomp.bare_text", "text", |_| RuleWeight::Other)]),
    });
    graph.font(id, Font::String);
    graph.no_argument_end(id);
    graph.expect(id, keys::EXPECT_BARE_TEXT);
    id
}

/// Greedy run of `x`/`y`/`z`, each at most once (`nodes.py`'s `Swizzle`).
pub fn swizzle_node(graph: &mut Graph) -> NodeId {
    const ALL: [&str; 7] = ["x", "y", "z", "xy", "yz", "xz", "xyz"];
    let id = graph.alloc(NodeKind::Leaf {
        parse: Box::new(|reader: &mut Reader| {
            let start = reader.get_location();
            let word = reader.read_word();
            let mut seen = std::collections::HashSet::new();
            let valid = !word.is_empty()
                && word.chars().all(|c| matches!(c, 'x' | 'y' | 'z') && seen.insert(c));
            if valid {
                Ok(Value::Str(word))
            } else {
                reader.set_location(start);
                Err(ParseFailure::Expectation)
            }
        }),
        suggest: Box::new(|_env: &SuggestEnv<'_>| {
            ALL.iter().map(|s| Suggestion::new("autocomp.swizzle", *s, str_find_rule(*s)).with_kwarg("swizzle", *s)).collect()
        }),
    });
    graph.font(id, Font::Keyword);
    graph.expect(id, keys::EXPECT_SWIZZLE);
    id
}

/// Terminal sentinel used by every grammar that ends argument parsing at
/// the line boundary (`nodes.py`'s `EOL`). Its suggestion ("end the line
/// here") and its "too many arguments" failure on trailing content are
/// both handled generically by the engine for every `Finish` node.
pub fn eol_node(graph: &mut Graph) -> NodeId {
    let id = graph.finish_node();
    graph.no_argument_end(id);
    id
}

//! Bridges a decoded string payload (a quoted string's content, or a JSON
//! string's `#lib`-tagged content) back into the main grammar, so that
//! escape sequences like `A` don't throw off highlight/autocomplete
//! column math in the outer source.
//!
//! There's no prior art for this in `apollo_parser` itself — its
//! strings are opaque tokens, never re-parsed — so the shape here is
//! original: decode once, remember where each decoded character came
//! from, run the engine's own recursive descent over the decoded text in
//! a throwaway child `Marker`, then translate its marks back outward.

use crate::diagnostic::{self, Diagnostic, DiagnosticKind};
use crate::engine;
use crate::font::Font;
use crate::marker::{FontMark, Marker};
use crate::node::{Graph, NodeId, ParseFailure, Value};
use crate::position::{Position, Span};
use crate::reader::Reader;
use crate::version::Version;

pub type SubparseFn = Box<dyn Fn(&mut Marker, &Graph) -> Result<Value, ParseFailure> + Send + Sync>;

/// A decoded quoted string plus the means to translate positions in it
/// back to the source it came from.
pub struct DecodedString {
    pub text: String,
    /// `col_map[i]` is the outer `Position` where decoded char `i` began;
    /// one extra trailing entry marks the position of the closing quote.
    col_map: Vec<Position>,
}

impl DecodedString {
    pub fn translate(&self, begin: usize, end: usize) -> Span {
        Span::new(self.col_map[begin], self.col_map[end])
    }
}

/// Reads a `"..."`-delimited string starting at the reader's current
/// position (which must be the opening quote), decoding `\"`, `\\`, `\n`,
/// `\t`, `\r`, `\/` and `\uXXXX` escapes. Fails `Expectation` if the
/// cursor isn't on a `"`; fails `ArgParse` for an unterminated string or a
/// malformed `\u` escape (tier 2 per diagnostic.rs).
pub fn read_quoted_string(reader: &mut Reader) -> Result<DecodedString, ParseFailure> {
    if reader.peek() != Some('"') {
        return Err(ParseFailure::Expectation);
    }
    let start = reader.get_location();
    reader.next();

    let mut text = String::new();
    let mut col_map = Vec::new();

    loop {
        let char_start = reader.get_location();
        match reader.peek() {
            None | Some('\n') | Some('\r') => {
                let diag = Diagnostic::new(
                    Span::new(start, reader.get_location()),
                    DiagnosticKind::ArgParse,
                    diagnostic::keys::UNCLOSED_STR,
                );
                return Err(ParseFailure::ArgParse(diag));
            }
            Some('"') => {
                reader.next();
                col_map.push(char_start);
                break;
            }
            Some('\\') => {
                reader.next();
                match reader.peek() {
                    Some('"') => {
                        reader.next();
                        text.push('"');
                    }
                    Some('\\') => {
                        reader.next();
                        text.push('\\');
                    }
                    Some('/') => {
                        reader.next();
                        text.push('/');
                    }
                    Some('n') => {
                        reader.next();
                        text.push('\n');
                    }
                    Some('t') => {
                        reader.next();
                        text.push('\t');
                    }
                    Some('r') => {
                        reader.next();
                        text.push('\r');
                    }
                    Some('u') => {
                        reader.next();
                        let mut hex = String::with_capacity(4);
                        for _ in 0..4 {
                            match reader.peek() {
                                Some(c) if c.is_ascii_hexdigit() => {
                                    hex.push(c);
                                    reader.next();
                                }
                                _ => {
                                    let diag = Diagnostic::new(
                                        Span::new(char_start, reader.get_location()),
                                        DiagnosticKind::ArgParse,
                                        diagnostic::keys::JSON_STR_U_ESCAPE,
                                    );
                                    return Err(ParseFailure::ArgParse(diag));
                                }
                            }
                        }
                        match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                            Some(decoded) => text.push(decoded),
                            None => {
                                let diag = Diagnostic::new(
                                    Span::new(char_start, reader.get_location()),
                                    DiagnosticKind::ArgParse,
                                    diagnostic::keys::JSON_STR_U_ESCAPE,
                                );
                                return Err(ParseFailure::ArgParse(diag));
                            }
                        }
                    }
                    _ => {
                        let diag = Diagnostic::new(
                            Span::new(char_start, reader.get_location()),
                            DiagnosticKind::ArgParse,
                            diagnostic::keys::UNCLOSED_STR,
                        );
                        return Err(ParseFailure::ArgParse(diag));
                    }
                }
                col_map.push(char_start);
            }
            Some(c) => {
                reader.next();
                text.push(c);
                col_map.push(char_start);
            }
        }
    }

    Ok(DecodedString { text, col_map })
}

/// Runs `inner_root` over `decoded.text` in a fresh child `Marker`. On
/// full-consumption success, translates the child's font/AC marks into
/// `outer`'s lists and returns the parsed value; otherwise returns `None`
/// and leaves `outer` untouched — the caller degrades to plain-string
/// highlighting (spec behaviour: sub-parser failures never surface their
/// own diagnostics).
pub fn run_inner_grammar(
    graph: &Graph,
    inner_root: NodeId,
    decoded: &DecodedString,
    outer: &mut Marker,
    version: Version,
) -> Option<Value> {
    let mut child = Marker::new(Reader::new(&decoded.text), version);
    let value = engine::parse_node(graph, &mut child, inner_root).ok()?;
    if !child.reader.is_finish() {
        return None;
    }

    for mark in &child.font_marks {
        outer.font_marks.push(FontMark {
            span: translate_decoded_span(decoded, mark.span),
            font: mark.font,
        });
    }
    for mark in &child.ac_marks {
        let mut translated = mark.clone();
        translated.span = translate_decoded_span(decoded, mark.span);
        outer.ac_marks.push(translated);
    }

    Some(value)
}

fn translate_decoded_span(decoded: &DecodedString, span: Span) -> Span {
    decoded.translate(span.begin.offset, span.end.offset)
}

/// Builds a `Subparsing` node behaviour: decode the quoted string, try
/// `inner_root` against its content, and fall back to the plain decoded
/// string (still a valid argument value, just without the extra
/// highlighting) when the inner grammar doesn't fully match.
pub fn quoted_string_with_inner_grammar(inner_root: NodeId, default_font: Font) -> SubparseFn {
    Box::new(move |marker: &mut Marker, graph: &Graph| {
        let outer_start = marker.reader.get_location();
        let decoded = read_quoted_string(&mut marker.reader)?;
        let outer_end = marker.reader.get_location();

        // Base coverage over the whole literal (quotes included) first;
        // a successful inner parse appends narrower marks after it, which
        // take priority for their sub-spans (later overrides earlier).
        marker.font_marks.push(FontMark { span: Span::new(outer_start, outer_end), font: default_font });
        let version = marker.version;
        run_inner_grammar(graph, inner_root, &decoded, marker, version);

        Ok(Value::Str(decoded.text))
    })
}

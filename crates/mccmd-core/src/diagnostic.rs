//! Diagnostics: i18n-keyed parse/semantic errors.

use std::collections::BTreeMap;

use crate::position::Span;

/// The three failure tiers, plus an `UnreachableBranch` kind reserved for
/// internal consistency checks (a branch whose version predicate and
/// argument-end flags make it provably dead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    ArgParse,
    Expectation,
    Semantic,
    UnreachableBranch,
}

/// A substituted value attached to a diagnostic or suggestion message key.
#[derive(Debug, Clone, PartialEq)]
pub enum KwArg {
    Str(String),
    Int(i64),
    Float(f64),
}

impl From<&str> for KwArg {
    fn from(s: &str) -> Self {
        KwArg::Str(s.to_owned())
    }
}
impl From<String> for KwArg {
    fn from(s: String) -> Self {
        KwArg::Str(s)
    }
}
impl From<i64> for KwArg {
    fn from(n: i64) -> Self {
        KwArg::Int(n)
    }
}
impl From<f64> for KwArg {
    fn from(n: f64) -> Self {
        KwArg::Float(n)
    }
}

/// `(span, kind, message_key, kwargs)`.
///
/// `message_key` is never localized text: callers own i18n lookup. `keys`
/// below lists the representative key subset this crate emits.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub span: Span,
    pub kind: DiagnosticKind,
    pub message_key: &'static str,
    pub kwargs: BTreeMap<&'static str, KwArg>,
}

impl Diagnostic {
    pub fn new(span: Span, kind: DiagnosticKind, message_key: &'static str) -> Self {
        Diagnostic { span, kind, message_key, kwargs: BTreeMap::new() }
    }

    pub fn with_kwarg(mut self, name: &'static str, value: impl Into<KwArg>) -> Self {
        self.kwargs.insert(name, value.into());
        self
    }
}

/// Message keys referenced directly by `crate::grammar`.
pub mod keys {
    pub const UNCLOSED_STR: &str = "error.syntax.unclosed_str";
    pub const TOO_MANY_ARGS: &str = "error.syntax.too_many_args";
    pub const ID_INVALID: &str = "error.syntax.id_invalid";
    pub const JSON_STR_U_ESCAPE: &str = "error.syntax.json_str_u_escape";

    pub const NUMBER_OUT_OF_RANGE: &str = "error.semantic.number.out_of_range";
    pub const NUMBER_CANT_BE: &str = "error.semantic.number.cant_be";
    pub const NUMBER_MUST_BE: &str = "error.semantic.number.must_be";

    pub const EXPECT_INT: &str = "error.expect.int";
    pub const EXPECT_FLOAT: &str = "error.expect.float";
    pub const EXPECT_WORD: &str = "error.expect.word";
    pub const EXPECT_KEYWORD: &str = "error.expect.keyword";
    pub const EXPECT_ENUM: &str = "error.expect.enum";
    pub const EXPECT_BOOL: &str = "error.expect.bool";
    pub const EXPECT_QUOTED_STR: &str = "error.expect.quoted_str";
    pub const EXPECT_CHARS: &str = "error.expect.chars";
    pub const EXPECT_CHAR: &str = "error.expect.char";
    pub const EXPECT_BARE_TEXT: &str = "error.expect.bare_text";
    pub const EXPECT_OFFSET_FLOAT: &str = "error.expect.offset_float";
    pub const EXPECT_SWIZZLE: &str = "error.expect.swizzle";
    pub const EXPECT_JSON: &str = "error.expect.json";
    pub const EXPECT_EOL: &str = "error.expect.eol";
    pub const EXPECT_TERMINATOR: &str = "error.expect.terminator";
    pub const EXPECT_CONTINUATION: &str = "error.expect.continuation";
}
